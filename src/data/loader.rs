//! Fetching the dataset from disk or over HTTP

use crate::data::feature::FeatureCollection;
use crate::{MapError, Result};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::time::Duration;

/// Shared async HTTP client for dataset and tile requests
pub(crate) static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent(concat!("wafmap/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(8)
        .build()
        .unwrap_or_else(|err| {
            log::warn!("falling back to default HTTP client: {}", err);
            reqwest::Client::new()
        })
});

/// Somewhere the GeoJSON document can be read from
#[async_trait]
pub trait FeatureSource: Send + Sync {
    /// Reads the whole document as text
    async fn fetch(&self) -> Result<String>;

    /// Human-readable location, used in logs and error banners
    fn describe(&self) -> String;
}

/// Reads the dataset from a local file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FeatureSource for FileSource {
    async fn fetch(&self) -> Result<String> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Downloads the dataset with a single GET request
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl FeatureSource for HttpSource {
    async fn fetch(&self) -> Result<String> {
        let response = HTTP_CLIENT.get(&self.url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Picks an HTTP source for `http(s)://` locations and a file source otherwise
pub fn source_for(location: &str) -> Box<dyn FeatureSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

/// Fetches and parses the dataset in one go
pub async fn load_collection(source: &dyn FeatureSource) -> Result<FeatureCollection> {
    log::info!("loading features from {}", source.describe());
    let text = source.fetch().await?;
    let collection = FeatureCollection::from_str(&text)?;
    if collection.is_empty() {
        return Err(MapError::InvalidGeoJson(format!(
            "{} contains no polygon features",
            source.describe()
        )));
    }
    log::info!("loaded {} features", collection.len());
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_for_picks_by_scheme() {
        assert_eq!(
            source_for("https://example.org/waf.geojson").describe(),
            "https://example.org/waf.geojson"
        );
        assert_eq!(
            source_for("data/waf_data.geojson").describe(),
            "data/waf_data.geojson"
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = FileSource::new("does/not/exist.geojson");
        let err = load_collection(&source).await.unwrap_err();
        assert!(matches!(err, MapError::Io(_)));
    }
}
