//! Configuration for the map view
//!
//! Every field has a default matching the published map, so a missing
//! `wafmap.toml` (or a file that sets only a few keys) is valid.

use crate::core::constants::{
    DEFAULT_ATTRIBUTION, DEFAULT_CENTER, DEFAULT_DATA_PATH, DEFAULT_ICON_PATH, DEFAULT_MAX_ZOOM,
    DEFAULT_TILE_URL, DEFAULT_ZOOM, FIT_BOUNDS_PADDING, TILE_CACHE_SIZE, VIEW_ANIMATION_MS,
};
use crate::core::geo::LatLng;
use crate::Result;
use serde::Deserialize;
use std::path::Path;

/// File looked up in the working directory by the viewer app.
pub const CONFIG_FILE_NAME: &str = "wafmap.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct MapConfig {
    pub view: ViewConfig,
    pub tiles: TileConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Pixels kept around a feature when fitting the view to it
    pub fit_padding: f64,
    pub animation_ms: u64,
}

impl ViewConfig {
    pub fn center(&self) -> LatLng {
        LatLng::new(self.center_lat, self.center_lng)
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            center_lat: DEFAULT_CENTER.0,
            center_lng: DEFAULT_CENTER.1,
            zoom: DEFAULT_ZOOM,
            min_zoom: 0.0,
            max_zoom: DEFAULT_MAX_ZOOM,
            fit_padding: FIT_BOUNDS_PADDING,
            animation_ms: VIEW_ANIMATION_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    /// URL template with `{z}`, `{x}`, `{y}` and optional `{s}` placeholders
    pub url_template: String,
    pub subdomains: Vec<String>,
    pub attribution: String,
    pub max_zoom: u8,
    pub cache_size: usize,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_TILE_URL.to_string(),
            subdomains: Vec::new(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            max_zoom: DEFAULT_MAX_ZOOM as u8,
            cache_size: TILE_CACHE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Local path or `http(s)://` URL of the feature collection
    pub source: String,
    pub icon: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_DATA_PATH.to_string(),
            icon: DEFAULT_ICON_PATH.to_string(),
        }
    }
}

impl MapConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when it exists, otherwise falls back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            log::info!("loading configuration from {}", path.display());
            Self::load_from_file(path)
        } else {
            log::debug!("{} not found, using default configuration", path.display());
            Ok(Self::default())
        }
    }
}
