use crate::core::geo::TileCoord;
use crate::data::loader::HTTP_CLIENT;
use crate::Result;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::time::Duration;

/// Result of a tile download
#[derive(Debug)]
pub struct TileResult {
    pub coord: TileCoord,
    pub data: Result<Vec<u8>>,
}

#[derive(Debug, Clone)]
pub struct TileLoaderConfig {
    /// Attempts per tile, including the first
    pub max_attempts: usize,
    /// Delay between attempts
    pub retry_delay: Duration,
}

impl Default for TileLoaderConfig {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            retry_delay: Duration::from_millis(100),
        }
    }
}

impl TileLoaderConfig {
    pub fn for_testing() -> Self {
        Self {
            max_attempts: 1,
            retry_delay: Duration::ZERO,
        }
    }
}

/// Downloads tiles on a tokio runtime and hands the bytes back over a channel
/// drained by the UI thread once per frame.
pub struct TileLoader {
    handle: tokio::runtime::Handle,
    config: TileLoaderConfig,
    tx: Sender<TileResult>,
    rx: Receiver<TileResult>,
}

impl TileLoader {
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self::with_config(handle, TileLoaderConfig::default())
    }

    pub fn with_config(handle: tokio::runtime::Handle, config: TileLoaderConfig) -> Self {
        let (tx, rx) = unbounded();
        Self {
            handle,
            config,
            tx,
            rx,
        }
    }

    /// Starts downloading `url`; the outcome arrives through [`TileLoader::drain`]
    pub fn request(&self, coord: TileCoord, url: String) {
        let tx = self.tx.clone();
        let config = self.config.clone();

        self.handle.spawn(async move {
            let mut attempt = 1;
            let data = loop {
                log::debug!("fetch tile {:?} attempt {}", coord, attempt);
                match fetch_tile(&url).await {
                    Ok(bytes) => {
                        log::debug!("downloaded tile {:?} ({} bytes)", coord, bytes.len());
                        break Ok(bytes);
                    }
                    Err(err) if attempt < config.max_attempts => {
                        log::debug!("tile {:?} attempt {} failed: {}", coord, attempt, err);
                        attempt += 1;
                        tokio::time::sleep(config.retry_delay).await;
                    }
                    Err(err) => {
                        log::warn!("giving up on tile {:?}: {}", coord, err);
                        break Err(err);
                    }
                }
            };
            // The receiver only goes away when the map is dropped
            let _ = tx.send(TileResult { coord, data });
        });
    }

    /// Every result that arrived since the last call
    pub fn drain(&self) -> Vec<TileResult> {
        self.rx.try_iter().collect()
    }
}

async fn fetch_tile(url: &str) -> Result<Vec<u8>> {
    let response = HTTP_CLIENT.get(url).send().await?.error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}
