//! Base tile download and caching

pub mod cache;
#[cfg(feature = "egui")]
pub mod decode;
pub mod loader;

pub use cache::TileCache;
pub use loader::{TileLoader, TileLoaderConfig, TileResult};
