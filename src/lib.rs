//! # wafmap
//!
//! Interactive choropleth of electricity access across West Africa.
//!
//! The crate bundles a small Leaflet-style map engine (viewport, base tiles,
//! polygon and marker layers, overlay controls, popups) together with the
//! choropleth itself: value-coloured country polygons, bulb markers sized by
//! access, hover/click focus, a search-by-country control and a legend.
//!
//! [`MapView`] holds all interaction state and runs without a window; the
//! `egui` feature adds [`ui::MapWidget`], which draws it.

pub mod choropleth;
pub mod core;
pub mod data;
pub mod input;
pub mod layers;
pub mod prelude;
#[cfg(feature = "tokio-runtime")]
pub mod tiles;
#[cfg(feature = "egui")]
pub mod ui;
pub mod view;

pub use crate::core::constants;

pub use crate::core::{
    config::MapConfig,
    geo::{LatLng, LatLngBounds, Point, TileCoord},
    viewport::Viewport,
};

pub use choropleth::{bulb_size, color_for, legend_entries, popup_content};
pub use data::{CountryFeature, CountryIndex, FeatureCollection, FeatureId};
pub use input::{FocusState, InteractionEvent};
pub use layers::{ChoroplethLayer, LayerTrait, MarkerLayer, TileLayer};
pub use view::MapView;

#[cfg(feature = "egui")]
pub use ui::MapWidget;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("{0}")]
    InvalidGeoJson(String),

    #[error("Image decode error: {0}")]
    Decode(String),
}

/// Error type alias for convenience
pub type Error = MapError;
