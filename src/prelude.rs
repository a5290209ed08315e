//! Prelude module for common wafmap types and traits
//!
//! `use wafmap::prelude::*;` brings in the types most callers need.

pub use crate::core::{
    animation::ViewAnimation,
    config::{DataConfig, MapConfig, TileConfig, ViewConfig},
    geo::{LatLng, LatLngBounds, Point, TileCoord},
    viewport::Viewport,
};

pub use crate::choropleth::{
    bulb_size, color_for, default_style, focused_style, legend_entries, popup_content,
    unfocused_style, Color, LegendEntry, PolygonStyle, PopupContent,
};

pub use crate::data::{CountryFeature, CountryIndex, FeatureCollection, FeatureId, GeoJson};

#[cfg(feature = "tokio-runtime")]
pub use crate::data::{load_collection, source_for, FeatureSource, FileSource, HttpSource};

pub use crate::input::{EventHandled, FocusState, InteractionEvent};

pub use crate::layers::{
    BulbMarker, ChoroplethLayer, LayerTrait, LayerType, MarkerLayer, TileLayer, TileLayerOptions,
};

pub use crate::view::MapView;

#[cfg(feature = "egui")]
pub use crate::ui::{
    controls::{Control, ControlManager, Position},
    widget::MapWidget,
};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
