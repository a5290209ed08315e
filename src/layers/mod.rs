pub mod base;
pub mod choropleth;
pub mod macros;
pub mod marker;
pub mod tile;

pub use base::{LayerProperties, LayerTrait, LayerType};
pub use choropleth::{ChoroplethLayer, ChoroplethPolygon};
pub use marker::{BulbMarker, MarkerLayer};
pub use tile::{TileLayer, TileLayerOptions};
