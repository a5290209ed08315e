pub mod feature;
pub mod geojson;
pub mod index;
#[cfg(feature = "tokio-runtime")]
pub mod loader;

pub use feature::{CountryFeature, FeatureCollection, FeatureId};
pub use geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry};
pub use index::CountryIndex;
#[cfg(feature = "tokio-runtime")]
pub use loader::{load_collection, source_for, FeatureSource, FileSource, HttpSource};
