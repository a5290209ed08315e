//! Core constants derived from Leaflet defaults and the published map view.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Initial map center (latitude, longitude) over West Africa.
pub const DEFAULT_CENTER: (f64, f64) = (12.782540104722486, -4.04528596799415);

/// Initial zoom level.
pub const DEFAULT_ZOOM: f64 = 5.0;

/// Highest zoom the base tiles are requested at.
pub const DEFAULT_MAX_ZOOM: f64 = 18.0;

/// Base tile server.
pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.de/{z}/{x}/{y}.png";

pub const DEFAULT_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Dataset location, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/waf_data.geojson";

/// Icon shared by every marker and popup: a PNG export of the dataset's
/// `bulb_64.svg`, since SVG files are not decoded.
pub const DEFAULT_ICON_PATH: &str = "images/bulb_64.png";

/// Padding in pixels kept around a feature when the view fits to it.
pub const FIT_BOUNDS_PADDING: f64 = 20.0;

/// Duration of an animated fit-to-feature.
pub const VIEW_ANIMATION_MS: u64 = 350;

/// Popups never grow wider than this.
pub const POPUP_MAX_WIDTH: f32 = 300.0;

/// Decoded base tiles kept in memory.
pub const TILE_CACHE_SIZE: usize = 512;
