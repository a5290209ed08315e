//! Choropleth semantics: colour scale, polygon styles, popups and legend

pub mod legend;
pub mod popup;
pub mod scale;
pub mod style;

pub use legend::{legend_entries, LegendEntry, LEGEND_TITLE};
pub use popup::{popup_content, Popup, PopupContent, PopupManager};
pub use scale::{bulb_size, color_for};
pub use style::{default_style, focused_style, unfocused_style, Color, PolygonStyle};
