use crate::choropleth::scale::color_for;
use crate::data::feature::CountryFeature;
use serde::{Deserialize, Serialize};

#[cfg(feature = "egui")]
use egui::Color32;

/// Serializable RGBA color that converts to/from `egui::Color32`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses `#rrggbb` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Same color with its alpha scaled by `opacity`
    pub fn with_opacity(&self, opacity: f32) -> Self {
        let alpha = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self::new(self.r, self.g, self.b, alpha)
    }
}

#[cfg(feature = "egui")]
impl From<Color32> for Color {
    fn from(color: Color32) -> Self {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        Self::new(r, g, b, a)
    }
}

#[cfg(feature = "egui")]
impl From<Color> for Color32 {
    fn from(color: Color) -> Self {
        Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

/// Style for country polygons
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonStyle {
    pub fill_color: Color,
    pub stroke_color: Color,
    pub stroke_width: f32,
    /// Fill opacity (0.0 to 1.0)
    pub fill_opacity: f32,
    /// Stroke opacity (0.0 to 1.0)
    pub stroke_opacity: f32,
}

impl PolygonStyle {
    pub fn fill(&self) -> Color {
        self.fill_color.with_opacity(self.fill_opacity)
    }

    pub fn stroke(&self) -> Color {
        self.stroke_color.with_opacity(self.stroke_opacity)
    }
}

const BORDER: Color = Color::rgb(0x55, 0x55, 0x55);
const DIMMED_FILL: Color = Color::rgb(0x3a, 0x3a, 0x3a);
const DIMMED_BORDER: Color = Color::rgb(0x44, 0x44, 0x44);

/// Value-derived resting style of a feature
pub fn default_style(feature: &CountryFeature) -> PolygonStyle {
    PolygonStyle {
        fill_color: color_for(feature.value),
        stroke_color: BORDER,
        stroke_width: 1.0,
        fill_opacity: 0.8,
        stroke_opacity: 1.0,
    }
}

/// Emphasis for the feature under focus
pub fn focused_style(feature: &CountryFeature) -> PolygonStyle {
    PolygonStyle {
        fill_color: color_for(feature.value),
        stroke_color: Color::WHITE,
        stroke_width: 3.0,
        fill_opacity: 0.95,
        stroke_opacity: 1.0,
    }
}

/// Every other feature while one is focused
pub fn unfocused_style() -> PolygonStyle {
    PolygonStyle {
        fill_color: DIMMED_FILL,
        stroke_color: DIMMED_BORDER,
        stroke_width: 1.0,
        fill_opacity: 0.35,
        stroke_opacity: 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::{LatLng, LatLngBounds};
    use geo::MultiPolygon;

    fn country(value: Option<f64>) -> CountryFeature {
        CountryFeature {
            id: 0,
            name: "Ghana".to_string(),
            value,
            centroid: None,
            geometry: MultiPolygon::new(Vec::new()),
            bounds: LatLngBounds::new(LatLng::default(), LatLng::default()),
        }
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Color::from_hex("#ffbf00"), Some(Color::rgb(255, 191, 0)));
        assert_eq!(Color::from_hex("2b2b2b"), Some(Color::rgb(43, 43, 43)));
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::rgb(0xcf, 0xa3, 0x3a).to_hex(), "#cfa33a");
    }

    #[test]
    fn test_default_style() {
        let style = default_style(&country(Some(85.9)));
        assert_eq!(style.fill_color.to_hex(), "#ffbf00");
        assert_eq!(style.stroke_color.to_hex(), "#555555");
        assert_eq!(style.stroke_width, 1.0);
        assert_eq!(style.fill_opacity, 0.8);
        assert_eq!(style.stroke_opacity, 1.0);
    }

    #[test]
    fn test_focused_keeps_fill() {
        let feature = country(Some(45.0));
        let focused = focused_style(&feature);
        assert_eq!(focused.fill_color, default_style(&feature).fill_color);
        assert_eq!(focused.stroke_color, Color::WHITE);
        assert_eq!(focused.stroke_width, 3.0);
        assert_eq!(focused.fill_opacity, 0.95);
    }

    #[test]
    fn test_opacity_applies_to_alpha() {
        assert_eq!(unfocused_style().fill().a, 89);
        assert_eq!(default_style(&country(None)).stroke().a, 255);
    }
}
