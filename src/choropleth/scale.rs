//! Value → colour and value → marker size mappings

use crate::choropleth::style::Color;

/// Bucket colours from highest to lowest access
pub const PALETTE: [Color; 5] = [
    Color::rgb(0xff, 0xbf, 0x00),
    Color::rgb(0xcf, 0xa3, 0x3a),
    Color::rgb(0x8c, 0x7a, 0x4a),
    Color::rgb(0x55, 0x55, 0x55),
    Color::rgb(0x2b, 0x2b, 0x2b),
];

/// Lower bounds (exclusive) of the upper four buckets
pub const THRESHOLDS: [f64; 4] = [80.0, 60.0, 40.0, 20.0];

pub const MIN_BULB_SIZE: f64 = 14.0;
pub const MAX_BULB_SIZE: f64 = 48.0;

/// Fill colour of a value; missing and NaN values land in the lowest bucket
pub fn color_for(value: Option<f64>) -> Color {
    let Some(v) = value.filter(|v| !v.is_nan()) else {
        return PALETTE[4];
    };
    THRESHOLDS
        .iter()
        .position(|threshold| v > *threshold)
        .map_or(PALETTE[4], |bucket| PALETTE[bucket])
}

/// Marker icon edge length in pixels
pub fn bulb_size(value: Option<f64>) -> u32 {
    let v = value.filter(|v| !v.is_nan()).unwrap_or(0.0).clamp(0.0, 100.0);
    (MIN_BULB_SIZE + (MAX_BULB_SIZE - MIN_BULB_SIZE) * v / 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_buckets() {
        assert_eq!(color_for(Some(90.0)).to_hex(), "#ffbf00");
        assert_eq!(color_for(Some(80.0)).to_hex(), "#cfa33a");
        assert_eq!(color_for(Some(61.0)).to_hex(), "#cfa33a");
        assert_eq!(color_for(Some(60.0)).to_hex(), "#8c7a4a");
        assert_eq!(color_for(Some(40.5)).to_hex(), "#8c7a4a");
        assert_eq!(color_for(Some(21.0)).to_hex(), "#555555");
        assert_eq!(color_for(Some(20.0)).to_hex(), "#2b2b2b");
        assert_eq!(color_for(Some(0.0)).to_hex(), "#2b2b2b");
    }

    #[test]
    fn test_missing_value_is_lowest_bucket() {
        assert_eq!(color_for(None), PALETTE[4]);
        assert_eq!(color_for(Some(f64::NAN)), PALETTE[4]);
    }

    #[test]
    fn test_bulb_size_endpoints() {
        assert_eq!(bulb_size(Some(0.0)), 14);
        assert_eq!(bulb_size(Some(100.0)), 48);
        assert_eq!(bulb_size(Some(50.0)), 31);
        assert_eq!(bulb_size(Some(-5.0)), 14);
        assert_eq!(bulb_size(Some(250.0)), 48);
        assert_eq!(bulb_size(None), 14);
    }

    #[test]
    fn test_bulb_size_is_monotonic() {
        let sizes: Vec<u32> = (0..=100).map(|v| bulb_size(Some(v as f64))).collect();
        assert!(sizes.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
