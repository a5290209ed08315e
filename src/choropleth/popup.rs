use crate::core::constants::POPUP_MAX_WIDTH;
use crate::core::geo::LatLng;
use crate::data::feature::{CountryFeature, FeatureId};

/// Text shown in a country popup, next to the shared bulb icon
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub title: String,
    pub body: String,
    pub max_width: f32,
}

/// Builds the popup for a country; a missing value reads `n/a`
pub fn popup_content(feature: &CountryFeature) -> PopupContent {
    let value = feature
        .value
        .map_or_else(|| "n/a".to_string(), |v| format!("{}%", v));

    PopupContent {
        title: feature.name.clone(),
        body: format!("Electricity access: {}", value),
        max_width: POPUP_MAX_WIDTH,
    }
}

/// An open popup anchored at a geographic position
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub feature: FeatureId,
    pub position: LatLng,
    pub content: PopupContent,
}

/// Keeps at most one popup open at a time
#[derive(Debug, Clone, Default)]
pub struct PopupManager {
    open: Option<Popup>,
}

impl PopupManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the popup of `feature` at `position`, replacing any open one
    pub fn open_for(&mut self, feature: &CountryFeature, position: LatLng) {
        self.open = Some(Popup {
            feature: feature.id,
            position,
            content: popup_content(feature),
        });
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn current(&self) -> Option<&Popup> {
        self.open.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLngBounds;
    use geo::MultiPolygon;

    fn country(id: FeatureId, name: &str, value: Option<f64>) -> CountryFeature {
        CountryFeature {
            id,
            name: name.to_string(),
            value,
            centroid: None,
            geometry: MultiPolygon::new(Vec::new()),
            bounds: LatLngBounds::from_coords(6.0, 0.7, 12.5, 3.9),
        }
    }

    #[test]
    fn test_popup_content() {
        let content = popup_content(&country(0, "Benin", Some(75.0)));
        assert_eq!(content.title, "Benin");
        assert_eq!(content.body, "Electricity access: 75%");
        assert_eq!(content.max_width, 300.0);

        let content = popup_content(&country(0, "Ghana", Some(85.9)));
        assert_eq!(content.body, "Electricity access: 85.9%");
    }

    #[test]
    fn test_missing_value_reads_na() {
        let content = popup_content(&country(0, "Liberia", None));
        assert_eq!(content.body, "Electricity access: n/a");
    }

    #[test]
    fn test_single_open_popup() {
        let mut popups = PopupManager::new();
        popups.open_for(&country(0, "Benin", Some(75.0)), LatLng::new(9.3, 2.3));
        popups.open_for(&country(1, "Togo", Some(30.0)), LatLng::new(8.6, 0.8));

        let open = popups.current().unwrap();
        assert_eq!(open.feature, 1);
        assert_eq!(open.content.title, "Togo");

        popups.close();
        assert!(!popups.is_open());
    }
}
