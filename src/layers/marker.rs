use crate::choropleth::scale::bulb_size;
use crate::core::geo::{LatLng, LatLngBounds, Point};
use crate::data::feature::{CountryFeature, FeatureCollection, FeatureId};
use crate::layers::base::{LayerProperties, LayerTrait, LayerType};

/// A bulb icon sized by the country's access value
#[derive(Debug, Clone, PartialEq)]
pub struct BulbMarker {
    pub feature: FeatureId,
    pub position: LatLng,
    /// Icon edge length in pixels
    pub size: u32,
}

impl BulbMarker {
    /// `None` when the feature has no centroid
    pub fn for_feature(feature: &CountryFeature) -> Option<Self> {
        Some(Self {
            feature: feature.id,
            position: feature.centroid?,
            size: bulb_size(feature.value),
        })
    }

    pub fn icon_size(&self) -> Point {
        Point::new(self.size as f64, self.size as f64)
    }

    /// Icon pixel placed on the marker position: bottom-center
    pub fn icon_anchor(&self) -> Point {
        Point::new(self.size as f64 / 2.0, self.size as f64)
    }

    /// Offset from the position to where an attached popup would open
    pub fn popup_anchor(&self) -> Point {
        Point::new(0.0, -(self.size as f64))
    }
}

pub struct MarkerLayer {
    properties: LayerProperties,
    markers: Vec<BulbMarker>,
}

impl MarkerLayer {
    pub fn new(id: &str) -> Self {
        Self {
            properties: LayerProperties::new(id, LayerType::Marker),
            markers: Vec::new(),
        }
    }

    pub fn from_collection(id: &str, collection: &FeatureCollection) -> Self {
        let mut layer = Self::new(id);
        for feature in collection.features() {
            layer.add_feature(feature);
        }
        layer
    }

    /// Adds the marker of `feature`; returns false when it has no centroid
    pub fn add_feature(&mut self, feature: &CountryFeature) -> bool {
        match BulbMarker::for_feature(feature) {
            Some(marker) => {
                self.markers.push(marker);
                true
            }
            None => {
                log::debug!("no centroid for {:?}, skipping marker", feature.name);
                false
            }
        }
    }

    pub fn markers(&self) -> &[BulbMarker] {
        &self.markers
    }

    pub fn marker_for(&self, feature: FeatureId) -> Option<&BulbMarker> {
        self.markers.iter().find(|m| m.feature == feature)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl LayerTrait for MarkerLayer {
    crate::impl_layer_trait!(properties);

    fn bounds(&self) -> Option<LatLngBounds> {
        let positions: Vec<LatLng> = self.markers.iter().map(|m| m.position).collect();
        LatLngBounds::from_points(&positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
    {
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"ADM0_NAME": "Niger", "Value": 50, "cen_x": 9.4, "cen_y": 17.4},
             "geometry": {"type": "Polygon", "coordinates": [[[0.2, 11.7], [16.0, 11.7], [16.0, 23.5], [0.2, 11.7]]]}},
            {"type": "Feature", "properties": {"ADM0_NAME": "Mali", "Value": 53.4},
             "geometry": {"type": "Polygon", "coordinates": [[[-12.2, 10.1], [4.2, 10.1], [4.2, 25.0], [-12.2, 10.1]]]}}
        ]
    }
    "#;

    #[test]
    fn test_markers_skip_missing_centroid() {
        let collection = FeatureCollection::from_str(SAMPLE).unwrap();
        let layer = MarkerLayer::from_collection("bulbs", &collection);

        assert_eq!(layer.len(), 1);
        let niger = layer.marker_for(0).unwrap();
        assert_eq!(niger.position, LatLng::new(17.4, 9.4));
        assert!(layer.marker_for(1).is_none());
    }

    #[test]
    fn test_icon_geometry() {
        let marker = BulbMarker {
            feature: 0,
            position: LatLng::new(17.4, 9.4),
            size: 31,
        };
        assert_eq!(marker.icon_size(), Point::new(31.0, 31.0));
        assert_eq!(marker.icon_anchor(), Point::new(15.5, 31.0));
        assert_eq!(marker.popup_anchor(), Point::new(0.0, -31.0));
    }
}
