//! Country features extracted from the raw GeoJSON document

use crate::core::geo::{LatLng, LatLngBounds};
use crate::data::geojson::{GeoJson, GeoJsonFeature, PolygonRings, Ring};
use crate::Result;
use geo::{Coord, LineString, MultiPolygon, Polygon};

/// Property holding the country display name
pub const NAME_PROPERTY: &str = "ADM0_NAME";
/// Property holding the electricity-access percentage
pub const VALUE_PROPERTY: &str = "Value";
/// Centroid longitude
pub const CENTROID_X_PROPERTY: &str = "cen_x";
/// Centroid latitude
pub const CENTROID_Y_PROPERTY: &str = "cen_y";

/// Position of a feature in its collection, stable for the session
pub type FeatureId = usize;

/// One country polygon with the properties the map reads
#[derive(Debug, Clone, PartialEq)]
pub struct CountryFeature {
    pub id: FeatureId,
    pub name: String,
    /// Access percentage, `None` when absent or not a number
    pub value: Option<f64>,
    /// Marker position, `None` unless both centroid properties are numbers
    pub centroid: Option<LatLng>,
    /// Geometry in geographic coordinates (x = longitude, y = latitude)
    pub geometry: MultiPolygon<f64>,
    pub bounds: LatLngBounds,
}

impl CountryFeature {
    /// Builds a country from a raw feature; `None` when it has no polygonal geometry
    pub fn from_geojson(id: FeatureId, feature: &GeoJsonFeature) -> Option<Self> {
        let geometry = feature.geometry.as_ref()?;
        let polygons = geometry.polygons();
        if polygons.is_empty() {
            return None;
        }
        let bounds = geometry.bounds()?;

        let name = feature
            .string_property(NAME_PROPERTY)
            .unwrap_or_default()
            .to_string();

        // cen_x is the longitude and cen_y the latitude
        let centroid = match (
            feature.number_property(CENTROID_Y_PROPERTY),
            feature.number_property(CENTROID_X_PROPERTY),
        ) {
            (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)),
            _ => None,
        };

        Some(Self {
            id,
            name,
            value: feature.number_property(VALUE_PROPERTY),
            centroid,
            geometry: to_multi_polygon(&polygons),
            bounds,
        })
    }
}

fn to_line_string(ring: &Ring) -> LineString<f64> {
    LineString::from(
        ring.iter()
            .map(|p| Coord { x: p[0], y: p[1] })
            .collect::<Vec<_>>(),
    )
}

fn to_multi_polygon(polygons: &[PolygonRings]) -> MultiPolygon<f64> {
    MultiPolygon::new(
        polygons
            .iter()
            .filter_map(|rings| {
                let (exterior, holes) = rings.split_first()?;
                Some(Polygon::new(
                    to_line_string(exterior),
                    holes.iter().map(to_line_string).collect(),
                ))
            })
            .collect(),
    )
}

/// The loaded dataset, immutable once built
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    features: Vec<CountryFeature>,
}

impl FeatureCollection {
    pub fn from_geojson(document: GeoJson) -> Self {
        let mut features = Vec::new();
        for raw in document.into_features() {
            match CountryFeature::from_geojson(features.len(), &raw) {
                Some(feature) => features.push(feature),
                None => log::warn!(
                    "skipping feature {:?} without polygon geometry",
                    raw.string_property(NAME_PROPERTY).unwrap_or("<unnamed>")
                ),
            }
        }
        Self { features }
    }

    pub fn from_str(geojson_str: &str) -> Result<Self> {
        Ok(Self::from_geojson(GeoJson::from_str(geojson_str)?))
    }

    pub fn features(&self) -> &[CountryFeature] {
        &self.features
    }

    pub fn get(&self, id: FeatureId) -> Option<&CountryFeature> {
        self.features.get(id)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Bounds of every feature together
    pub fn bounds(&self) -> Option<LatLngBounds> {
        self.features
            .iter()
            .map(|f| f.bounds)
            .reduce(|a, b| a.union(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
    {
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"ADM0_NAME": "Benin", "Value": 75, "cen_x": 2.34, "cen_y": 9.65},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.77, 6.2], [3.85, 6.2], [3.85, 12.4], [0.77, 12.4], [0.77, 6.2]]]
                }
            },
            {
                "type": "Feature",
                "properties": {"ADM0_NAME": "Gulf of Guinea label"},
                "geometry": {"type": "Point", "coordinates": [0.0, 3.0]}
            },
            {
                "type": "Feature",
                "properties": {"ADM0_NAME": "Null Island", "cen_x": 0, "cen_y": 0},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[-0.5, -0.5], [0.5, -0.5], [0.5, 0.5], [-0.5, -0.5]]]
                }
            }
        ]
    }
    "#;

    #[test]
    fn test_collection_skips_non_polygons() {
        let collection = FeatureCollection::from_str(SAMPLE).unwrap();
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.features()[0].name, "Benin");
        assert_eq!(collection.features()[1].name, "Null Island");
        assert_eq!(collection.features()[1].id, 1);
    }

    #[test]
    fn test_centroid_reads_cen_y_as_latitude() {
        let collection = FeatureCollection::from_str(SAMPLE).unwrap();
        let benin = &collection.features()[0];

        assert_eq!(benin.centroid, Some(LatLng::new(9.65, 2.34)));
        assert!(benin.bounds.contains(&benin.centroid.unwrap()));
    }

    #[test]
    fn test_zero_centroid_is_kept() {
        let collection = FeatureCollection::from_str(SAMPLE).unwrap();
        assert_eq!(collection.features()[1].centroid, Some(LatLng::new(0.0, 0.0)));
    }

    #[test]
    fn test_missing_value_is_none() {
        let collection = FeatureCollection::from_str(SAMPLE).unwrap();
        assert_eq!(collection.features()[0].value, Some(75.0));
        assert_eq!(collection.features()[1].value, None);
    }

    #[test]
    fn test_collection_bounds() {
        let collection = FeatureCollection::from_str(SAMPLE).unwrap();
        let bounds = collection.bounds().unwrap();
        assert_eq!(bounds.south_west, LatLng::new(-0.5, -0.5));
        assert_eq!(bounds.north_east, LatLng::new(12.4, 3.85));
    }
}
