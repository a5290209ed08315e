use crate::core::geo::{LatLng, LatLngBounds};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A GeoJSON ring: a closed list of `[lng, lat]` positions
pub type Ring = Vec<[f64; 2]>;

/// A polygon: exterior ring followed by holes
pub type PolygonRings = Vec<Ring>;

/// GeoJSON geometry types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point {
        coordinates: [f64; 2],
    },
    LineString {
        coordinates: Vec<[f64; 2]>,
    },
    Polygon {
        coordinates: PolygonRings,
    },
    MultiPoint {
        coordinates: Vec<[f64; 2]>,
    },
    MultiLineString {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPolygon {
        coordinates: Vec<PolygonRings>,
    },
    GeometryCollection {
        geometries: Vec<GeoJsonGeometry>,
    },
}

/// GeoJSON feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub geometry: Option<GeoJsonGeometry>,
    #[serde(default)]
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

/// Root GeoJSON object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJson {
    Feature(GeoJsonFeature),
    FeatureCollection { features: Vec<GeoJsonFeature> },
    Geometry(GeoJsonGeometry),
}

impl GeoJson {
    pub fn from_str(geojson_str: &str) -> crate::Result<Self> {
        serde_json::from_str(geojson_str)
            .map_err(|e| crate::Error::InvalidGeoJson(format!("Invalid GeoJSON: {}", e)))
    }

    /// Every feature in document order; a bare geometry yields none
    pub fn into_features(self) -> Vec<GeoJsonFeature> {
        match self {
            GeoJson::Feature(feature) => vec![feature],
            GeoJson::FeatureCollection { features } => features,
            GeoJson::Geometry(_) => Vec::new(),
        }
    }
}

impl GeoJsonFeature {
    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.as_ref().and_then(|props| props.get(key))
    }

    /// A numeric property; strings, nulls and non-finite numbers read as absent
    pub fn number_property(&self, key: &str) -> Option<f64> {
        self.property(key)
            .and_then(serde_json::Value::as_f64)
            .filter(|v| v.is_finite())
    }

    pub fn string_property(&self, key: &str) -> Option<&str> {
        self.property(key).and_then(serde_json::Value::as_str)
    }
}

impl GeoJsonGeometry {
    /// The polygonal parts of this geometry, each as exterior + holes
    pub fn polygons(&self) -> Vec<PolygonRings> {
        match self {
            GeoJsonGeometry::Polygon { coordinates } => vec![coordinates.clone()],
            GeoJsonGeometry::MultiPolygon { coordinates } => coordinates.clone(),
            GeoJsonGeometry::GeometryCollection { geometries } => {
                geometries.iter().flat_map(|g| g.polygons()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Converts geometry coordinates to LatLng points
    pub fn to_lat_lng_points(&self) -> Vec<LatLng> {
        match self {
            GeoJsonGeometry::Point { coordinates } => vec![LatLng::from_position(*coordinates)],
            GeoJsonGeometry::LineString { coordinates }
            | GeoJsonGeometry::MultiPoint { coordinates } => {
                coordinates.iter().copied().map(LatLng::from_position).collect()
            }
            GeoJsonGeometry::Polygon { coordinates }
            | GeoJsonGeometry::MultiLineString { coordinates } => coordinates
                .iter()
                .flatten()
                .copied()
                .map(LatLng::from_position)
                .collect(),
            GeoJsonGeometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .flatten()
                .flatten()
                .copied()
                .map(LatLng::from_position)
                .collect(),
            GeoJsonGeometry::GeometryCollection { geometries } => geometries
                .iter()
                .flat_map(|g| g.to_lat_lng_points())
                .collect(),
        }
    }

    pub fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::from_points(&self.to_lat_lng_points())
    }
}
