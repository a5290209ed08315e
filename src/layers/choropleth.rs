use crate::choropleth::style::{default_style, focused_style, unfocused_style, PolygonStyle};
use crate::core::geo::{LatLng, LatLngBounds};
use crate::data::feature::{CountryFeature, FeatureCollection, FeatureId};
use crate::layers::base::{LayerProperties, LayerTrait, LayerType};
use geo::{Contains, Coord, LineString, MultiPolygon, TriangulateEarcut};

/// A rendered country: geometry plus its current style
#[derive(Debug, Clone)]
pub struct ChoroplethPolygon {
    pub feature: FeatureId,
    pub geometry: MultiPolygon<f64>,
    pub bounds: LatLngBounds,
    pub default_style: PolygonStyle,
    pub style: PolygonStyle,
    /// Fill triangles in geographic coordinates
    pub triangles: Vec<[LatLng; 3]>,
    /// Every ring (exteriors and holes) for outline drawing
    pub rings: Vec<Vec<LatLng>>,
}

fn ring_points(ring: &LineString<f64>) -> Vec<LatLng> {
    ring.coords().map(|c| LatLng::new(c.y, c.x)).collect()
}

fn to_lat_lng(coord: Coord<f64>) -> LatLng {
    LatLng::new(coord.y, coord.x)
}

impl ChoroplethPolygon {
    pub fn new(feature: &CountryFeature) -> Self {
        let mut triangles = Vec::new();
        let mut rings = Vec::new();

        for polygon in &feature.geometry {
            triangles.extend(polygon.earcut_triangles().into_iter().map(|t| {
                let [a, b, c] = t.to_array();
                [to_lat_lng(a), to_lat_lng(b), to_lat_lng(c)]
            }));
            rings.push(ring_points(polygon.exterior()));
            rings.extend(polygon.interiors().iter().map(ring_points));
        }

        let style = default_style(feature);
        Self {
            feature: feature.id,
            geometry: feature.geometry.clone(),
            bounds: feature.bounds,
            default_style: style,
            style,
            triangles,
            rings,
        }
    }

    pub fn contains(&self, point: &LatLng) -> bool {
        self.bounds.contains(point)
            && self
                .geometry
                .contains(&geo::Point::new(point.lng, point.lat))
    }
}

/// Country polygons styled by their access value
pub struct ChoroplethLayer {
    properties: LayerProperties,
    polygons: Vec<ChoroplethPolygon>,
}

impl ChoroplethLayer {
    pub fn new(id: &str) -> Self {
        Self {
            properties: LayerProperties::new(id, LayerType::Choropleth),
            polygons: Vec::new(),
        }
    }

    pub fn from_collection(id: &str, collection: &FeatureCollection) -> Self {
        let mut layer = Self::new(id);
        for feature in collection.features() {
            layer.add_feature(feature);
        }
        layer
    }

    /// Adds a feature on top of the ones already drawn
    pub fn add_feature(&mut self, feature: &CountryFeature) {
        let polygon = ChoroplethPolygon::new(feature);
        if polygon.triangles.is_empty() {
            log::warn!("feature {:?} produced no fill triangles", feature.name);
        }
        self.polygons.push(polygon);
    }

    pub fn polygons(&self) -> &[ChoroplethPolygon] {
        &self.polygons
    }

    pub fn polygon(&self, feature: FeatureId) -> Option<&ChoroplethPolygon> {
        self.polygons.iter().find(|p| p.feature == feature)
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// The topmost polygon under `point`; later polygons draw over earlier ones.
    /// A hidden or non-interactive layer hits nothing.
    pub fn hit_test(&self, point: &LatLng) -> Option<FeatureId> {
        if !self.is_visible() || !self.is_interactive() {
            return None;
        }
        self.polygons
            .iter()
            .rev()
            .find(|p| p.contains(point))
            .map(|p| p.feature)
    }

    pub fn style_of(&self, feature: FeatureId) -> Option<PolygonStyle> {
        self.polygon(feature).map(|p| p.style)
    }

    pub fn set_style(&mut self, feature: FeatureId, style: PolygonStyle) {
        if let Some(polygon) = self.polygons.iter_mut().find(|p| p.feature == feature) {
            polygon.style = style;
        }
    }

    /// Dims every polygon, then emphasizes `feature`
    pub fn highlight(&mut self, feature: &CountryFeature) {
        let dimmed = unfocused_style();
        for polygon in &mut self.polygons {
            polygon.style = dimmed;
        }
        self.set_style(feature.id, focused_style(feature));
    }

    /// Restores the value-derived style of every polygon
    pub fn reset_all(&mut self) {
        for polygon in &mut self.polygons {
            polygon.style = polygon.default_style;
        }
    }
}

impl LayerTrait for ChoroplethLayer {
    crate::impl_layer_trait!(properties);

    fn bounds(&self) -> Option<LatLngBounds> {
        self.polygons
            .iter()
            .map(|p| p.bounds)
            .reduce(|a, b| a.union(&b))
    }
}
