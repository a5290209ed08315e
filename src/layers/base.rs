use crate::core::geo::LatLngBounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerType {
    Tile,
    Choropleth,
    Marker,
}

impl std::fmt::Display for LayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerType::Tile => write!(f, "tile"),
            LayerType::Choropleth => write!(f, "choropleth"),
            LayerType::Marker => write!(f, "marker"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayerProperties {
    pub id: String,
    pub layer_type: LayerType,
    pub visible: bool,
    /// Only interactive layers answer pointer hit tests
    pub interactive: bool,
}

impl LayerProperties {
    pub fn new(id: &str, layer_type: LayerType) -> Self {
        Self {
            id: id.to_string(),
            layer_type,
            visible: true,
            interactive: layer_type == LayerType::Choropleth,
        }
    }
}

/// Common surface of every map layer
pub trait LayerTrait {
    fn id(&self) -> &str;
    fn layer_type(&self) -> LayerType;
    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);
    fn is_interactive(&self) -> bool;

    /// Geographic extent of the layer's content, if it has any
    fn bounds(&self) -> Option<LatLngBounds> {
        None
    }
}
