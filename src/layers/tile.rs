use crate::core::config::TileConfig;
use crate::core::constants::{DEFAULT_ATTRIBUTION, DEFAULT_MAX_ZOOM, DEFAULT_TILE_URL, TILE_SIZE};
use crate::core::geo::{LatLng, Point, TileCoord};
use crate::core::viewport::Viewport;
use crate::layers::base::{LayerProperties, LayerTrait, LayerType};
use fxhash::FxHashSet;

/// Configuration for a tile layer
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TileLayerOptions {
    /// URL template with `{z}`, `{x}`, `{y}` and optional `{s}` placeholders
    pub url_template: String,
    /// Subdomains cycled through for `{s}`
    pub subdomains: Vec<String>,
    pub attribution: String,
    pub min_zoom: u8,
    pub max_zoom: u8,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_TILE_URL.to_string(),
            subdomains: Vec::new(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            min_zoom: 0,
            max_zoom: DEFAULT_MAX_ZOOM as u8,
        }
    }
}

impl From<&TileConfig> for TileLayerOptions {
    fn from(config: &TileConfig) -> Self {
        Self {
            url_template: config.url_template.clone(),
            subdomains: config.subdomains.clone(),
            attribution: config.attribution.clone(),
            min_zoom: 0,
            max_zoom: config.max_zoom,
        }
    }
}

/// Slippy-map base layer: decides which tiles the view needs and where they go.
/// Downloading and decoding happen elsewhere; this keeps the bookkeeping.
pub struct TileLayer {
    properties: LayerProperties,
    options: TileLayerOptions,
    /// Tiles already handed to the loader
    requested: FxHashSet<TileCoord>,
    /// Tiles that failed to download or decode; not retried at this zoom
    failed: FxHashSet<TileCoord>,
    /// Tile zoom of the last request pass
    last_zoom: Option<u8>,
}

impl TileLayer {
    pub fn new(id: &str) -> Self {
        Self::with_options(id, TileLayerOptions::default())
    }

    pub fn with_options(id: &str, options: TileLayerOptions) -> Self {
        Self {
            properties: LayerProperties::new(id, LayerType::Tile),
            options,
            requested: FxHashSet::default(),
            failed: FxHashSet::default(),
            last_zoom: None,
        }
    }

    pub fn options(&self) -> &TileLayerOptions {
        &self.options
    }

    pub fn attribution(&self) -> &str {
        &self.options.attribution
    }

    /// Integer zoom the tiles are fetched at for `viewport`
    pub fn tile_zoom(&self, viewport: &Viewport) -> u8 {
        let zoom = viewport.zoom.round().max(0.0) as u8;
        zoom.clamp(self.options.min_zoom, self.options.max_zoom)
    }

    /// Tiles covering the viewport plus a one-tile margin, clamped to the world
    pub fn visible_tiles(&self, viewport: &Viewport) -> Vec<TileCoord> {
        let zoom = self.tile_zoom(viewport);
        let tiles_per_axis = 1i64 << zoom;
        let tile_size = TILE_SIZE as f64;

        let to_tile = |lat_lng: &LatLng| {
            let world = viewport.project(lat_lng, Some(zoom as f64));
            (world.x / tile_size, world.y / tile_size)
        };

        let bounds = viewport.bounds();
        let (min_x_f, min_y_f) = to_tile(&bounds.north_west());
        let (max_x_f, max_y_f) = to_tile(&bounds.south_east());

        let margin = 1;
        let clamp = |v: i64| v.clamp(0, tiles_per_axis - 1) as u32;
        let min_x = clamp(min_x_f.floor() as i64 - margin);
        let max_x = clamp(max_x_f.ceil() as i64 + margin);
        let min_y = clamp(min_y_f.floor() as i64 - margin);
        let max_y = clamp(max_y_f.ceil() as i64 + margin);

        let mut tiles = Vec::new();
        for x in min_x..=max_x {
            for y in min_y..=max_y {
                tiles.push(TileCoord::new(x, y, zoom));
            }
        }
        tiles
    }

    /// Fills the URL template for `coord`
    pub fn tile_url(&self, coord: TileCoord) -> String {
        let mut url = self
            .options
            .url_template
            .replace("{z}", &coord.z.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string());

        if self.options.subdomains.is_empty() {
            url = url.replace("{s}.", "").replace("{s}", "");
        } else {
            let idx = ((coord.x + coord.y) as usize) % self.options.subdomains.len();
            url = url.replace("{s}", &self.options.subdomains[idx]);
        }
        url
    }

    /// Screen rectangle (top-left, bottom-right) of a tile in container pixels
    pub fn tile_screen_rect(&self, coord: TileCoord, viewport: &Viewport) -> (Point, Point) {
        let top_left = coord.to_lat_lng();
        let bottom_right = TileCoord::new(coord.x + 1, coord.y + 1, coord.z).to_lat_lng();
        (
            viewport.lat_lng_to_pixel(&top_left),
            viewport.lat_lng_to_pixel(&bottom_right),
        )
    }

    /// Visible tiles that have not been requested yet; they are marked as requested.
    /// Changing zoom gives previously failed tiles another chance.
    pub fn take_new_requests(&mut self, viewport: &Viewport) -> Vec<(TileCoord, String)> {
        let zoom = self.tile_zoom(viewport);
        if self.last_zoom.replace(zoom).map_or(false, |last| last != zoom) {
            for coord in self.failed.drain() {
                self.requested.remove(&coord);
            }
        }

        let mut requests = Vec::new();
        for coord in self.visible_tiles(viewport) {
            if self.failed.contains(&coord) || !self.requested.insert(coord) {
                continue;
            }
            requests.push((coord, self.tile_url(coord)));
        }
        requests
    }

    pub fn mark_failed(&mut self, coord: TileCoord) {
        self.failed.insert(coord);
    }

    pub fn is_failed(&self, coord: &TileCoord) -> bool {
        self.failed.contains(coord)
    }

    /// Lets an evicted tile be requested again
    pub fn forget(&mut self, coord: &TileCoord) {
        self.requested.remove(coord);
    }
}

impl LayerTrait for TileLayer {
    crate::impl_layer_trait!(properties);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let layer = TileLayer::new("base");
        assert_eq!(
            layer.options().url_template,
            "https://tile.openstreetmap.de/{z}/{x}/{y}.png"
        );
        assert_eq!(layer.options().max_zoom, 18);
        assert!(layer.attribution().contains("OpenStreetMap"));
        assert_eq!(layer.layer_type(), LayerType::Tile);
    }

    #[test]
    fn test_tile_url() {
        let layer = TileLayer::new("base");
        assert_eq!(
            layer.tile_url(TileCoord::new(15, 14, 5)),
            "https://tile.openstreetmap.de/5/15/14.png"
        );

        let layer = TileLayer::with_options(
            "osm",
            TileLayerOptions {
                url_template: "https://{s}.tile.example.org/{z}/{x}/{y}.png".to_string(),
                subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
                ..TileLayerOptions::default()
            },
        );
        assert_eq!(
            layer.tile_url(TileCoord::new(1, 0, 1)),
            "https://b.tile.example.org/1/1/0.png"
        );
    }

    #[test]
    fn test_subdomain_placeholder_without_subdomains() {
        let layer = TileLayer::with_options(
            "osm",
            TileLayerOptions {
                url_template: "https://{s}.tile.example.org/{z}/{x}/{y}.png".to_string(),
                ..TileLayerOptions::default()
            },
        );
        assert_eq!(
            layer.tile_url(TileCoord::new(3, 2, 4)),
            "https://tile.example.org/4/3/2.png"
        );
    }

    #[test]
    fn test_whole_world_at_low_zoom() {
        let layer = TileLayer::new("base");
        let viewport = Viewport::new(LatLng::new(0.0, 0.0), 1.0, Point::new(512.0, 512.0));
        let tiles = layer.visible_tiles(&viewport);

        assert_eq!(tiles.len(), 4);
        assert!(tiles.iter().all(|t| t.z == 1 && t.is_valid()));
    }

    #[test]
    fn test_visible_tiles_cover_west_africa() {
        let layer = TileLayer::new("base");
        let viewport = Viewport::new(
            LatLng::new(12.782540104722486, -4.04528596799415),
            5.0,
            Point::new(800.0, 600.0),
        );
        let tiles = layer.visible_tiles(&viewport);
        let center_tile = TileCoord::from_lat_lng(&viewport.center, 5);

        assert!(tiles.contains(&center_tile));
        // 800x600 spans at most 5x4 partial tiles, plus the margin
        assert!(tiles.len() >= 4 * 3);
        assert!(tiles.len() <= 8 * 7);
    }

    #[test]
    fn test_requests_are_not_repeated() {
        let mut layer = TileLayer::new("base");
        let viewport = Viewport::new(LatLng::new(0.0, 0.0), 1.0, Point::new(512.0, 512.0));

        let first = layer.take_new_requests(&viewport);
        assert_eq!(first.len(), 4);
        assert!(layer.take_new_requests(&viewport).is_empty());

        let (failed, _) = first[0];
        layer.mark_failed(failed);
        layer.forget(&failed);
        assert!(layer.take_new_requests(&viewport).is_empty());
        assert!(layer.is_failed(&failed));
    }

    #[test]
    fn test_zoom_change_retries_failed_tiles() {
        let mut layer = TileLayer::new("base");
        let mut viewport = Viewport::new(LatLng::new(0.0, 0.0), 1.0, Point::new(512.0, 512.0));

        let (failed, _) = layer.take_new_requests(&viewport)[0];
        layer.mark_failed(failed);

        viewport.set_zoom(2.0);
        layer.take_new_requests(&viewport);
        assert!(!layer.is_failed(&failed));

        viewport.set_zoom(1.0);
        let retried = layer.take_new_requests(&viewport);
        assert!(retried.iter().any(|(coord, _)| *coord == failed));
    }

    #[test]
    fn test_tile_screen_rect_size() {
        let layer = TileLayer::new("base");
        let viewport = Viewport::new(LatLng::new(0.0, 0.0), 2.0, Point::new(800.0, 600.0));
        let (min, max) = layer.tile_screen_rect(TileCoord::new(1, 1, 2), &viewport);

        assert!((max.x - min.x - 256.0).abs() < 1e-6);
        assert!((max.y - min.y - 256.0).abs() < 1e-6);
    }
}
