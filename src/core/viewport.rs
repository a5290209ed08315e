use crate::core::geo::{LatLng, LatLngBounds, Point, EARTH_RADIUS, MAX_LATITUDE};
use crate::core::constants::TILE_SIZE;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Manages the current view of the map: center, zoom, and screen dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the viewport in pixels
    pub size: Point,
    /// The minimum allowed zoom level
    pub min_zoom: f64,
    /// The maximum allowed zoom level
    pub max_zoom: f64,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center,
            zoom: zoom.clamp(0.0, 18.0),
            size,
            min_zoom: 0.0,
            max_zoom: 18.0,
        }
    }

    pub fn set_center(&mut self, center: LatLng) {
        self.center = LatLng::new(LatLng::clamp_lat(center.lat), center.lng);
    }

    /// Sets the zoom level, clamping to valid range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom.max(min_zoom);
        self.set_zoom(self.zoom);
    }

    /// Gets the scale factor for the current zoom level
    pub fn scale(&self) -> f64 {
        2_f64.powf(self.zoom)
    }

    /// Projects a LatLng to world pixel coordinates (EPSG:3857) at the given zoom level
    pub fn project(&self, lat_lng: &LatLng, zoom: Option<f64>) -> Point {
        let z = zoom.unwrap_or(self.zoom);
        let scale = TILE_SIZE as f64 * 2_f64.powf(z);
        let lat = lat_lng.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);

        let x = lat_lng.lng.to_radians() * EARTH_RADIUS;
        let y = (PI / 4.0 + lat.to_radians() / 2.0).tan().ln() * EARTH_RADIUS;

        let pixel_x = (x + PI * EARTH_RADIUS) / (2.0 * PI * EARTH_RADIUS) * scale;
        let pixel_y = (-y + PI * EARTH_RADIUS) / (2.0 * PI * EARTH_RADIUS) * scale;

        Point::new(pixel_x, pixel_y)
    }

    /// Unprojects world pixel coordinates back to LatLng at the given zoom level
    pub fn unproject(&self, pixel: &Point, zoom: Option<f64>) -> LatLng {
        let z = zoom.unwrap_or(self.zoom);
        let scale = TILE_SIZE as f64 * 2_f64.powf(z);

        let x = (pixel.x / scale) * (2.0 * PI * EARTH_RADIUS) - PI * EARTH_RADIUS;
        let y = PI * EARTH_RADIUS - (pixel.y / scale) * (2.0 * PI * EARTH_RADIUS);

        let lng = (x / EARTH_RADIUS).to_degrees();
        let lat = (2.0 * (y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();

        LatLng::new(lat, lng)
    }

    /// Converts a geographical coordinate to container pixel coordinates
    pub fn lat_lng_to_pixel(&self, lat_lng: &LatLng) -> Point {
        let projected = self.project(lat_lng, None);
        let origin = self.project(&self.center, None);
        projected
            .subtract(&origin)
            .add(&Point::new(self.size.x / 2.0, self.size.y / 2.0))
    }

    /// Converts container pixel coordinates back to geographical coordinates
    pub fn pixel_to_lat_lng(&self, pixel: &Point) -> LatLng {
        let origin = self.project(&self.center, None);
        let world = pixel
            .subtract(&Point::new(self.size.x / 2.0, self.size.y / 2.0))
            .add(&origin);
        self.unproject(&world, None)
    }

    /// Pans the viewport by a pixel offset; a positive delta drags the map right/down
    pub fn pan(&mut self, delta: Point) {
        let origin = self.project(&self.center, None);
        let new_center = self.unproject(&origin.subtract(&delta), None);
        self.set_center(new_center);
    }

    /// Zooms while keeping the geographic point under `focus` fixed on screen
    pub fn zoom_around(&mut self, zoom: f64, focus: Point) {
        let anchor = self.pixel_to_lat_lng(&focus);
        self.set_zoom(zoom);

        let anchor_world = self.project(&anchor, None);
        let offset = focus.subtract(&Point::new(self.size.x / 2.0, self.size.y / 2.0));
        let new_center = self.unproject(&anchor_world.subtract(&offset), None);
        self.set_center(new_center);
    }

    /// Gets the current viewport bounds in geographical coordinates
    pub fn bounds(&self) -> LatLngBounds {
        let nw = self.pixel_to_lat_lng(&Point::new(0.0, 0.0));
        let se = self.pixel_to_lat_lng(&Point::new(self.size.x, self.size.y));

        LatLngBounds::new(LatLng::new(se.lat, nw.lng), LatLng::new(nw.lat, se.lng))
    }

    /// Computes the center and the largest integer zoom at which `bounds`
    /// fits inside the viewport minus `padding` on every side
    pub fn fit_bounds_target(&self, bounds: &LatLngBounds, padding: f64) -> (LatLng, f64) {
        let available = Point::new(
            (self.size.x - 2.0 * padding).max(1.0),
            (self.size.y - 2.0 * padding).max(1.0),
        );

        let mut best_zoom = self.min_zoom;
        for test_zoom in (self.min_zoom.ceil() as i32)..=(self.max_zoom.floor() as i32) {
            let zoom = test_zoom as f64;
            let nw = self.project(&bounds.north_west(), Some(zoom));
            let se = self.project(&bounds.south_east(), Some(zoom));

            if (se.x - nw.x).abs() <= available.x && (se.y - nw.y).abs() <= available.y {
                best_zoom = zoom;
            } else {
                break;
            }
        }

        // Center on the projected midpoint so the box is visually centered
        let nw = self.project(&bounds.north_west(), Some(best_zoom));
        let se = self.project(&bounds.south_east(), Some(best_zoom));
        let mid = Point::new((nw.x + se.x) / 2.0, (nw.y + se.y) / 2.0);
        let center = self.unproject(&mid, Some(best_zoom));

        (center, best_zoom)
    }

    /// Fits the viewport to contain the given bounds
    pub fn fit_bounds(&mut self, bounds: &LatLngBounds, padding: f64) {
        let (center, zoom) = self.fit_bounds_target(bounds, padding);
        self.set_zoom(zoom);
        self.set_center(center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn west_africa() -> Viewport {
        Viewport::new(
            LatLng::new(12.782540104722486, -4.04528596799415),
            5.0,
            Point::new(800.0, 600.0),
        )
    }

    #[test]
    fn test_projection_round_trip() {
        let viewport = west_africa();
        let dakar = LatLng::new(14.7167, -17.4677);
        let back = viewport.unproject(&viewport.project(&dakar, None), None);

        assert!((back.lat - dakar.lat).abs() < 1e-9);
        assert!((back.lng - dakar.lng).abs() < 1e-9);
    }

    #[test]
    fn test_center_maps_to_container_middle() {
        let viewport = west_africa();
        let pixel = viewport.lat_lng_to_pixel(&viewport.center);

        assert!((pixel.x - 400.0).abs() < 1e-6);
        assert!((pixel.y - 300.0).abs() < 1e-6);

        let back = viewport.pixel_to_lat_lng(&Point::new(400.0, 300.0));
        assert!((back.lat - viewport.center.lat).abs() < 1e-9);
    }

    #[test]
    fn test_pan_moves_center_against_drag() {
        let mut viewport = west_africa();
        let before = viewport.center;
        viewport.pan(Point::new(100.0, 0.0));

        assert!(viewport.center.lng < before.lng);
        assert!((viewport.center.lat - before.lat).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_around_keeps_focus_point() {
        let mut viewport = west_africa();
        let focus = Point::new(200.0, 150.0);
        let anchor = viewport.pixel_to_lat_lng(&focus);

        viewport.zoom_around(7.0, focus);
        let after = viewport.lat_lng_to_pixel(&anchor);

        assert_eq!(viewport.zoom, 7.0);
        assert!((after.x - focus.x).abs() < 1e-6);
        assert!((after.y - focus.y).abs() < 1e-6);
    }

    #[test]
    fn test_fit_bounds_contains_target() {
        let mut viewport = west_africa();
        let benin = LatLngBounds::from_coords(6.2, 0.77, 12.4, 3.85);
        viewport.fit_bounds(&benin, 20.0);

        assert_eq!(viewport.zoom.fract(), 0.0);
        assert!(viewport.zoom > 5.0);
        let visible = viewport.bounds();
        assert!(visible.contains(&benin.south_west));
        assert!(visible.contains(&benin.north_east));

        // One more zoom level would no longer fit
        let nw = viewport.project(&benin.north_west(), Some(viewport.zoom + 1.0));
        let se = viewport.project(&benin.south_east(), Some(viewport.zoom + 1.0));
        assert!((se.x - nw.x) > 760.0 || (se.y - nw.y) > 560.0);
    }

    #[test]
    fn test_zoom_limits_clamp() {
        let mut viewport = west_africa();
        viewport.set_zoom_limits(3.0, 10.0);
        viewport.set_zoom(15.0);
        assert_eq!(viewport.zoom, 10.0);
        viewport.set_zoom(1.0);
        assert_eq!(viewport.zoom, 3.0);
    }
}
