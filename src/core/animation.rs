use crate::core::geo::LatLng;
use std::time::{Duration, Instant};

pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Cubic ease-out: fast start, gentle settle. `t` is clamped to `[0, 1]`.
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) - 1.0;
    t * t * t + 1.0
}

/// A single frame of an animated view change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewFrame {
    pub center: LatLng,
    pub zoom: f64,
    pub finished: bool,
}

/// Animated move of the map view from one center/zoom pair to another
#[derive(Debug, Clone)]
pub struct ViewAnimation {
    start_time: Instant,
    duration: Duration,
    from_center: LatLng,
    to_center: LatLng,
    from_zoom: f64,
    to_zoom: f64,
}

impl ViewAnimation {
    pub fn new(
        from_center: LatLng,
        to_center: LatLng,
        from_zoom: f64,
        to_zoom: f64,
        duration: Duration,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            duration,
            from_center,
            to_center,
            from_zoom,
            to_zoom,
        }
    }

    pub fn target(&self) -> (LatLng, f64) {
        (self.to_center, self.to_zoom)
    }

    /// Progress in `[0, 1]` at `now`
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn sample(&self, now: Instant) -> ViewFrame {
        let t = self.progress(now);
        if t >= 1.0 {
            return ViewFrame {
                center: self.to_center,
                zoom: self.to_zoom,
                finished: true,
            };
        }
        let eased = ease_out(t);

        ViewFrame {
            center: LatLng::new(
                lerp(self.from_center.lat, self.to_center.lat, eased),
                lerp(self.from_center.lng, self.to_center.lng, eased),
            ),
            zoom: lerp(self.from_zoom, self.to_zoom, eased),
            finished: false,
        }
    }
}
