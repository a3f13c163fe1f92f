use crate::scale::TimeScale;

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 20.0;

/// Horizontal zoom/pan of the timeline axis: `screen = base * k + x`.
///
/// The translation is constrained so the zoomed axis always covers the
/// visible pixel range; at `k == 1` the only valid translation is zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomTransform {
    k: f64,
    x: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ZoomTransform {
    pub fn identity() -> Self {
        Self { k: 1.0, x: 0.0 }
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn is_identity(&self) -> bool {
        self.k == 1.0 && self.x == 0.0
    }

    pub fn apply_x(&self, base_px: f64) -> f64 {
        base_px * self.k + self.x
    }

    pub fn invert_x(&self, screen_px: f64) -> f64 {
        (screen_px - self.x) / self.k
    }

    /// Multiplies the zoom by `factor` keeping `anchor_px` fixed on screen.
    pub fn zoom_at(self, anchor_px: f64, factor: f64, range: (f64, f64)) -> Self {
        if !factor.is_finite() || factor <= 0.0 {
            return self;
        }
        let k = (self.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let base = self.invert_x(anchor_px);
        Self {
            k,
            x: anchor_px - base * k,
        }
        .constrained(range)
    }

    pub fn pan(self, dx: f64, range: (f64, f64)) -> Self {
        Self {
            k: self.k,
            x: self.x + dx,
        }
        .constrained(range)
    }

    fn constrained(self, (r0, r1): (f64, f64)) -> Self {
        // Zoomed content spans [r0*k + x, r1*k + x]; it must cover [r0, r1].
        let max_x = r0 - r0 * self.k;
        let min_x = r1 - r1 * self.k;
        Self {
            k: self.k,
            x: self.x.clamp(min_x.min(max_x), max_x.max(min_x)),
        }
    }

    /// The scale as seen through this transform.
    pub fn rescale(&self, base: &TimeScale) -> TimeScale {
        let (r0, r1) = base.range();
        let d0 = base.invert_days(self.invert_x(r0));
        let d1 = base.invert_days(self.invert_x(r1));
        TimeScale::from_days((d0, d1), (r0, r1))
    }
}
