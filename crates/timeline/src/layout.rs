/// Fixed geometry of the timeline strip, in SVG user units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub point_radius: f64,
    pub hover_radius: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 100.0,
            margin_top: 20.0,
            margin_right: 40.0,
            margin_bottom: 20.0,
            margin_left: 40.0,
            point_radius: 6.0,
            hover_radius: 8.0,
        }
    }
}

impl Layout {
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin_left - self.margin_right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin_top - self.margin_bottom).max(0.0)
    }

    /// Pixel range of the axis inside the plot group.
    pub fn x_range(&self) -> (f64, f64) {
        (0.0, self.inner_width())
    }

    /// Vertical centre line the points sit on.
    pub fn axis_y(&self) -> f64 {
        self.inner_height() / 2.0
    }
}

/// Index of the x closest to `px`, if within `tolerance`. Ties go to the lower index.
pub fn nearest_point(xs: &[f64], px: f64, tolerance: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &x) in xs.iter().enumerate() {
        let dist = (x - px).abs();
        if !dist.is_finite() || dist > tolerance {
            continue;
        }
        match best {
            Some((_, d)) if d <= dist => {}
            _ => best = Some((i, dist)),
        }
    }
    best.map(|(i, _)| i)
}
