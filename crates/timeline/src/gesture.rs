/// Pointer travel below which a press-release counts as a click.
pub const CLICK_SLOP_PX: f64 = 3.0;

#[derive(Debug, Copy, Clone, PartialEq)]
struct Drag {
    origin_px: f64,
    last_px: f64,
    moved: bool,
}

/// Press, drag and click tracking for the strip.
///
/// A press that travels past [`CLICK_SLOP_PX`] becomes a pan, and the click
/// the browser fires after its release is swallowed. Leaving the strip
/// cancels the gesture outright, so no stale suppression outlives it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PointerGesture {
    drag: Option<Drag>,
    suppress_click: bool,
}

impl PointerGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, px: f64) {
        self.drag = Some(Drag {
            origin_px: px,
            last_px: px,
            moved: false,
        });
        self.suppress_click = false;
    }

    /// Pan delta since the last move, once the press has left the slop zone.
    pub fn drag_to(&mut self, px: f64) -> Option<f64> {
        let drag = self.drag.as_mut()?;
        if !drag.moved && (px - drag.origin_px).abs() < CLICK_SLOP_PX {
            return None;
        }
        drag.moved = true;
        let dx = px - drag.last_px;
        drag.last_px = px;
        Some(dx)
    }

    pub fn is_panning(&self) -> bool {
        self.drag.is_some_and(|d| d.moved)
    }

    /// Button released over the strip; a following click is swallowed if it panned.
    pub fn release(&mut self) {
        if let Some(drag) = self.drag.take() {
            self.suppress_click = drag.moved;
        }
    }

    /// Pointer left the strip. No click follows, so nothing is suppressed.
    pub fn cancel(&mut self) {
        self.drag = None;
        self.suppress_click = false;
    }

    /// Whether a click arriving now should select a point.
    pub fn take_click(&mut self) -> bool {
        !std::mem::take(&mut self.suppress_click)
    }
}
