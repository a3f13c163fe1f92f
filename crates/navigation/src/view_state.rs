use foundation::LatLng;

/// Current selection and map viewport.
///
/// Invariant: `current` is `None` or a valid index into the event store the
/// owning controller was built with.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    pub current: Option<usize>,
    pub center: LatLng,
    pub zoom: u8,
}

impl ViewState {
    pub fn new(center: LatLng, zoom: u8) -> Self {
        Self {
            current: None,
            center,
            zoom,
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.current == Some(index)
    }

    /// Disabled flags for the previous/next controls given `len` events.
    pub fn nav_disabled(&self, len: usize) -> (bool, bool) {
        match self.current {
            Some(i) => (i == 0, i + 1 >= len),
            // `next` from nothing selected lands on the first event.
            None => (true, len == 0),
        }
    }
}
