//! Time-axis math for the timeline strip: projection, zoom, ticks and pointer gestures.

pub mod gesture;
pub mod layout;
pub mod scale;
pub mod ticks;
pub mod zoom;

pub use gesture::*;
pub use layout::*;
pub use scale::*;
pub use ticks::*;
pub use zoom::*;
