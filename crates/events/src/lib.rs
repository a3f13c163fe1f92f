pub mod event;
pub mod loader;
pub mod popup;
pub mod store;

pub use event::*;
pub use loader::*;
pub use store::*;
