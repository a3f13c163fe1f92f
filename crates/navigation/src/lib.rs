pub mod commands;
pub mod config;
pub mod controller;
pub mod markers;
pub mod view_state;

#[cfg(test)]
pub(crate) mod testing;

pub use commands::*;
pub use config::*;
pub use controller::*;
pub use markers::*;
pub use view_state::*;
