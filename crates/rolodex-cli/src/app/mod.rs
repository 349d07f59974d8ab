//! Application state.

mod state;

pub use state::{App, FocusZone};
