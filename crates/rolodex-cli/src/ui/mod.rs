//! TUI rendering components.

mod render;
pub mod surface;

pub use render::draw;
