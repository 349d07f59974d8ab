//! Rolodex CLI Library
//!
//! Terminal people picker built around a debounced filter query and a
//! suggestion dropdown with explicit open/close timing.

pub mod app;
pub mod config;
pub mod picker;
pub mod tui;
pub mod ui;
