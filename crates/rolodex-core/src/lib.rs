//! `rolodex` Core Library
//!
//! Shared functionality for the rolodex picker:
//! - Person records and the empty-selection sentinel
//! - Roster loading and validation
//! - Case-insensitive substring filtering with highlight positions
//! - Common error types

pub mod error;
pub mod filter;
pub mod person;
pub mod roster;
pub mod tracing_init;

pub use error::{Error, Result};
pub use filter::{filter_people, NameMatch};
pub use person::{Person, Sex};
pub use roster::Roster;
