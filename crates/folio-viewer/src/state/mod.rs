//! State management for the portfolio viewer.
//!
//! Holds the project catalog, status filtering, and the persisted
//! viewer preferences.

pub mod catalog;
pub mod prefs;
pub mod records;
pub mod seed;

pub use catalog::*;
pub use prefs::*;
pub use records::*;
pub use seed::*;
