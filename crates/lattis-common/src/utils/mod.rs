//! Utility functions and helpers.
//!
//! - [`error`] - Error and result types shared across Lattis crates
//! - [`hash`] - Fast hash map/set aliases

pub mod error;
pub mod hash;
