//! # lattis-common
//!
//! Foundation layer for Lattis: types, error taxonomy, and utilities.
//!
//! This crate provides the fundamental building blocks used by all other
//! Lattis crates. It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions ([`NodeId`], [`Weight`])
//! - [`utils`] - Utility functions and helpers (hashing, errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{NodeId, UNIT_WEIGHT, Weight};
pub use utils::error::{Error, Result};
pub use utils::hash::{FxHashMap, FxHashSet};
