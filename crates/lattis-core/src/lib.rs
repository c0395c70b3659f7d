//! # lattis-core
//!
//! Core layer for Lattis: the keyed graph store and its query algorithms.
//!
//! This crate provides the fundamental data structure for storing and
//! querying keyed graphs. It depends only on `lattis-common`.
//!
//! ## Modules
//!
//! - [`graph`] - The graph store (node/link CRUD, membership, neighbors)
//! - [`algo`] - Query algorithms (shortest path, simple-path enumeration)

pub mod algo;
pub mod graph;

// Re-export commonly used types
pub use algo::paths::all_simple_paths;
pub use algo::shortest_path::{ShortestPath, shortest_path};
pub use graph::{Graph, GraphConfig};
