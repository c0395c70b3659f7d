//! Core type definitions for Lattis.
//!
//! - Identifier types ([`NodeId`])
//! - Link weight types ([`Weight`], [`UNIT_WEIGHT`])

mod id;

pub use id::NodeId;

/// Weight carried by a link.
///
/// Weighted graphs store the caller-supplied value; unweighted graphs force
/// every link to [`UNIT_WEIGHT`]. Stored weights are always finite.
pub type Weight = f64;

/// The weight assigned to every link of an unweighted graph.
pub const UNIT_WEIGHT: Weight = 1.0;
