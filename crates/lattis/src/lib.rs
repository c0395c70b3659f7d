//! # Lattis
//!
//! A keyed, in-memory labeled graph: nodes identified by arbitrary hashable
//! keys, links that may be directed or undirected and weighted or
//! unweighted, plus two classic queries - single-pair shortest path and
//! exhaustive simple-path enumeration.
//!
//! If you're new here, start with [`Graph`] - that's your entry point for
//! building graphs and running queries. Pick one of the four variant
//! constructors ([`Graph::new`], [`Graph::directed`], [`Graph::weighted`],
//! [`Graph::directed_weighted`]) or pass explicit flags through
//! [`GraphConfig`].
//!
//! ## Quick Start
//!
//! ```rust
//! use lattis::{Graph, shortest_path};
//!
//! let mut g = Graph::directed_weighted();
//! g.add_link_weighted("home", "office", 2.5)?;
//! g.add_link_weighted("office", "gym", 1.0)?;
//! g.add_link_weighted("home", "gym", 9.0)?;
//!
//! let route = shortest_path(&g, &"home", &"gym");
//! assert_eq!(route.path, vec!["home", "office", "gym"]);
//! assert_eq!(route.distance, 3.5);
//! # Ok::<(), lattis::Error>(())
//! ```
//!
//! Mutation returns booleans ("did anything happen") and read queries are
//! total; the only hard error is a non-finite link weight.

// Re-export the graph store and query algorithms
pub use lattis_core::{Graph, GraphConfig, ShortestPath, all_simple_paths, shortest_path};

// Re-export core types - you'll need these for ids, weights, and errors
pub use lattis_common::{Error, NodeId, Result, UNIT_WEIGHT, Weight};
