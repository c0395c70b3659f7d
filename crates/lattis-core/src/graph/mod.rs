//! Graph model: configuration and the keyed store.

mod store;

pub use store::Graph;

/// Graph configuration, fixed at construction and never mutated afterward.
///
/// The two flags are orthogonal, giving four variants. They are checked at
/// exactly two decision points inside the store: the symmetric-write step of
/// link insertion (`directed`) and weight defaulting (`weighted`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    /// Whether links are one-way. Undirected graphs store every link
    /// symmetrically in both directions with equal weight.
    pub directed: bool,
    /// Whether links carry caller-supplied weights. Unweighted graphs force
    /// every link to the unit weight.
    pub weighted: bool,
}

impl GraphConfig {
    /// Creates a configuration from explicit flags.
    #[must_use]
    pub const fn new(directed: bool, weighted: bool) -> Self {
        Self { directed, weighted }
    }
}
