//! Partial orders over constraints and the pairwise dominance graph.

pub mod dominance_graph;
pub mod partial_order;

pub use dominance_graph::DominanceGraph;
pub use partial_order::{Dominance, PartialOrder};
