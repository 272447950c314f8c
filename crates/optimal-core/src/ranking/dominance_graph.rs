//! Pairwise dominance relations as a DAG, layered into strata on demand.
//!
//! Edges run from the dominating constraint to the dominated one. Any edge
//! that would close a cycle is rejected before insertion.

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use petgraph::Direction;
use rustc_hash::FxHashMap;

use super::PartialOrder;
use crate::errors::RankingError;

#[derive(Debug, Clone, Default)]
pub struct DominanceGraph {
    graph: DiGraph<String, ()>,
    nodes: FxHashMap<String, NodeIndex>,
}

impl DominanceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph over `names` with no relations yet.
    pub fn with_constraints<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let mut graph = Self::new();
        for name in names {
            graph.add_constraint(name);
        }
        graph
    }

    /// Add a constraint if it is not present; returns its node.
    pub fn add_constraint(&mut self, name: impl Into<String>) -> NodeIndex {
        let name = name.into();
        if let Some(&node) = self.nodes.get(&name) {
            return node;
        }
        let node = self.graph.add_node(name.clone());
        self.nodes.insert(name, node);
        node
    }

    /// Record `higher >> lower`. Both constraints must already be present.
    pub fn add_dominance(&mut self, higher: &str, lower: &str) -> Result<(), RankingError> {
        let source = self.node(higher)?;
        let target = self.node(lower)?;
        if source == target || self.has_path(target, source) {
            return Err(RankingError::CycleDetected {
                higher: higher.to_string(),
                lower: lower.to_string(),
            });
        }
        if self.graph.find_edge(source, target).is_none() {
            self.graph.add_edge(source, target, ());
        }
        Ok(())
    }

    /// Transitive dominance.
    pub fn dominates(&self, higher: &str, lower: &str) -> bool {
        match (self.nodes.get(higher), self.nodes.get(lower)) {
            (Some(&a), Some(&b)) if a != b => self.has_path(a, b),
            _ => false,
        }
    }

    pub fn constraint_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn relation_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Layer the DAG top-down: a constraint's stratum is one below its
    /// lowest dominator, so every constraint sits as high as its relations
    /// allow.
    pub fn to_partial_order(&self) -> Result<PartialOrder, RankingError> {
        let order = toposort(&self.graph, None).map_err(|cycle| {
            let name = self.graph[cycle.node_id()].clone();
            RankingError::CycleDetected {
                higher: name.clone(),
                lower: name,
            }
        })?;

        let mut depth: FxHashMap<NodeIndex, usize> = FxHashMap::default();
        let mut layers: Vec<Vec<String>> = Vec::new();
        for node in order {
            let level = self
                .graph
                .neighbors_directed(node, Direction::Incoming)
                .filter_map(|parent| depth.get(&parent))
                .map(|d| d + 1)
                .max()
                .unwrap_or(0);
            depth.insert(node, level);
            if layers.len() <= level {
                layers.resize_with(level + 1, Vec::new);
            }
            layers[level].push(self.graph[node].clone());
        }
        PartialOrder::stratify(layers)
    }

    fn node(&self, name: &str) -> Result<NodeIndex, RankingError> {
        self.nodes
            .get(name)
            .copied()
            .ok_or_else(|| RankingError::UnknownConstraint {
                name: name.to_string(),
            })
    }

    fn has_path(&self, from: NodeIndex, to: NodeIndex) -> bool {
        let mut dfs = Dfs::new(&self.graph, from);
        while let Some(node) = dfs.next(&self.graph) {
            if node == to {
                return true;
            }
        }
        false
    }
}

impl PartialOrder {
    /// Each stratum dominates the next; transitivity covers the rest.
    pub fn to_dominance_graph(&self) -> DominanceGraph {
        let mut graph = DominanceGraph::with_constraints(self.constraints());
        for pair in self.strata().windows(2) {
            for higher in &pair[0] {
                for lower in &pair[1] {
                    let source = graph.nodes[higher.as_str()];
                    let target = graph.nodes[lower.as_str()];
                    graph.graph.add_edge(source, target, ());
                }
            }
        }
        graph
    }
}
