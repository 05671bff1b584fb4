//! Minimum-spanning road network planning with critical-facility
//! augmentation.
//!
//! Kruskal's algorithm runs over the graph's insertion-ordered edge list
//! with a stable sort by base weight, so equal-weight edges are considered
//! in insertion order and the resulting tree is deterministic.  The
//! union-find structure lives and dies inside one planning call.

use std::collections::HashMap;

use log::info;

use crate::graph::{DEFAULT_EDGE_WEIGHT, Edge, RoadGraph};

// ── Disjoint set ──────────────────────────────────────────────────────────────

/// Union-find over node ids, local to one Kruskal invocation.
struct DisjointSet<'a> {
    parent: HashMap<&'a str, &'a str>,
}

impl<'a> DisjointSet<'a> {
    fn new(nodes: impl Iterator<Item = &'a str>) -> Self {
        Self {
            parent: nodes.map(|n| (n, n)).collect(),
        }
    }

    /// Representative of `u`'s component, compressing the path walked.
    fn find(&mut self, mut u: &'a str) -> &'a str {
        while self.parent[u] != u {
            let grandparent = self.parent[self.parent[u]];
            self.parent.insert(u, grandparent);
            u = grandparent;
        }
        u
    }

    fn union(&mut self, u: &'a str, v: &'a str) {
        let (pu, pv) = (self.find(u), self.find(v));
        self.parent.insert(pu, pv);
    }

    /// `true` if `u` and `v` are currently in different components.
    fn disjoint(&mut self, u: &'a str, v: &'a str) -> bool {
        self.find(u) != self.find(v)
    }
}

// ── SpanningTree ──────────────────────────────────────────────────────────────

/// Summary statistics of a spanning tree.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeSummary {
    pub node_count: usize,
    pub edge_count: usize,
    /// Sum of base edge weights ([`DEFAULT_EDGE_WEIGHT`] where unset).
    pub total_weight: f64,
}

/// A spanning road network produced by [`MstPlanner`].
///
/// Edges carry the full attribute set of their originals, so downstream
/// consumers see capacities, period weights, and class tags unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanningTree {
    pub graph: RoadGraph,
}

impl SpanningTree {
    pub fn contains_node(&self, id: &str) -> bool {
        self.graph.contains_node(id)
    }

    pub fn summary(&self) -> TreeSummary {
        TreeSummary {
            node_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
            total_weight: self
                .graph
                .edges()
                .iter()
                .map(|e| e.data.weight.unwrap_or(DEFAULT_EDGE_WEIGHT))
                .sum(),
        }
    }
}

// ── MstPlanner ────────────────────────────────────────────────────────────────

/// Plans a minimum-spanning road network over one read-only graph.
pub struct MstPlanner<'g> {
    graph: &'g RoadGraph,
}

impl<'g> MstPlanner<'g> {
    pub fn new(graph: &'g RoadGraph) -> Self {
        Self { graph }
    }

    /// Kruskal's algorithm followed by critical-node augmentation.
    ///
    /// Edges are processed by ascending base weight, ties broken by
    /// insertion order.  Afterwards every critical node still missing from
    /// the tree is attached through its cheapest tree-connected neighbor
    /// (see [`attach_critical`](Self::attach_critical)).
    pub fn kruskal_mst(&self, critical_nodes: &[&str]) -> SpanningTree {
        let mut tree = RoadGraph::new();
        let mut components = DisjointSet::new(self.graph.nodes());

        let mut edges: Vec<&Edge> = self.graph.edges().iter().collect();
        edges.sort_by(|x, y| sort_weight(x).total_cmp(&sort_weight(y)));

        for edge in edges {
            if components.disjoint(&edge.a, &edge.b) {
                tree.add_edge(edge.a.clone(), edge.b.clone(), edge.data.clone());
                components.union(&edge.a, &edge.b);
            }
        }

        self.attach_critical(&mut tree, critical_nodes);
        SpanningTree { graph: tree }
    }

    /// Attach every critical node absent from `tree` via its minimum-weight
    /// edge to a neighbor already in the tree, copying the edge's full
    /// attribute set.
    ///
    /// A critical node with no tree-connected neighbor (or no incident
    /// edges at all) is left out silently; a disconnected facility is the
    /// caller's data problem, not a planning failure.
    pub fn attach_critical(&self, tree: &mut RoadGraph, critical_nodes: &[&str]) {
        for &node in critical_nodes {
            if tree.contains_node(node) {
                continue;
            }

            let mut nearest: Option<(&str, f64)> = None;
            for neighbor in self.graph.neighbors(node) {
                if !tree.contains_node(neighbor) {
                    continue;
                }
                let weight = self
                    .graph
                    .edge(node, neighbor)
                    .and_then(|e| e.weight)
                    .unwrap_or(DEFAULT_EDGE_WEIGHT);
                if nearest.is_none_or(|(_, best)| weight < best) {
                    nearest = Some((neighbor, weight));
                }
            }

            if let Some((neighbor, weight)) = nearest {
                if let Some(data) = self.graph.edge(node, neighbor) {
                    tree.add_edge(node, neighbor, data.clone());
                    info!(
                        "critical node `{node}` attached to spanning tree via `{neighbor}` \
                         (weight {weight})"
                    );
                }
            }
        }
    }
}

/// Base weight used for edge ordering.
fn sort_weight(edge: &Edge) -> f64 {
    edge.data.weight.unwrap_or(DEFAULT_EDGE_WEIGHT)
}
