//! Road graph model: string-keyed, undirected, multi-attribute.
//!
//! # Data layout
//!
//! Edges live in an insertion-ordered `Vec` with an unordered-pair index on
//! top; adjacency lists hold neighbor ids in edge-insertion order.  That
//! ordering is load-bearing: Kruskal's tie-breaking and the critical-node
//! neighbor scan in [`crate::planner`] are deterministic because iteration
//! here is.
//!
//! Nodes referenced only by an edge are auto-registered without coordinates;
//! lookups and traversals treat them like any other node.

use std::collections::HashMap;

use tp_core::{Point, TimePeriod};

/// Traversal weight assumed for an edge whose base weight was never set.
///
/// Scoped to the consumers in this crate (`router`, `planner`); the graph
/// builder applies its own fallback (base distance) for *period* weights.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Classification of a road segment by origin list.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoadClass {
    /// Present in the current network.
    Existing,
    /// Candidate segment under evaluation.
    Potential,
}

impl RoadClass {
    pub fn as_str(self) -> &'static str {
        match self {
            RoadClass::Existing => "existing",
            RoadClass::Potential => "potential",
        }
    }
}

impl std::fmt::Display for RoadClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes attached to one undirected edge.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeData {
    /// Base traversal weight (distance).  `None` when never set; consumers
    /// fall back to [`DEFAULT_EDGE_WEIGHT`].
    pub weight: Option<f64>,
    /// Period-specific traversal weights.
    pub period_weights: HashMap<TimePeriod, f64>,
    /// Capacity in vehicles per hour, when known.
    pub capacity: Option<f64>,
    /// Existing road or candidate.
    pub class: RoadClass,
}

impl EdgeData {
    /// Attributes with only a class tag — no weight, no capacity.
    pub fn new(class: RoadClass) -> Self {
        Self {
            weight: None,
            period_weights: HashMap::new(),
            capacity: None,
            class,
        }
    }

    pub fn with_weight(weight: f64, class: RoadClass) -> Self {
        Self {
            weight: Some(weight),
            ..Self::new(class)
        }
    }

    /// Weight recorded for `period`, when there is one.
    #[inline]
    pub fn period_weight(&self, period: TimePeriod) -> Option<f64> {
        self.period_weights.get(&period).copied()
    }
}

/// One stored edge: unordered endpoint pair plus attributes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub a: String,
    pub b: String,
    pub data: EdgeData,
}

/// Index key normalizing an unordered node pair, so lookup succeeds
/// regardless of endpoint order.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct EdgeKey(String, String);

impl EdgeKey {
    fn new(a: &str, b: &str) -> Self {
        if a <= b {
            EdgeKey(a.to_owned(), b.to_owned())
        } else {
            EdgeKey(b.to_owned(), a.to_owned())
        }
    }
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Weighted undirected multi-attribute graph over string node ids.
///
/// Parallel edges are not supported: re-adding an existing pair replaces its
/// attributes in place (last write wins) and keeps the original insertion
/// position.  Self-loops are not expected and not special-cased.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadGraph {
    /// Position per node id; `None` for nodes registered via an edge only.
    nodes: HashMap<String, Option<Point>>,
    /// Node ids in insertion order.
    node_order: Vec<String>,
    /// Edges in insertion order.
    edges: Vec<Edge>,
    /// Unordered endpoint pair → index into `edges`.
    edge_index: HashMap<EdgeKey, usize>,
    /// Neighbor ids per node, in edge-insertion order.
    adjacency: HashMap<String, Vec<String>>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Register `id` at `pos`.  Re-adding an id updates its position.
    pub fn add_node(&mut self, id: impl Into<String>, pos: Point) {
        let id = id.into();
        if !self.nodes.contains_key(&id) {
            self.node_order.push(id.clone());
        }
        self.nodes.insert(id, Some(pos));
    }

    fn ensure_node(&mut self, id: &str) {
        if !self.nodes.contains_key(id) {
            self.nodes.insert(id.to_owned(), None);
            self.node_order.push(id.to_owned());
        }
    }

    /// Insert an undirected edge between `a` and `b`.
    ///
    /// Endpoints not yet registered are added without coordinates.  If the
    /// pair already has an edge (in either order), its attributes are
    /// replaced.
    pub fn add_edge(&mut self, a: impl Into<String>, b: impl Into<String>, data: EdgeData) {
        let (a, b) = (a.into(), b.into());
        self.ensure_node(&a);
        self.ensure_node(&b);

        let key = EdgeKey::new(&a, &b);
        match self.edge_index.get(&key) {
            Some(&i) => self.edges[i].data = data,
            None => {
                self.adjacency.entry(a.clone()).or_default().push(b.clone());
                self.adjacency.entry(b.clone()).or_default().push(a.clone());
                self.edge_index.insert(key, self.edges.len());
                self.edges.push(Edge { a, b, data });
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Position of `id`, when one was recorded.
    pub fn position(&self, id: &str) -> Option<Point> {
        self.nodes.get(id).copied().flatten()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.node_order.iter().map(String::as_str)
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Attributes of the edge between `a` and `b`, in either endpoint order.
    pub fn edge(&self, a: &str, b: &str) -> Option<&EdgeData> {
        self.edge_index
            .get(&EdgeKey::new(a, b))
            .map(|&i| &self.edges[i].data)
    }

    /// Neighbors of `id`, in edge-insertion order.
    pub fn neighbors(&self, id: &str) -> impl Iterator<Item = &str> {
        self.adjacency
            .get(id)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }
}
