//! Shortest-path queries with per-instance memoization.
//!
//! # Unreachable-target conventions
//!
//! The two query families signal "no path" differently, and both behaviors
//! are part of the contract:
//!
//! - the Dijkstra variants return the predecessor trace from the target,
//!   which for an unreached target degenerates to a single-element path
//!   holding only the target;
//! - the A* variants return an empty path when the frontier exhausts.
//!
//! Callers that want one convention must normalize at their own boundary;
//! this module will not.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tp_core::{Point, TimePeriod};

use crate::error::{NetworkError, NetworkResult};
use crate::graph::{DEFAULT_EDGE_WEIGHT, EdgeData, RoadGraph};

// ── Memo cache ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
enum QueryKind {
    Dijkstra,
    DijkstraTime,
    AStar,
    AStarTime,
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
struct MemoKey {
    kind: QueryKind,
    source: String,
    target: String,
    period: Option<TimePeriod>,
}

/// Cache hit/miss counters for one [`PathFinder`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

// ── Priority-queue entry ──────────────────────────────────────────────────────

/// Heap entry ordered as a min-heap over `f64` cost.
struct QueueEntry<'a> {
    cost: f64,
    node: &'a str,
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from the standard max-heap).
        other.cost.total_cmp(&self.cost)
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry<'_> {}

// ── PathFinder ────────────────────────────────────────────────────────────────

/// Shortest-path queries over one read-only graph.
///
/// Every query result — reachable or not — is memoized for the lifetime of
/// the finder, and an identical repeat query is served from the cache
/// without recomputation.  The cache is never evicted, so a finder should
/// live only as long as the graph it was built for stays unchanged.  The
/// cache is private to the instance; share the graph, not the finder.
pub struct PathFinder<'g> {
    graph: &'g RoadGraph,
    memo: HashMap<MemoKey, Vec<String>>,
    stats: CacheStats,
}

impl<'g> PathFinder<'g> {
    pub fn new(graph: &'g RoadGraph) -> Self {
        Self {
            graph,
            memo: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Cache hit/miss counters so far.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Number of distinct queries cached so far.
    pub fn cached_queries(&self) -> usize {
        self.memo.len()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Uniform-cost Dijkstra over base edge weights (default
    /// [`DEFAULT_EDGE_WEIGHT`] when an edge carries none).
    ///
    /// An unreachable `target` yields the degenerate predecessor trace
    /// `[target]`; callers must treat a path that does not start at
    /// `source` as "no path".
    pub fn dijkstra(&mut self, source: &str, target: &str) -> NetworkResult<Vec<String>> {
        self.check_node(source)?;
        self.check_node(target)?;
        let key = MemoKey {
            kind: QueryKind::Dijkstra,
            source: source.to_owned(),
            target: target.to_owned(),
            period: None,
        };
        if let Some(path) = self.memo.get(&key) {
            self.stats.hits += 1;
            return Ok(path.clone());
        }
        self.stats.misses += 1;

        let path = self.run_dijkstra(source, target, |e| {
            e.weight.unwrap_or(DEFAULT_EDGE_WEIGHT)
        });
        self.memo.insert(key, path.clone());
        Ok(path)
    }

    /// Dijkstra with edge cost taken from the named period's weight
    /// (default [`DEFAULT_EDGE_WEIGHT`] when the edge lacks that period).
    ///
    /// Same unreachable-target convention as [`dijkstra`](Self::dijkstra).
    pub fn dijkstra_time_variant(
        &mut self,
        source: &str,
        target: &str,
        period: TimePeriod,
    ) -> NetworkResult<Vec<String>> {
        self.check_node(source)?;
        self.check_node(target)?;
        let key = MemoKey {
            kind: QueryKind::DijkstraTime,
            source: source.to_owned(),
            target: target.to_owned(),
            period: Some(period),
        };
        if let Some(path) = self.memo.get(&key) {
            self.stats.hits += 1;
            return Ok(path.clone());
        }
        self.stats.misses += 1;

        let path = self.run_dijkstra(source, target, |e| {
            e.period_weight(period).unwrap_or(DEFAULT_EDGE_WEIGHT)
        });
        self.memo.insert(key, path.clone());
        Ok(path)
    }

    /// A* with a straight-line Euclidean heuristic over `positions` and
    /// base edge weights as step cost.
    ///
    /// Returns an empty path when `target` is never reached.  A node
    /// touched by the search but absent from `positions` is a
    /// [`NetworkError::PositionNotFound`].
    pub fn a_star(
        &mut self,
        source: &str,
        target: &str,
        positions: &HashMap<String, Point>,
    ) -> NetworkResult<Vec<String>> {
        self.check_node(source)?;
        self.check_node(target)?;
        let key = MemoKey {
            kind: QueryKind::AStar,
            source: source.to_owned(),
            target: target.to_owned(),
            period: None,
        };
        if let Some(path) = self.memo.get(&key) {
            self.stats.hits += 1;
            return Ok(path.clone());
        }
        self.stats.misses += 1;

        let path = self.run_a_star(source, target, positions, |e| {
            e.weight.unwrap_or(DEFAULT_EDGE_WEIGHT)
        })?;
        self.memo.insert(key, path.clone());
        Ok(path)
    }

    /// A* with the named period's weight as step cost; same heuristic and
    /// unreachable-target convention as [`a_star`](Self::a_star).
    pub fn a_star_time_variant(
        &mut self,
        source: &str,
        target: &str,
        positions: &HashMap<String, Point>,
        period: TimePeriod,
    ) -> NetworkResult<Vec<String>> {
        self.check_node(source)?;
        self.check_node(target)?;
        let key = MemoKey {
            kind: QueryKind::AStarTime,
            source: source.to_owned(),
            target: target.to_owned(),
            period: Some(period),
        };
        if let Some(path) = self.memo.get(&key) {
            self.stats.hits += 1;
            return Ok(path.clone());
        }
        self.stats.misses += 1;

        let path = self.run_a_star(source, target, positions, |e| {
            e.period_weight(period).unwrap_or(DEFAULT_EDGE_WEIGHT)
        })?;
        self.memo.insert(key, path.clone());
        Ok(path)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn check_node(&self, id: &str) -> NetworkResult<()> {
        if self.graph.contains_node(id) {
            Ok(())
        } else {
            Err(NetworkError::NodeNotFound(id.to_owned()))
        }
    }

    fn run_dijkstra<'a>(
        &'a self,
        source: &'a str,
        target: &'a str,
        cost: impl Fn(&EdgeData) -> f64,
    ) -> Vec<String> {
        let graph: &'a RoadGraph = self.graph;
        let mut dist: HashMap<&'a str, f64> = HashMap::new();
        let mut prev: HashMap<&'a str, &'a str> = HashMap::new();
        let mut heap = BinaryHeap::new();

        dist.insert(source, 0.0);
        heap.push(QueueEntry {
            cost: 0.0,
            node: source,
        });

        while let Some(QueueEntry { cost: d, node: u }) = heap.pop() {
            if u == target {
                break;
            }
            // Skip stale heap entries.
            if d > dist.get(u).copied().unwrap_or(f64::INFINITY) {
                continue;
            }
            for v in graph.neighbors(u) {
                let Some(edge) = graph.edge(u, v) else { continue };
                let alt = d + cost(edge);
                if alt < dist.get(v).copied().unwrap_or(f64::INFINITY) {
                    dist.insert(v, alt);
                    prev.insert(v, u);
                    heap.push(QueueEntry { cost: alt, node: v });
                }
            }
        }

        // Predecessor trace from the target backward.  An unreached target
        // has no predecessor, so the trace degenerates to `[target]`.
        let mut path = vec![target.to_owned()];
        let mut node = target;
        while let Some(&p) = prev.get(node) {
            path.push(p.to_owned());
            node = p;
        }
        path.reverse();
        path
    }

    fn run_a_star<'a>(
        &'a self,
        source: &'a str,
        target: &'a str,
        positions: &'a HashMap<String, Point>,
        cost: impl Fn(&EdgeData) -> f64,
    ) -> NetworkResult<Vec<String>> {
        let graph: &'a RoadGraph = self.graph;
        let heuristic = |u: &str, v: &str| -> NetworkResult<f64> {
            let pu = positions
                .get(u)
                .ok_or_else(|| NetworkError::PositionNotFound(u.to_owned()))?;
            let pv = positions
                .get(v)
                .ok_or_else(|| NetworkError::PositionNotFound(v.to_owned()))?;
            Ok(pu.distance_to(*pv))
        };

        let mut g_score: HashMap<&'a str, f64> = HashMap::new();
        let mut came_from: HashMap<&'a str, &'a str> = HashMap::new();
        let mut open = BinaryHeap::new();

        g_score.insert(source, 0.0);
        open.push(QueueEntry {
            cost: heuristic(source, target)?,
            node: source,
        });

        while let Some(QueueEntry { node: current, .. }) = open.pop() {
            if current == target {
                let mut path = Vec::new();
                let mut node = current;
                while let Some(&p) = came_from.get(node) {
                    path.push(node.to_owned());
                    node = p;
                }
                path.push(node.to_owned());
                path.reverse();
                return Ok(path);
            }

            let g_current = g_score.get(current).copied().unwrap_or(f64::INFINITY);
            for v in graph.neighbors(current) {
                let Some(edge) = graph.edge(current, v) else {
                    continue;
                };
                let tentative = g_current + cost(edge);
                if tentative < g_score.get(v).copied().unwrap_or(f64::INFINITY) {
                    came_from.insert(v, current);
                    g_score.insert(v, tentative);
                    open.push(QueueEntry {
                        cost: tentative + heuristic(v, target)?,
                        node: v,
                    });
                }
            }
        }

        // Frontier exhausted: no path.
        Ok(Vec::new())
    }
}
