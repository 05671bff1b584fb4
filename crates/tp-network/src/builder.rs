//! Graph construction from typed road, coordinate, and traffic tables.
//!
//! The builder is the boundary between the caller's tabular world and the
//! graph model: it takes plain records in, computes per-period traversal
//! weights from the traffic counts, and hands back a [`RoadGraph`].
//! Building twice from identical inputs yields identical graph content.

use std::collections::HashMap;

use log::info;

use tp_core::{FlowPeriod, Point, RoadFlow, TimePeriod};

use crate::graph::{EdgeData, RoadClass, RoadGraph};

/// Vehicle-count divisor normalizing hourly flows into weight multipliers.
const FLOW_SCALE: f64 = 1000.0;

// ── Input records ─────────────────────────────────────────────────────────────

/// One row of the node-coordinate table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeRecord {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

/// One row of a road-segment table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadRecord {
    pub from_id: String,
    pub to_id: String,
    pub distance_km: f64,
    /// Capacity in vehicles per hour, when the table carries one.
    pub capacity_veh_h: Option<f64>,
}

impl RoadRecord {
    pub fn new(from_id: impl Into<String>, to_id: impl Into<String>, distance_km: f64) -> Self {
        Self {
            from_id: from_id.into(),
            to_id: to_id.into(),
            distance_km,
            capacity_veh_h: None,
        }
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Builds a [`RoadGraph`] from typed road, coordinate, and traffic tables.
///
/// Empty slices stand in for absent optional tables.
#[derive(Default)]
pub struct GraphBuilder {
    graph: RoadGraph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from existing roads, candidate roads, node coordinates,
    /// and per-segment traffic counts.
    ///
    /// Per-period weights: a road with a matching traffic record (looked up
    /// by `"from-to"` id in either direction) weighs
    /// `distance × count / 1000` for the morning and evening peaks, and
    /// `distance × mean(afternoon, night) / 1000` off-peak.  Roads without
    /// traffic data weigh the base distance in every period.
    pub fn build_from_roads(
        mut self,
        existing: &[RoadRecord],
        potential: &[RoadRecord],
        coords: &[NodeRecord],
        traffic: &[RoadFlow],
    ) -> RoadGraph {
        for rec in coords {
            self.graph.add_node(rec.id.clone(), Point::new(rec.x, rec.y));
        }

        let lookup = traffic_lookup(traffic);

        for rec in existing {
            self.add_road(rec, RoadClass::Existing, &lookup);
        }
        for rec in potential {
            self.add_road(rec, RoadClass::Potential, &lookup);
        }

        info!(
            "built road graph: {} nodes, {} edges ({} existing, {} potential roads)",
            self.graph.node_count(),
            self.graph.edge_count(),
            existing.len(),
            potential.len(),
        );
        self.graph
    }

    fn add_road<'t>(
        &mut self,
        rec: &'t RoadRecord,
        class: RoadClass,
        lookup: &HashMap<(&'t str, &'t str), &'t RoadFlow>,
    ) {
        let data = EdgeData {
            weight: Some(rec.distance_km),
            period_weights: period_weights(rec, lookup),
            capacity: rec.capacity_veh_h,
            class,
        };
        self.graph.add_edge(rec.from_id.clone(), rec.to_id.clone(), data);
    }
}

// ── Traffic lookup ────────────────────────────────────────────────────────────

/// Bidirectional lookup from an endpoint pair to its traffic record.
///
/// Composite ids must split into exactly `"from-to"`; ids with extra `-`
/// separators are skipped.
fn traffic_lookup(traffic: &[RoadFlow]) -> HashMap<(&str, &str), &RoadFlow> {
    let mut lookup = HashMap::with_capacity(traffic.len() * 2);
    for flow in traffic {
        let parts: Vec<&str> = flow.road_id.split('-').collect();
        if let [from, to] = parts[..] {
            lookup.insert((from, to), flow);
            lookup.insert((to, from), flow);
        }
    }
    lookup
}

fn period_weights<'t>(
    rec: &'t RoadRecord,
    lookup: &HashMap<(&'t str, &'t str), &'t RoadFlow>,
) -> HashMap<TimePeriod, f64> {
    let d = rec.distance_km;
    let mut weights = HashMap::with_capacity(TimePeriod::ALL.len());

    match lookup.get(&(rec.from_id.as_str(), rec.to_id.as_str())) {
        Some(flow) => {
            weights.insert(
                TimePeriod::Morning,
                d * flow.count(FlowPeriod::Morning) / FLOW_SCALE,
            );
            weights.insert(
                TimePeriod::Evening,
                d * flow.count(FlowPeriod::Evening) / FLOW_SCALE,
            );
            let offpeak = (flow.count(FlowPeriod::Afternoon) + flow.count(FlowPeriod::Night)) / 2.0;
            weights.insert(TimePeriod::Offpeak, d * offpeak / FLOW_SCALE);
        }
        // No counts for this segment: every period costs the base distance.
        None => {
            for period in TimePeriod::ALL {
                weights.insert(period, d);
            }
        }
    }

    weights
}
