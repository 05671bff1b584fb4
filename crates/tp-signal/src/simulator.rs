//! Green-time allocation, congestion classification, and timing comparison.

use std::collections::HashMap;

use tp_core::{FlowPeriod, RoadFlow};

/// Seconds of green time split across the four periods in one cycle.
const CYCLE_SECONDS: f64 = 60.0;
/// Uniform per-period allocation of the fixed-timing baseline.
const FIXED_ALLOCATION: f64 = 15.0;
/// Allocation granted to the flagged period under an emergency override.
const PRIORITY_ALLOCATION: f64 = 30.0;
/// Allocation for the remaining periods under an emergency override.
const REDUCED_ALLOCATION: f64 = 10.0;

/// High-congestion threshold on total flow.
const HIGH_FLOW: f64 = 3000.0;
/// Moderate-congestion threshold on total flow.
const MODERATE_FLOW: f64 = 1500.0;

// ── Output types ──────────────────────────────────────────────────────────────

/// Congestion classification by total daily flow.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CongestionLevel {
    Low,
    Moderate,
    High,
}

impl CongestionLevel {
    /// `High` at 3000 and above, `Moderate` at 1500, `Low` below that.
    pub fn from_total_flow(total: f64) -> Self {
        if total >= HIGH_FLOW {
            CongestionLevel::High
        } else if total >= MODERATE_FLOW {
            CongestionLevel::Moderate
        } else {
            CongestionLevel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CongestionLevel::Low => "Low",
            CongestionLevel::Moderate => "Moderate",
            CongestionLevel::High => "High",
        }
    }
}

impl std::fmt::Display for CongestionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-period green-time allocation in seconds, in [`FlowPeriod::ALL`] order.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreenSplit([f64; 4]);

impl GreenSplit {
    /// The same allocation for every period.
    pub fn uniform(seconds: f64) -> Self {
        Self([seconds; 4])
    }

    #[inline]
    pub fn get(self, period: FlowPeriod) -> f64 {
        self.0[period as usize]
    }

    fn set(&mut self, period: FlowPeriod, seconds: f64) {
        self.0[period as usize] = seconds;
    }
}

/// Congestion summary for one road segment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CongestionReport {
    pub road_id: String,
    pub total_flow: f64,
    pub dominant_period: FlowPeriod,
    pub green_time: GreenSplit,
    pub congestion: CongestionLevel,
}

/// Why a road received its emergency-cycle allocation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlanReason {
    /// The road is flagged; the named period gets the long green.
    EmergencyPriority(FlowPeriod),
    /// Unflagged road on the regular uniform cycle.
    NormalCycle,
}

impl std::fmt::Display for PlanReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanReason::EmergencyPriority(period) => write!(f, "emergency priority -> {period}"),
            PlanReason::NormalCycle => f.write_str("normal cycle"),
        }
    }
}

/// Signal plan for one road under emergency prioritization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmergencyPlan {
    pub road_id: String,
    pub allocation: GreenSplit,
    pub reason: PlanReason,
}

/// Greedy-vs-fixed timing comparison for one road segment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingComparison {
    pub road_id: String,
    pub dominant_period: FlowPeriod,
    /// Flow-proportional allocation of the dominant period, one decimal.
    pub greedy_allocation: f64,
    /// The uniform baseline the greedy split is measured against.
    pub fixed_allocation: f64,
    /// `true` when the greedy allocation is at least the fixed baseline.
    pub is_optimal: bool,
    pub congestion: CongestionLevel,
}

// ── TrafficSimulator ──────────────────────────────────────────────────────────

/// Derives signal timings and congestion classes from raw flow counts.
pub struct TrafficSimulator {
    records: Vec<RoadFlow>,
}

impl TrafficSimulator {
    pub fn new(records: Vec<RoadFlow>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[RoadFlow] {
        &self.records
    }

    /// Green-time split, dominant period, and congestion level per road.
    ///
    /// Each period gets `(flow / total) × 60` seconds, rounded to one
    /// decimal; a zero-flow record allocates 0.0 everywhere.
    pub fn simulate_congestion(&self) -> Vec<CongestionReport> {
        self.records
            .iter()
            .map(|rec| {
                let total = rec.total();
                let mut green = GreenSplit::default();
                if total > 0.0 {
                    for period in FlowPeriod::ALL {
                        green.set(period, round1(rec.count(period) / total * CYCLE_SECONDS));
                    }
                }
                CongestionReport {
                    road_id: rec.road_id.clone(),
                    total_flow: total,
                    dominant_period: dominant_period(rec),
                    green_time: green,
                    congestion: CongestionLevel::from_total_flow(total),
                }
            })
            .collect()
    }

    /// Emergency-cycle allocations.
    ///
    /// A road flagged in `emergency_roads` grants its priority period 30
    /// seconds and the rest 10; unflagged roads run a uniform 15.
    pub fn prioritize_emergency(
        &self,
        emergency_roads: &HashMap<String, FlowPeriod>,
    ) -> Vec<EmergencyPlan> {
        self.records
            .iter()
            .map(|rec| match emergency_roads.get(&rec.road_id) {
                Some(&priority) => {
                    let mut allocation = GreenSplit::uniform(REDUCED_ALLOCATION);
                    allocation.set(priority, PRIORITY_ALLOCATION);
                    EmergencyPlan {
                        road_id: rec.road_id.clone(),
                        allocation,
                        reason: PlanReason::EmergencyPriority(priority),
                    }
                }
                None => EmergencyPlan {
                    road_id: rec.road_id.clone(),
                    allocation: GreenSplit::uniform(FIXED_ALLOCATION),
                    reason: PlanReason::NormalCycle,
                },
            })
            .collect()
    }

    /// Compare the greedy (flow-proportional) allocation of the dominant
    /// period against the fixed 15-second baseline.
    ///
    /// Records with zero total flow carry no timing signal and are skipped
    /// entirely.
    pub fn analyze_greedy_vs_fixed(&self) -> Vec<TimingComparison> {
        self.records
            .iter()
            .filter(|rec| rec.total() > 0.0)
            .map(|rec| {
                let total = rec.total();
                let dominant = dominant_period(rec);
                let greedy = rec.count(dominant) / total * CYCLE_SECONDS;
                TimingComparison {
                    road_id: rec.road_id.clone(),
                    dominant_period: dominant,
                    greedy_allocation: round1(greedy),
                    fixed_allocation: FIXED_ALLOCATION,
                    is_optimal: greedy >= FIXED_ALLOCATION,
                    congestion: CongestionLevel::from_total_flow(total),
                }
            })
            .collect()
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// First period with the maximum count, in [`FlowPeriod::ALL`] order.
fn dominant_period(rec: &RoadFlow) -> FlowPeriod {
    let mut best = FlowPeriod::Morning;
    for period in FlowPeriod::ALL {
        if rec.count(period) > rec.count(best) {
            best = period;
        }
    }
    best
}

/// Round to one decimal place.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
