//! Per-road traffic flow record.

use crate::FlowPeriod;

/// Per-period vehicle counts for one road segment.
///
/// `road_id` is the composite `"from-to"` identifier of the traffic table.
/// A missing count reads as `0.0`; absent optional fields degrade to
/// defaults rather than failing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadFlow {
    pub road_id: String,
    /// Vehicle counts per hour, in [`FlowPeriod::ALL`] order.
    pub counts: [Option<f64>; 4],
}

impl RoadFlow {
    /// A record with no counts recorded yet.
    pub fn new(road_id: impl Into<String>) -> Self {
        Self {
            road_id: road_id.into(),
            counts: [None; 4],
        }
    }

    /// A fully populated record, counts given in `ALL` order.
    pub fn with_counts(
        road_id: impl Into<String>,
        morning: f64,
        afternoon: f64,
        evening: f64,
        night: f64,
    ) -> Self {
        Self {
            road_id: road_id.into(),
            counts: [Some(morning), Some(afternoon), Some(evening), Some(night)],
        }
    }

    /// Count for `period`, defaulting to `0.0` when absent.
    #[inline]
    pub fn count(&self, period: FlowPeriod) -> f64 {
        self.counts[period as usize].unwrap_or(0.0)
    }

    pub fn set_count(&mut self, period: FlowPeriod, value: f64) {
        self.counts[period as usize] = Some(value);
    }

    /// Sum of all four period counts.
    pub fn total(&self) -> f64 {
        FlowPeriod::ALL.iter().map(|&p| self.count(p)).sum()
    }
}
