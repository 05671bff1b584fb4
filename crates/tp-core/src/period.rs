//! Time-of-day buckets shared across the toolkit.
//!
//! Two enums exist on purpose: edge traversal weights are bucketed into
//! three periods ([`TimePeriod`]), while raw vehicle counts and demand
//! figures are reported in four ([`FlowPeriod`]).  The off-peak traversal
//! weight is derived from the afternoon and night flow counts, so the two
//! sets never line up one-to-one.

/// Time-of-day bucket for edge traversal weights.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimePeriod {
    /// Morning peak.
    Morning,
    /// Evening peak.
    Evening,
    /// Everything outside the two peaks.
    Offpeak,
}

impl TimePeriod {
    /// All traversal periods, in canonical order.
    pub const ALL: [TimePeriod; 3] = [
        TimePeriod::Morning,
        TimePeriod::Evening,
        TimePeriod::Offpeak,
    ];

    /// Human-readable label, matching the source tables' column prefixes.
    pub fn as_str(self) -> &'static str {
        match self {
            TimePeriod::Morning => "morning",
            TimePeriod::Evening => "evening",
            TimePeriod::Offpeak => "offpeak",
        }
    }
}

impl std::fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time-of-day bucket for vehicle-flow counts and demand figures.
///
/// `ALL` fixes the enumeration order; wherever a tie is broken by "first
/// period encountered" (e.g. the dominant-period pick in `tp-signal`), it
/// is this order that counts.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowPeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl FlowPeriod {
    /// All flow periods, in the fixed tie-breaking order.
    pub const ALL: [FlowPeriod; 4] = [
        FlowPeriod::Morning,
        FlowPeriod::Afternoon,
        FlowPeriod::Evening,
        FlowPeriod::Night,
    ];

    /// Human-readable label, useful for report column values.
    pub fn as_str(self) -> &'static str {
        match self {
            FlowPeriod::Morning => "morning",
            FlowPeriod::Afternoon => "afternoon",
            FlowPeriod::Evening => "evening",
            FlowPeriod::Night => "night",
        }
    }
}

impl std::fmt::Display for FlowPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
