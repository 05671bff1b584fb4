//! `tp-signal` — traffic-signal timing simulation.
//!
//! A pure tabular transform over per-period flow counts: no graph, no I/O,
//! nothing fallible.  Missing counts read as zero and zero-flow records get
//! all-zero allocations, so every input row produces a well-defined output
//! row (except in the greedy-vs-fixed comparison, which skips them).
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.  |

pub mod simulator;

#[cfg(test)]
mod tests;

pub use simulator::{
    CongestionLevel, CongestionReport, EmergencyPlan, GreenSplit, PlanReason, TimingComparison,
    TrafficSimulator,
};
