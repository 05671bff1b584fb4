//! `tp-core` — foundational types for the `rust_tp` transport planning toolkit.
//!
//! This crate is a dependency of every other `tp-*` crate.  It intentionally
//! has no `tp-*` dependencies and no mandatory external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`geo`]    | `Point`, planar Euclidean distance                    |
//! | [`period`] | `TimePeriod` (traversal), `FlowPeriod` (flow/demand)  |
//! | [`flow`]   | `RoadFlow` per-period vehicle-count record            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod flow;
pub mod geo;
pub mod period;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use flow::RoadFlow;
pub use geo::Point;
pub use period::{FlowPeriod, TimePeriod};
