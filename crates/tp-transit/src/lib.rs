//! `tp-transit` — exact budget-constrained route selection.
//!
//! Given a table of routes (demand served, vehicles required) and a fleet
//! budget, [`TransitOptimizer`] picks the subset of routes maximizing total
//! served demand without exceeding the budget — the 0/1 knapsack, solved
//! exactly by dynamic programming.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.  |

pub mod error;
pub mod optimizer;

#[cfg(test)]
mod tests;

pub use error::{TransitError, TransitResult};
pub use optimizer::{RouteRecord, TransitOptimizer};
