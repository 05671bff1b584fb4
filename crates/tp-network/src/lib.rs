//! `tp-network` — road graph model, construction, routing, and spanning-tree
//! planning.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`graph`]   | `RoadGraph`, `Edge`, `EdgeData`, `RoadClass`              |
//! | [`builder`] | `GraphBuilder` and the typed input records                |
//! | [`router`]  | `PathFinder` — four memoized shortest-path queries        |
//! | [`planner`] | `MstPlanner`, `SpanningTree`, `TreeSummary`               |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.  |

pub mod builder;
pub mod error;
pub mod graph;
pub mod planner;
pub mod router;


pub use builder::{GraphBuilder, NodeRecord, RoadRecord};
pub use error::{NetworkError, NetworkResult};
pub use graph::{DEFAULT_EDGE_WEIGHT, Edge, EdgeData, RoadClass, RoadGraph};
pub use planner::{MstPlanner, SpanningTree, TreeSummary};
pub use router::{CacheStats, PathFinder};
