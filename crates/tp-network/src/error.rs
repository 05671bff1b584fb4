//! Network-subsystem error type.

use thiserror::Error;

/// Errors produced by `tp-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// A query named a node id absent from the graph.
    #[error("node `{0}` not found in graph")]
    NodeNotFound(String),

    /// An A* query touched a node with no entry in the position table.
    #[error("no position known for node `{0}`")]
    PositionNotFound(String),
}

/// Shorthand result type for `tp-network` operations.
pub type NetworkResult<T> = Result<T, NetworkError>;
