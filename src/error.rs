use thiserror::Error;

/// Top-level error type for the planis pattern kernel.
#[derive(Debug, Error)]
pub enum PlanisError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to the half-edge topology graph.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("vertex {0} is not on the ring")]
    VertexNotInRing(u32),

    #[error("ring does not close back on its first half-edge")]
    RingNotClosed,

    #[error("half-edge and its ring successor are not a twin pair")]
    NotTwinPair,
}

/// Errors related to kernel operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`PlanisError`].
pub type Result<T> = std::result::Result<T, PlanisError>;
