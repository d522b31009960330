use crate::dim::Dim;
use thiserror::Error;

/// Custom error type for the hypernet engine.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum HypernetError {
    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: Dim,
        actual: Dim,
        operation: String,
    },

    #[error("Incompatible dimensions {left} and {right} for operation {operation}")]
    IncompatibleDims {
        left: Dim,
        right: Dim,
        operation: String,
    },

    #[error("Arity mismatch: {operation} expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Unknown vertex {vertex}: the graph only has {len} vertices")]
    UnknownVertex { vertex: usize, len: usize },

    #[error("Cannot evaluate an empty hypergraph")]
    EmptyGraph,

    #[error("Backward called on a graph whose output is {actual}, expected a (1,1) scalar")]
    BackwardNonScalar { actual: Dim },

    #[error("Forward pass holds {actual} values but the graph has {expected} vertices")]
    StaleForwardPass { expected: usize, actual: usize },

    #[error("Non-finite value computed at vertex {vertex} ({name})")]
    NonFiniteValue { vertex: usize, name: String },

    #[error("Dimension ({rows},{cols}) exceeds the 16-bit limit per axis")]
    DimensionOverflow { rows: usize, cols: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to acquire {lock_type} lock: {reason}")]
    LockError { lock_type: String, reason: String },

    #[error("Internal error: {0}")]
    InternalError(String),
}
