use thiserror::Error;

use crate::topology::ShapeKind;

/// Top-level error type for the congru crate.
#[derive(Debug, Error)]
pub enum CongruError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Match(#[from] MatchError),
}

/// Errors related to the topological model.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors related to model operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised by the matching layer.
///
/// These are programming errors in how a comparison or scan was set up, not
/// per-candidate conditions: a candidate that merely fails to match is never
/// an error.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("cannot compare a {reference:?} signature against a {candidate:?} signature")]
    KindMismatch {
        reference: ShapeKind,
        candidate: ShapeKind,
    },
}

/// A mass-property query returned no result for a shape.
///
/// The recoverable, per-candidate failure of signature extraction (degenerate
/// or non-manifold geometry). Scans skip the affected candidate and continue;
/// extraction failure never aborts a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractionFailure {
    #[error("volume mass properties unavailable")]
    Volume,

    #[error("area mass properties unavailable")]
    Area,
}

/// Convenience type alias for results using [`CongruError`].
pub type Result<T> = std::result::Result<T, CongruError>;
