//! Error types for drill-core.

use thiserror::Error;

/// Result type alias using SegmentError.
pub type Result<T> = std::result::Result<T, SegmentError>;

/// Errors that can occur while building sentence segments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    #[error("part counts differ: {target} target parts, {reference} reference parts")]
    MismatchedParts { target: usize, reference: usize },
}
