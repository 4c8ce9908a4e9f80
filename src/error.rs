//! The error taxonomy every fallible operation in this crate returns.

use thiserror::Error;

/// Errors surfaced by the max-tree engine.
///
/// There are no retries and no partial results: every operation in this
/// crate is all-or-nothing, and a caller that gets an `Err` back has made
/// no changes to any output buffer it passed in.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MaxTreeError {
    /// A caller-supplied invariant does not hold: a non-zero mask border, a
    /// `sorted_indices` array that isn't a permutation, a zero connectivity
    /// offset, or similar.
    #[error("precondition violation: {detail}")]
    PreconditionViolation {
        /// Human-readable description of which precondition failed.
        detail: String,
    },

    /// Two or more arrays that must agree in length (or with `Shape`) do
    /// not.
    #[error("shape mismatch: {detail}")]
    ShapeMismatch {
        /// Human-readable description of the mismatch.
        detail: String,
    },

    /// An internal invariant was violated in a way that should be
    /// unreachable given a correctly validated precondition. Kept distinct
    /// from `PreconditionViolation` so callers can tell "you gave us bad
    /// input" apart from "we have a bug".
    #[error("internal error: {detail}")]
    Internal {
        /// Human-readable description of the internal failure.
        detail: String,
    },
}

impl MaxTreeError {
    /// Builds a [`MaxTreeError::PreconditionViolation`] from any displayable
    /// detail message.
    pub fn precondition(detail: impl Into<String>) -> Self {
        Self::PreconditionViolation { detail: detail.into() }
    }

    /// Builds a [`MaxTreeError::ShapeMismatch`] from any displayable detail
    /// message.
    pub fn shape_mismatch(detail: impl Into<String>) -> Self {
        Self::ShapeMismatch { detail: detail.into() }
    }

    /// Builds a [`MaxTreeError::Internal`] from any displayable detail
    /// message.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal { detail: detail.into() }
    }
}
