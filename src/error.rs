//! Error kinds for the traversal builder.

use crate::types::tree::BoxId;

/// Everything that can go wrong while building a [`crate::types::traversal_info::TraversalInfo`].
///
/// All errors abort the whole build; no partial output is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum TraversalError {
    /// The input tree's pruned-ness invariant does not hold.
    #[error("tree is not pruned: every leaf must be flagged with its sources/targets")]
    TreeNotPruned,

    /// `dimensions` was neither 2 nor 3.
    #[error("unsupported dimension: {0}, expected 2 or 3")]
    UnsupportedDimension(usize),

    /// Descent depth exceeded the preallocated walk stack.
    ///
    /// This can only happen if the stack was undersized relative to
    /// `tree.nlevels`; it is an internal invariant violation, not
    /// something a caller can trigger through valid input.
    #[error("level stack overflow: descended past allocated depth {allocated} at box {box_id}")]
    LevelStackOverflow {
        /// The box being processed when the stack overflowed.
        box_id: BoxId,
        /// The depth the stack was allocated for.
        allocated: usize,
    },

    /// The caller requested cancellation at a pipeline stage boundary.
    #[error("traversal build cancelled")]
    CancelledByCaller,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TraversalError>;
