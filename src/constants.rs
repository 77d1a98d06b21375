//! Hard-coded constants for the traversal builder and its dependents.

/// The box id of the root box. The root is always the first box emitted
/// by tree construction and is its own parent (see [`crate::types::tree::Tree`]).
pub const ROOT: usize = 0;

/// Default block size the per-traversal walk stack is padded to.
///
/// Chosen so the stack always has headroom over the tree's true depth and
/// [`crate::error::TraversalError::LevelStackOverflow`] stays an
/// internal-invariant condition rather than something reachable by a
/// deep-but-valid tree.
pub const DEFAULT_STACK_BLOCK: usize = 10;
