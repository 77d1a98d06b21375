//! The input contract: an already-built, pruned, immutable box tree.
//!
//! Tree construction, particle sorting and particle-to-box assignment
//! happen elsewhere; a `Tree` is produced upstream and handed to
//! [`crate::builder::FmmTraversalBuilder`] read-only.

use num_traits::Float;

use super::dimension::Dimension;
use super::flags::BoxFlags;

/// Index of a box within the tree, in `[0, nboxes)`. Box 0 is the root.
pub type BoxId = usize;

/// Local index of a child within its parent, in `[0, 2^dimensions)`.
pub type MortonNr = usize;

/// A box tree: the read-only input to the traversal builder.
///
/// `box_centers` is stored column-major per axis (all box-0 coordinates
/// along axis 0 first, then axis 1, ...) so the adjacency predicate can
/// sweep one axis at a time.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    /// 2 or 3.
    pub dimensions: Dimension,
    /// Total number of boxes.
    pub nboxes: usize,
    /// Number of levels (root is level 0).
    pub nlevels: usize,
    /// Side length of the root box.
    pub root_extent: T,
    /// `dimensions * aligned_nboxes` entries, axis-major: `box_centers[d *
    /// aligned_nboxes + box_id]`.
    pub box_centers: Vec<T>,
    /// Stride used to index `box_centers`/`box_child_ids`. May exceed
    /// `nboxes` if the tree builder padded for alignment.
    pub aligned_nboxes: usize,
    /// Level of each box; 0 for the root.
    pub box_levels: Vec<u8>,
    /// Parent of each box; `box_parent_ids[0] == 0` (self-loop sentinel).
    pub box_parent_ids: Vec<BoxId>,
    /// `box_child_ids[morton * aligned_nboxes + box_id]`; 0 means "no child".
    pub box_child_ids: Vec<BoxId>,
    /// Inclusive start index of each level in a level-sorted box list;
    /// length `nlevels + 1`.
    pub level_start_box_nrs: Vec<BoxId>,
    /// Per-box classification bitset.
    pub box_flags: Vec<BoxFlags>,
    /// Whether every source is also a target (aliases `target_boxes` to
    /// `source_boxes`).
    pub sources_are_targets: bool,
    /// Whether the tree satisfies the pruned-tree invariant: every leaf
    /// is flagged with its own sources/targets. Set by the tree builder;
    /// checked, not recomputed, by [`crate::builder::FmmTraversalBuilder`].
    pub is_pruned: bool,
}

impl<T: Float> Tree<T> {
    /// Side length of a box at the given level: `root_extent * 2^-level`.
    pub fn size_at_level(&self, level: u8) -> T {
        let two = T::one() + T::one();
        self.root_extent / two.powi(level as i32)
    }

    /// The center of `box_id`, one coordinate per axis.
    pub fn center(&self, box_id: BoxId) -> Vec<T> {
        self.dimensions
            .axes()
            .map(|axis| self.box_centers[axis * self.aligned_nboxes + box_id])
            .collect()
    }

    /// The child of `box_id` in octant `morton_nr`, or `None` if absent.
    ///
    /// Box 0 is the root and can never itself be a child, so a stored
    /// `0` unambiguously means "no child".
    pub fn child(&self, box_id: BoxId, morton_nr: MortonNr) -> Option<BoxId> {
        let child = self.box_child_ids[morton_nr * self.aligned_nboxes + box_id];
        if child == 0 {
            None
        } else {
            Some(child)
        }
    }

    /// The parent of `box_id`, or `None` at the root.
    pub fn parent(&self, box_id: BoxId) -> Option<BoxId> {
        if box_id == crate::constants::ROOT {
            None
        } else {
            Some(self.box_parent_ids[box_id])
        }
    }

    /// Level of `box_id`.
    pub fn level(&self, box_id: BoxId) -> u8 {
        self.box_levels[box_id]
    }

    /// Flags of `box_id`.
    pub fn flags(&self, box_id: BoxId) -> BoxFlags {
        self.box_flags[box_id]
    }
}
