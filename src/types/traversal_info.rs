//! The traversal builder's output: compressed sparse interaction lists.

use std::sync::Arc;

use super::tree::{BoxId, Tree};

/// A compressed sparse adjacency list: `lists[starts[key]..starts[key+1]]`
/// is the entry for `key`.
///
/// `starts` has length `nkeys + 1`; `starts[nkeys] == lists.len()`.
#[derive(Debug, Clone, Default)]
pub struct CsrList {
    /// Offsets into `lists`, one per key plus a final sentinel.
    pub starts: Vec<usize>,
    /// Concatenated per-key entries.
    pub lists: Vec<BoxId>,
}

impl CsrList {
    /// Build from already-counted-and-written per-key runs.
    pub fn new(starts: Vec<usize>, lists: Vec<BoxId>) -> Self {
        debug_assert_eq!(*starts.last().unwrap_or(&0), lists.len());
        CsrList { starts, lists }
    }

    /// The entries for `key`.
    pub fn get(&self, key: usize) -> &[BoxId] {
        &self.lists[self.starts[key]..self.starts[key + 1]]
    }

    /// Number of keys this list is indexed over.
    pub fn nkeys(&self) -> usize {
        self.starts.len().saturating_sub(1)
    }
}

/// Named interaction-list fields, for the stringly-typed
/// [`TraversalInfo::get_box_list`] accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListName {
    /// Same-level adjacent boxes, keyed by `box_id`.
    Colleagues,
    /// "List 1": neighbor source boxes, keyed by `target_box_number`.
    NeighborSourceBoxes,
    /// "List 2": well-separated siblings, keyed by `box_id`.
    SepSiblings,
    /// "List 3": separated smaller non-siblings, keyed by `target_box_number`.
    SepSmallerNonsiblings,
    /// "List 4": separated bigger non-siblings, keyed by `box_id`.
    SepBiggerNonsiblings,
}

/// The immutable output of a traversal build: box partitions, level
/// indices, and the five classical FMM interaction lists, all as
/// compressed sparse adjacency.
#[derive(Debug, Clone)]
pub struct TraversalInfo<T> {
    /// The tree this traversal was built from.
    pub tree: Arc<Tree<T>>,

    /// Boxes with `HAS_OWN_SOURCES`, increasing `box_id` order.
    pub source_boxes: Arc<[BoxId]>,
    /// Boxes with `HAS_OWN_TARGETS`; aliases `source_boxes` (same
    /// `Arc`) when `tree.sources_are_targets`.
    pub target_boxes: Arc<[BoxId]>,
    /// Boxes with `HAS_CHILD_SOURCES`.
    pub source_parent_boxes: Vec<BoxId>,
    /// Level-start index into `source_parent_boxes`; length `nlevels + 1`.
    pub level_start_source_parent_box_nrs: Vec<BoxId>,

    /// "Colleagues": same-level adjacent boxes, keyed by `box_id`.
    pub colleagues: CsrList,
    /// "List 1": neighbor source boxes, keyed by `target_box_number`
    /// (index into `target_boxes`, not a `box_id`).
    pub neighbor_source_boxes: CsrList,
    /// "List 2": well-separated siblings, keyed by `box_id`.
    pub sep_siblings: CsrList,
    /// "List 3": separated smaller non-siblings, keyed by
    /// `target_box_number`.
    pub sep_smaller_nonsiblings: CsrList,
    /// "List 4": separated bigger non-siblings, keyed by `box_id`.
    pub sep_bigger_nonsiblings: CsrList,
}

impl<T> TraversalInfo<T> {
    /// Generic `(list, key)` accessor, useful when the list to fetch is
    /// chosen at runtime rather than known at the call site.
    pub fn get_box_list(&self, what: ListName, key: usize) -> &[BoxId] {
        match what {
            ListName::Colleagues => self.colleagues.get(key),
            ListName::NeighborSourceBoxes => self.neighbor_source_boxes.get(key),
            ListName::SepSiblings => self.sep_siblings.get(key),
            ListName::SepSmallerNonsiblings => self.sep_smaller_nonsiblings.get(key),
            ListName::SepBiggerNonsiblings => self.sep_bigger_nonsiblings.get(key),
        }
    }

    /// Colleagues of `box_id`.
    pub fn colleagues_of(&self, box_id: BoxId) -> &[BoxId] {
        self.colleagues.get(box_id)
    }

    /// List 1 of `target_box_number` (an index into `target_boxes`).
    pub fn list1_of(&self, target_box_number: usize) -> &[BoxId] {
        self.neighbor_source_boxes.get(target_box_number)
    }

    /// List 2 of `box_id`.
    pub fn list2_of(&self, box_id: BoxId) -> &[BoxId] {
        self.sep_siblings.get(box_id)
    }

    /// List 3 of `target_box_number`.
    pub fn list3_of(&self, target_box_number: usize) -> &[BoxId] {
        self.sep_smaller_nonsiblings.get(target_box_number)
    }

    /// List 4 of `box_id`.
    pub fn list4_of(&self, box_id: BoxId) -> &[BoxId] {
        self.sep_bigger_nonsiblings.get(box_id)
    }
}
