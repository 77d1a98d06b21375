//! S0 — box classification.

use std::sync::Arc;

use rayon::prelude::*;

use crate::types::flags::BoxFlags;
use crate::types::tree::{BoxId, Tree};

/// The three box-id partitions S0 produces.
pub struct Classification {
    /// Boxes with `HAS_OWN_SOURCES`.
    pub source_boxes: Arc<[BoxId]>,
    /// Boxes with `HAS_OWN_TARGETS`, or an alias of `source_boxes` when
    /// `tree.sources_are_targets`.
    pub target_boxes: Arc<[BoxId]>,
    /// Boxes with `HAS_CHILD_SOURCES`.
    pub source_parent_boxes: Vec<BoxId>,
}

/// Partition boxes by flag, in increasing `box_id` order (the level-start
/// extraction stage depends on this ordering).
pub fn classify<T: Sync>(tree: &Tree<T>) -> Classification {
    let source_boxes: Vec<BoxId> = (0..tree.nboxes)
        .into_par_iter()
        .filter(|&box_id| tree.flags(box_id).contains(BoxFlags::HAS_OWN_SOURCES))
        .collect();

    let source_parent_boxes: Vec<BoxId> = (0..tree.nboxes)
        .into_par_iter()
        .filter(|&box_id| tree.flags(box_id).contains(BoxFlags::HAS_CHILD_SOURCES))
        .collect();

    let source_boxes: Arc<[BoxId]> = source_boxes.into();

    let target_boxes: Arc<[BoxId]> = if tree.sources_are_targets {
        source_boxes.clone()
    } else {
        let targets: Vec<BoxId> = (0..tree.nboxes)
            .into_par_iter()
            .filter(|&box_id| tree.flags(box_id).contains(BoxFlags::HAS_OWN_TARGETS))
            .collect();
        targets.into()
    };

    Classification {
        source_boxes,
        target_boxes,
        source_parent_boxes,
    }
}
