//! S3 — "list 1": neighbor source boxes.

use num_traits::Float;
use rayon::prelude::*;

use super::adjacency::is_adjacent_or_overlapping;
use super::walk::Walker;
use crate::constants::ROOT;
use crate::error::Result;
use crate::types::flags::BoxFlags;
use crate::types::traversal_info::CsrList;
use crate::types::tree::{BoxId, Tree};

/// Every leaf-source box adjacent-or-overlapping to `tgt_box`, found by
/// descending from the root and emitting on `HAS_OWN_SOURCES` while
/// continuing to descend wherever `HAS_CHILD_SOURCES` holds and the
/// child is still adjacent. `tgt_box` may appear in its own list
/// (self-interaction is handled directly downstream).
fn list1_of_target_box<T: Float>(
    tree: &Tree<T>,
    tgt_box: BoxId,
    stack_capacity: usize,
    children_per_box: usize,
) -> Result<Vec<BoxId>> {
    let mut result = Vec::new();

    let level = tree.level(tgt_box);
    let center = tree.center(tgt_box);

    let mut walker = Walker::new(ROOT, stack_capacity, children_per_box);
    loop {
        let walk_box = walker.current_box();
        let morton = walker.current_morton();

        if let Some(child) = tree.child(walk_box, morton) {
            if is_adjacent_or_overlapping(tree, &center, level, child) {
                let flags = tree.flags(child);
                if flags.contains(BoxFlags::HAS_OWN_SOURCES) {
                    result.push(child);
                }
                if flags.contains(BoxFlags::HAS_CHILD_SOURCES) {
                    walker.descend_into(child)?;
                    continue;
                }
            }
        }

        if !walker.advance() {
            break;
        }
    }

    Ok(result)
}

/// Build list 1 for every `target_box`, keyed by `target_box_number`
/// (index into `target_boxes`), not by `box_id`.
pub fn neighbor_source_boxes<T: Float + Sync>(
    tree: &Tree<T>,
    target_boxes: &[BoxId],
    stack_capacity: usize,
) -> Result<CsrList> {
    let children_per_box = tree.dimensions.children_per_box();

    let per_target: Vec<Vec<BoxId>> = target_boxes
        .par_iter()
        .map(|&tgt_box| list1_of_target_box(tree, tgt_box, stack_capacity, children_per_box))
        .collect::<Result<Vec<_>>>()?;

    Ok(super::build_csr(per_target))
}
