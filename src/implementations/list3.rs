//! S5 — "list 3": separated smaller non-siblings.

use num_traits::Float;
use rayon::prelude::*;

use super::adjacency::is_adjacent_or_overlapping;
use super::walk::Walker;
use crate::error::Result;
use crate::types::flags::BoxFlags;
use crate::types::traversal_info::CsrList;
use crate::types::tree::{BoxId, Tree};

/// Descend into each colleague of `tgt_box`, keeping the invariant that
/// the walked box stays adjacent to `tgt_box`. The first non-adjacent
/// box found along a branch is the largest separated descendant there
/// and gets added without further descent; an adjacent leaf is near
/// field (already covered by list 1) and contributes nothing.
fn list3_of_target_box<T: Float>(
    tree: &Tree<T>,
    colleagues: &CsrList,
    tgt_box: BoxId,
    stack_capacity: usize,
    children_per_box: usize,
) -> Result<Vec<BoxId>> {
    let mut result = Vec::new();

    let level = tree.level(tgt_box);
    let center = tree.center(tgt_box);

    for &coll in colleagues.get(tgt_box) {
        let mut walker = Walker::new(coll, stack_capacity, children_per_box);
        loop {
            let walk_box = walker.current_box();
            let morton = walker.current_morton();

            if let Some(child) = tree.child(walk_box, morton) {
                if is_adjacent_or_overlapping(tree, &center, level, child) {
                    if tree.flags(child).contains(BoxFlags::HAS_CHILDREN) {
                        walker.descend_into(child)?;
                        continue;
                    }
                } else {
                    result.push(child);
                }
            }

            if !walker.advance() {
                break;
            }
        }
    }

    Ok(result)
}

/// Build list 3 for every `target_box`, keyed by `target_box_number`.
pub fn sep_smaller_nonsiblings<T: Float + Sync>(
    tree: &Tree<T>,
    colleagues: &CsrList,
    target_boxes: &[BoxId],
    stack_capacity: usize,
) -> Result<CsrList> {
    let children_per_box = tree.dimensions.children_per_box();

    let per_target: Vec<Vec<BoxId>> = target_boxes
        .par_iter()
        .map(|&tgt_box| {
            list3_of_target_box(tree, colleagues, tgt_box, stack_capacity, children_per_box)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(super::build_csr(per_target))
}
