//! S4 — "list 2": well-separated siblings.

use num_traits::Float;
use rayon::prelude::*;

use super::adjacency::is_adjacent_or_overlapping;
use crate::constants::ROOT;
use crate::types::traversal_info::CsrList;
use crate::types::tree::{BoxId, Tree};

/// The children of `box_id`'s parent's colleagues that are not
/// themselves adjacent to `box_id`. A box's true siblings never appear
/// here: the parent is excluded from its own colleague list, so its
/// children (our siblings) are never candidates in the first place.
fn sep_siblings_of_box<T: Float>(
    tree: &Tree<T>,
    colleagues: &CsrList,
    box_id: BoxId,
    children_per_box: usize,
) -> Vec<BoxId> {
    let mut result = Vec::new();

    let parent = match tree.parent(box_id) {
        Some(p) => p,
        None => return result,
    };

    let level = tree.level(box_id);
    let center = tree.center(box_id);

    for &pcoll in colleagues.get(parent) {
        for morton_nr in 0..children_per_box {
            if let Some(child) = tree.child(pcoll, morton_nr) {
                if tree.level(child) == level
                    && !is_adjacent_or_overlapping(tree, &center, level, child)
                {
                    result.push(child);
                }
            }
        }
    }

    result
}

/// Build list 2 for every box in the tree, keyed by `box_id`.
pub fn sep_siblings<T: Float + Sync>(tree: &Tree<T>, colleagues: &CsrList) -> CsrList {
    let children_per_box = tree.dimensions.children_per_box();

    let per_box: Vec<Vec<BoxId>> = (0..tree.nboxes)
        .into_par_iter()
        .map(|box_id| sep_siblings_of_box(tree, colleagues, box_id, children_per_box))
        .collect();

    super::build_csr(per_box)
}
