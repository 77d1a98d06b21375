//! S6 — "list 4": separated bigger non-siblings.

use num_traits::Float;
use rayon::prelude::*;

use super::adjacency::is_adjacent_or_overlapping;
use crate::types::flags::BoxFlags;
use crate::types::traversal_info::CsrList;
use crate::types::tree::{BoxId, Tree};

/// The dual of list 3: walk `box_id`'s ancestor chain from the parent
/// upward. At each ancestor, its colleagues are boxes one size class
/// bigger than the ancestor. A colleague only qualifies if it is
/// separated from `box_id` itself *and* adjacent to `box_id`'s
/// immediate parent — the latter check is the minimality guard.
/// Adjacency only grows as the examined box gets coarser, so checking
/// it against the parent alone (rather than re-checking every ancestor
/// strictly between `box_id` and the current one) already guarantees it
/// holds for all of them: without the guard, a colleague that only
/// becomes "newly separated" several ancestor levels up would be
/// emitted redundantly at every coarser level past that point, instead
/// of exactly once at the finest level where the separation first
/// holds.
fn list4_of_box<T: Float>(tree: &Tree<T>, colleagues: &CsrList, box_id: BoxId) -> Vec<BoxId> {
    let mut result = Vec::new();

    let parent_of_box = match tree.parent(box_id) {
        Some(p) => p,
        None => return result,
    };

    let level = tree.level(box_id);
    let center = tree.center(box_id);
    let parent_center = tree.center(parent_of_box);
    let parent_level = tree.level(parent_of_box);

    let mut ancestor = Some(parent_of_box);

    while let Some(anc) = ancestor {
        if tree.level(anc) == 0 {
            break;
        }

        for &coll in colleagues.get(anc) {
            let separated_from_box = !is_adjacent_or_overlapping(tree, &center, level, coll);
            let adjacent_to_parent =
                is_adjacent_or_overlapping(tree, &parent_center, parent_level, coll);

            if separated_from_box
                && adjacent_to_parent
                && tree.flags(coll).contains(BoxFlags::HAS_OWN_SOURCES)
            {
                result.push(coll);
            }
        }

        ancestor = tree.parent(anc);
    }

    result
}

/// Build list 4 for every box in the tree, keyed by `box_id`.
pub fn sep_bigger_nonsiblings<T: Float + Sync>(tree: &Tree<T>, colleagues: &CsrList) -> CsrList {
    let per_box: Vec<Vec<BoxId>> = (0..tree.nboxes)
        .into_par_iter()
        .map(|box_id| list4_of_box(tree, colleagues, box_id))
        .collect();

    super::build_csr(per_box)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::implementations::colleagues::colleagues;
    use crate::types::dimension::Dimension;
    use crate::types::flags::BoxFlags;

    /// Same adaptive tree as list 3's test: root + 4 level-1 leaves
    /// except box 2, refined into 4 level-2 leaves (5-8).
    fn partially_refined_tree() -> Tree<f64> {
        const OFFSETS: [(f64, f64); 4] = [(-1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)];
        let nboxes = 9;
        let mut box_centers = vec![0.0f64; 2 * nboxes];
        let mut child_ids = vec![0usize; 4 * nboxes];

        for (m, &(dx, dy)) in OFFSETS.iter().enumerate() {
            let level1_box = 1 + m;
            box_centers[level1_box] = dx * 0.25;
            box_centers[nboxes + level1_box] = dy * 0.25;
            child_ids[m * nboxes] = level1_box;
        }

        for (k, &(ddx, ddy)) in OFFSETS.iter().enumerate() {
            let level2_box = 5 + k;
            box_centers[level2_box] = box_centers[2] + ddx * 0.125;
            box_centers[nboxes + level2_box] = box_centers[nboxes + 2] + ddy * 0.125;
            child_ids[k * nboxes + 2] = level2_box;
        }

        let mut box_levels = vec![0u8; nboxes];
        for b in 1..=4 {
            box_levels[b] = 1;
        }
        for b in 5..=8 {
            box_levels[b] = 2;
        }

        let mut box_parent_ids = vec![0usize; nboxes];
        for b in 5..=8 {
            box_parent_ids[b] = 2;
        }

        let mut box_flags = vec![BoxFlags::empty(); nboxes];
        let parent_flags =
            BoxFlags::HAS_CHILDREN | BoxFlags::HAS_CHILD_SOURCES | BoxFlags::HAS_CHILD_TARGETS;
        box_flags[0] = parent_flags;
        box_flags[2] = parent_flags;
        for &b in &[1usize, 3, 4, 5, 6, 7, 8] {
            box_flags[b] = BoxFlags::HAS_OWN_SOURCES | BoxFlags::HAS_OWN_TARGETS;
        }

        Tree {
            dimensions: Dimension::Two,
            nboxes,
            nlevels: 3,
            root_extent: 1.0,
            box_centers,
            aligned_nboxes: nboxes,
            box_levels,
            box_parent_ids,
            box_child_ids: child_ids,
            level_start_box_nrs: vec![0, 1, 5, 9],
            box_flags,
            sources_are_targets: false,
            is_pruned: true,
        }
    }

    #[test]
    fn root_and_shallow_boxes_have_no_bigger_boxes_above_them() {
        let tree = partially_refined_tree();
        let colls = colleagues(&tree, 10).unwrap();
        let list4 = sep_bigger_nonsiblings(&tree, &colls);
        assert!(list4.get(0).is_empty());
        assert!(list4.get(1).is_empty());
    }

    /// Reciprocal of list 3's test: box 1 found boxes 6 and 8 in its
    /// list 3, so boxes 6 and 8 should each find box 1 in their list 4.
    /// Box 5, sitting in the near corner instead, finds boxes 3 and 4.
    #[test]
    fn refined_leaf_finds_its_bigger_separated_colleagues() {
        let tree = partially_refined_tree();
        let colls = colleagues(&tree, 10).unwrap();
        let list4 = sep_bigger_nonsiblings(&tree, &colls);

        assert_eq!(list4.get(5), &[3, 4]);
        assert!(list4.get(6).contains(&1));
        assert!(list4.get(8).contains(&1));
    }
}
