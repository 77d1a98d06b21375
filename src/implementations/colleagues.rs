//! S2 — colleagues.

use num_traits::Float;
use rayon::prelude::*;

use super::adjacency::is_adjacent_or_overlapping;
use super::walk::Walker;
use crate::constants::ROOT;
use crate::error::Result;
use crate::types::traversal_info::CsrList;
use crate::types::tree::{BoxId, Tree};

/// Colleagues of `box_id`: all distinct same-level boxes
/// adjacent-or-overlapping to it, found by descending from the root
/// into adjacent parents. The root has no colleagues.
fn colleagues_of_box<T: Float>(
    tree: &Tree<T>,
    box_id: BoxId,
    stack_capacity: usize,
    children_per_box: usize,
) -> Result<Vec<BoxId>> {
    let mut result = Vec::new();

    if box_id == ROOT {
        return Ok(result);
    }

    let level = tree.level(box_id);
    let center = tree.center(box_id);

    let mut walker = Walker::new(ROOT, stack_capacity, children_per_box);
    loop {
        let walk_box = walker.current_box();
        let morton = walker.current_morton();

        if let Some(child) = tree.child(walk_box, morton) {
            if is_adjacent_or_overlapping(tree, &center, level, child) {
                if tree.level(child) == level && child != box_id {
                    result.push(child);
                } else {
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

/// Build the colleagues list for every box in the tree.
pub fn colleagues<T: Float + Sync>(tree: &Tree<T>, stack_capacity: usize) -> Result<CsrList> {
    let children_per_box = tree.dimensions.children_per_box();

    let per_box: Vec<Vec<BoxId>> = (0..tree.nboxes)
        .into_par_iter()
        .map(|box_id| colleagues_of_box(tree, box_id, stack_capacity, children_per_box))
        .collect::<Result<Vec<_>>>()?;

    Ok(super::build_csr(per_box))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::dimension::Dimension;
    use crate::types::flags::BoxFlags;

    /// 3x3 uniform grid of level-1 boxes under a root, quadtree-style
    /// but laid out as a flat 3x3 for simplicity of hand-construction:
    /// instead we build the canonical T3 case (octree depth 1, 8 leaves)
    /// to keep centers trivial to reason about in 3D.
    fn octree_depth1() -> Tree<f64> {
        // Root at level 0, 8 children at level 1, centered at the 8
        // octants of a unit cube (extent 1 root, extent 0.5 children).
        let mut box_centers = vec![0.0; 3 * 9]; // axis-major, 9 boxes
        let offsets = [-0.25, 0.25];
        let mut child = 1;
        let mut child_ids = vec![0usize; 8 * 9];
        for (m, (dz, dy, dx)) in offsets
            .iter()
            .flat_map(|&z| offsets.iter().flat_map(move |&y| offsets.iter().map(move |&x| (z, y, x))))
            .enumerate()
        {
            box_centers[0 * 9 + child] = dx;
            box_centers[1 * 9 + child] = dy;
            box_centers[2 * 9 + child] = dz;
            child_ids[m * 9 + 0] = child;
            child += 1;
        }

        Tree {
            dimensions: Dimension::Three,
            nboxes: 9,
            nlevels: 2,
            root_extent: 1.0,
            box_centers,
            aligned_nboxes: 9,
            box_levels: {
                let mut levels = vec![1u8; 9];
                levels[0] = 0;
                levels
            },
            box_parent_ids: vec![0; 9],
            box_child_ids: child_ids,
            level_start_box_nrs: vec![0, 1, 9],
            box_flags: {
                let mut flags = vec![BoxFlags::HAS_OWN_SOURCES | BoxFlags::HAS_OWN_TARGETS; 9];
                flags[0] = BoxFlags::HAS_CHILDREN | BoxFlags::HAS_CHILD_SOURCES | BoxFlags::HAS_CHILD_TARGETS;
                flags
            },
            sources_are_targets: false,
            is_pruned: true,
        }
    }

    #[test]
    fn root_has_no_colleagues() {
        let tree = octree_depth1();
        let colls = colleagues(&tree, 10).unwrap();
        assert!(colls.get(0).is_empty());
    }

    #[test]
    fn every_leaf_has_seven_colleagues() {
        let tree = octree_depth1();
        let colls = colleagues(&tree, 10).unwrap();
        for box_id in 1..9 {
            assert_eq!(colls.get(box_id).len(), 7, "box {box_id}");
            assert!(!colls.get(box_id).contains(&box_id));
        }
    }

    #[test]
    fn colleagues_are_symmetric() {
        let tree = octree_depth1();
        let colls = colleagues(&tree, 10).unwrap();
        for a in 0..tree.nboxes {
            for &b in colls.get(a) {
                assert!(colls.get(b).contains(&a), "{a} -> {b} not symmetric");
            }
        }
    }
}
