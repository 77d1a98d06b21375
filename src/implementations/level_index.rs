//! S1 — level-start index extraction.

use itertools::Itertools;

use crate::types::tree::{BoxId, Tree};

/// Given a box list `L` sorted by level (as S0's partitions are),
/// produce `level_start[l]`: the index into `L` where level `l` begins,
/// with `level_start[nlevels] == L.len()`.
///
/// For each adjacent pair in `L`, probe whether the tree's level-start boundary
/// for `level(L[i])` falls strictly between `L[i-1]` and `L[i]`
/// (inclusive on the right); then collapse unoccupied levels to the
/// next non-empty start by scanning from the deepest level up.
pub fn extract_level_start_box_nrs<T>(tree: &Tree<T>, box_list: &[BoxId]) -> Vec<BoxId> {
    let nlevels = tree.nlevels;

    if box_list.is_empty() {
        return vec![0; nlevels + 1];
    }

    let mut result = vec![box_list.len(); nlevels + 1];

    for (i, (&prev_box_id, &my_box_id)) in box_list.iter().tuple_windows().enumerate() {
        let my_level = tree.box_levels[my_box_id] as usize;
        let my_level_start = tree.level_start_box_nrs[my_level];

        if prev_box_id < my_level_start && my_level_start <= my_box_id {
            result[my_level] = i + 1;
        }
    }

    result[0] = 0;

    let mut prev_start = box_list.len();
    for ilev in (0..nlevels).rev() {
        prev_start = result[ilev].min(prev_start);
        result[ilev] = prev_start;
    }

    result
}
