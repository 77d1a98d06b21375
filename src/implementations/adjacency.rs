//! The adjacency-or-overlap predicate.

use num_traits::Float;

use crate::types::tree::Tree;

/// `true` iff boxes `a` and `b` are adjacent or overlapping:
///
/// ```text
/// max_i |c_a[i] - c_b[i]|  <=  0.5*(size(level_a) + size(level_b)) + 0.5*size(max(level_a, level_b))
/// ```
///
/// Symmetric, includes `a == b`, computed in the tree's native
/// coordinate type with the L∞ metric and no tolerance knob.
pub fn is_adjacent_or_overlapping<T: Float>(
    tree: &Tree<T>,
    center_a: &[T],
    level_a: u8,
    box_b: crate::types::tree::BoxId,
) -> bool {
    let center_b = tree.center(box_b);
    let level_b = tree.level(box_b);

    let two = T::one() + T::one();
    let size_sum = (tree.size_at_level(level_a) + tree.size_at_level(level_b)) / two;
    let slack = size_sum + tree.size_at_level(level_a.max(level_b)) / two;

    let mut max_dist = T::zero();
    for (&a, &b) in center_a.iter().zip(center_b.iter()) {
        max_dist = max_dist.max((a - b).abs());
    }

    max_dist <= slack
}
