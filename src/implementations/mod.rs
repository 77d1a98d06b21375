//! Stage implementations, one module per pipeline stage.

pub mod adjacency;
pub mod classify;
pub mod colleagues;
pub mod level_index;
pub mod list1;
pub mod list2;
pub mod list3;
pub mod list4;
mod walk;

use crate::types::traversal_info::CsrList;
use crate::types::tree::BoxId;

/// Merge per-key scratch lists into a single compressed-sparse `CsrList`.
///
/// This is the "thread-local scratch then merge" variant: an
/// alternative to a count-then-write two-pass scheme where each key's
/// entries are already built independently (in parallel, by
/// the caller), and merging them is a single sequential prefix-sum plus
/// a flatten — no locks, and per-key order is exactly whatever order
/// the caller produced.
pub(crate) fn build_csr(per_key: Vec<Vec<BoxId>>) -> CsrList {
    let mut starts = Vec::with_capacity(per_key.len() + 1);
    let mut lists = Vec::new();
    starts.push(0);
    for mut entries in per_key {
        lists.append(&mut entries);
        starts.push(lists.len());
    }
    CsrList::new(starts, lists)
}
