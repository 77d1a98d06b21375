//! Top-level pipeline orchestration: S0 through S6 in sequence.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use num_traits::Float;

use crate::constants::DEFAULT_STACK_BLOCK;
use crate::error::{Result, TraversalError};
use crate::implementations::{classify, colleagues, level_index, list1, list2, list3, list4};
use crate::types::traversal_info::TraversalInfo;
use crate::types::tree::Tree;

/// Tunables for a traversal build.
#[derive(Debug, Clone, Copy)]
pub struct TraversalConfig {
    /// Emit per-stage `log::debug!` summaries in addition to the
    /// `log::info!` stage-boundary lines that are always emitted.
    pub debug: bool,
    /// The walk stack is sized to `div_ceil(nlevels, stack_block) *
    /// stack_block`. Smaller values give a tighter bound; `1` allocates
    /// exactly `nlevels`.
    pub stack_block: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        TraversalConfig {
            debug: false,
            stack_block: DEFAULT_STACK_BLOCK,
        }
    }
}

/// Builds a [`TraversalInfo`] from a pruned [`Tree`], running stages S0
/// through S6 in sequence.
pub struct FmmTraversalBuilder {
    config: TraversalConfig,
}

impl FmmTraversalBuilder {
    /// Create a builder with the given configuration.
    pub fn new(config: TraversalConfig) -> Self {
        FmmTraversalBuilder { config }
    }

    fn stack_capacity(&self, nlevels: usize) -> usize {
        let block = self.config.stack_block.max(1);
        nlevels.div_ceil(block) * block
    }

    fn check_cancelled(cancel: Option<&AtomicBool>) -> Result<()> {
        if cancel.map(|c| c.load(Ordering::Relaxed)).unwrap_or(false) {
            return Err(TraversalError::CancelledByCaller);
        }
        Ok(())
    }

    /// Build the full interaction-list set for `tree`.
    ///
    /// `cancel`, when provided, is checked at every stage boundary; the
    /// build aborts with [`TraversalError::CancelledByCaller`] as soon
    /// as it's observed set, with no partial `TraversalInfo` ever
    /// returned.
    pub fn build<T: Float + Sync + Send>(
        &self,
        tree: Arc<Tree<T>>,
        cancel: Option<&AtomicBool>,
    ) -> Result<TraversalInfo<T>> {
        if !tree.is_pruned {
            return Err(TraversalError::TreeNotPruned);
        }
        Self::check_cancelled(cancel)?;

        let stack_capacity = self.stack_capacity(tree.nlevels);

        log::info!("S0: classifying {} boxes", tree.nboxes);
        let classification = classify::classify(&tree);
        if self.config.debug {
            log::debug!(
                "S0: {} source boxes, {} target boxes, {} source-parent boxes",
                classification.source_boxes.len(),
                classification.target_boxes.len(),
                classification.source_parent_boxes.len()
            );
        }
        Self::check_cancelled(cancel)?;

        log::info!("S1: extracting level-start indices");
        let level_start_source_parent_box_nrs =
            level_index::extract_level_start_box_nrs(&tree, &classification.source_parent_boxes);
        Self::check_cancelled(cancel)?;

        log::info!("S2: building colleagues over {} boxes", tree.nboxes);
        let colleagues = colleagues::colleagues(&tree, stack_capacity)?;
        if self.config.debug {
            log::debug!(
                "S2: {} colleague entries across {} boxes",
                colleagues.lists.len(),
                colleagues.nkeys()
            );
        }
        Self::check_cancelled(cancel)?;

        log::info!(
            "S3: building list 1 over {} target boxes",
            classification.target_boxes.len()
        );
        let neighbor_source_boxes =
            list1::neighbor_source_boxes(&tree, &classification.target_boxes, stack_capacity)?;
        Self::check_cancelled(cancel)?;

        log::info!("S4: building list 2 over {} boxes", tree.nboxes);
        let sep_siblings = list2::sep_siblings(&tree, &colleagues);
        Self::check_cancelled(cancel)?;

        log::info!(
            "S5: building list 3 over {} target boxes",
            classification.target_boxes.len()
        );
        let sep_smaller_nonsiblings = list3::sep_smaller_nonsiblings(
            &tree,
            &colleagues,
            &classification.target_boxes,
            stack_capacity,
        )?;
        Self::check_cancelled(cancel)?;

        log::info!("S6: building list 4 over {} boxes", tree.nboxes);
        let sep_bigger_nonsiblings = list4::sep_bigger_nonsiblings(&tree, &colleagues);

        Ok(TraversalInfo {
            tree,
            source_boxes: classification.source_boxes,
            target_boxes: classification.target_boxes,
            source_parent_boxes: classification.source_parent_boxes,
            level_start_source_parent_box_nrs,
            colleagues,
            neighbor_source_boxes,
            sep_siblings,
            sep_smaller_nonsiblings,
            sep_bigger_nonsiblings,
        })
    }
}
