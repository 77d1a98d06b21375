//! The explicit-stack top-down descent shared by colleagues (S2), list 1
//! (S3) and list 3 (S5).

use crate::error::TraversalError;
use crate::types::tree::{BoxId, MortonNr};

/// A single level's worth of resumable walk state.
#[derive(Debug, Clone, Copy)]
struct Frame {
    box_id: BoxId,
    morton_nr: MortonNr,
}

/// Depth-bounded explicit stack for a top-down box-tree descent.
///
/// Starts positioned at `(start_box, 0)`. Callers inspect
/// `current_box()`/`current_morton()`, call [`Walker::descend_into`] to
/// push the current state and move into a child, or
/// [`Walker::advance`] to move to the next morton number (popping as
/// needed). The walk is finished once `advance` returns `false`.
pub struct Walker {
    stack: Vec<Frame>,
    capacity: usize,
    children_per_box: usize,
    current: Frame,
}

impl Walker {
    /// Start a new walk at `start_box`, with a stack preallocated to
    /// `capacity` frames (sized to the tree's true `nlevels`, padded by
    /// the builder's `TraversalConfig`).
    pub fn new(start_box: BoxId, capacity: usize, children_per_box: usize) -> Self {
        Walker {
            stack: Vec::with_capacity(capacity),
            capacity,
            children_per_box,
            current: Frame {
                box_id: start_box,
                morton_nr: 0,
            },
        }
    }

    /// The box currently being examined.
    pub fn current_box(&self) -> BoxId {
        self.current.box_id
    }

    /// The morton number currently being examined.
    pub fn current_morton(&self) -> MortonNr {
        self.current.morton_nr
    }

    /// How many levels deep the walk currently is (0 at the start box).
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push the current state and move into `child`, at morton 0.
    pub fn descend_into(&mut self, child: BoxId) -> Result<(), TraversalError> {
        if self.stack.len() >= self.capacity {
            return Err(TraversalError::LevelStackOverflow {
                box_id: child,
                allocated: self.capacity,
            });
        }
        self.stack.push(self.current);
        self.current = Frame {
            box_id: child,
            morton_nr: 0,
        };
        Ok(())
    }

    /// Advance to the next morton number, popping frames as needed.
    /// Returns `false` once the walk has exhausted the root.
    pub fn advance(&mut self) -> bool {
        loop {
            self.current.morton_nr += 1;
            if self.current.morton_nr < self.children_per_box {
                return true;
            }
            match self.stack.pop() {
                Some(frame) => self.current = frame,
                None => return false,
            }
        }
    }
}
