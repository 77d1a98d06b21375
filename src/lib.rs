//! Builds the FMM interaction lists — colleagues, list 1 (neighbor
//! sources), list 2 (well-separated siblings), list 3 (separated
//! smaller non-siblings), list 4 (separated bigger non-siblings) — plus
//! the source/target/source-parent box partitions, over an already
//! pruned, already built adaptive box tree (quadtree or octree).
//!
//! Tree construction, particle sorting, and the physics kernels that
//! consume these lists are out of scope; see [`types::tree::Tree`] for
//! the input contract this crate expects to receive.

pub mod builder;
pub mod constants;
pub mod error;
pub mod implementations;
pub mod types;

pub use builder::{FmmTraversalBuilder, TraversalConfig};
pub use error::{Result, TraversalError};
pub use types::dimension::Dimension;
pub use types::flags::BoxFlags;
pub use types::traversal_info::{CsrList, ListName, TraversalInfo};
pub use types::tree::Tree;
