//! Octree engine over 3D points with interchangeable child storage.
//!
//! A tree starts as a single leaf covering the caller's bounds. Points are
//! buffered in leaves; a leaf that overflows the configured threshold splits
//! into octants and pushes its buffer down. Subdivision is driven by
//! insertion order, so the resulting shape is not order-invariant.
//!
//! # Octant Convention
//!
//! ```text
//! bit 0: x > center.x     bit 1: y > center.y     bit 2: z > center.z
//! ```
//!
//! Comparisons are strict: a point on a midplane goes to the lower half.
//!
//! # Module Structure
//!
//! - [`bounds`]: `Aabb3` - containment, overlap and octant math
//! - [`config`]: `OctreeConfig` - overflow threshold and depth limit
//! - [`node`]: `OctreeNode<S>` - recursive node, generic insert/subdivide
//! - [`storage`]: `ArrayChildren` (8 fixed slots) and `MapChildren` (sparse map)
//! - [`tree`]: `Octree<S, D>` - owning wrapper with diagnostics
//! - [`code`]: `LocationalCode` - 64-bit Morton-style node keys
//! - [`linear`]: `LinearOctree` - flat map of locational codes
//! - [`traversal`]: pre-order walks shared by every variant

pub mod bounds;
pub mod code;
pub mod config;
pub mod linear;
pub mod node;
pub mod storage;
pub mod traversal;
pub mod tree;

// Re-exports
pub use bounds::Aabb3;
pub use code::LocationalCode;
pub use config::OctreeConfig;
pub use linear::{LinearNodeRef, LinearOctree};
pub use node::OctreeNode;
pub use storage::{ArrayChildren, ChildStorage, MapChildren};
pub use traversal::{NodeView, Preorder};
pub use tree::{ArrayOctree, MapOctree, Octree};

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
