//! Core value types shared by every storage strategy.

use crate::octree::Aabb3;

/// A point in 3D space.
///
/// Plain value type: no identity beyond its coordinates, and duplicates are
/// allowed.
pub type Point = glam::Vec3;

/// Bounding box of one tree node, tagged with the node's depth.
///
/// Produced by the pre-order box walk for export. The root is depth 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeBox {
  /// Region covered by the node.
  pub bounds: Aabb3,
  /// Distance from the root (root = 0).
  pub depth: u32,
}

impl NodeBox {
  pub fn new(bounds: Aabb3, depth: u32) -> Self {
    Self { bounds, depth }
  }
}
