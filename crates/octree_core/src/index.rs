//! SpatialIndex - uniform facade over every storage strategy.
//!
//! The benchmark driver picks a strategy at runtime and works through
//! `Box<dyn SpatialIndex>`; generic code can use the concrete trees directly.

use std::fmt;

use crate::octree::{Aabb3, OctreeConfig};
use crate::stats::OctreeStats;
use crate::types::{NodeBox, Point};

/// Operations every octree variant provides with identical semantics.
pub trait SpatialIndex {
  /// Label used in summaries and exports.
  fn name(&self) -> &'static str;

  /// Root bounds.
  fn bounds(&self) -> Aabb3;

  fn config(&self) -> &OctreeConfig;

  /// Insert one point. Returns false if the point was outside the tree and
  /// has been discarded (a diagnostic is reported).
  fn insert(&mut self, point: Point) -> bool;

  /// Insert points in order. Returns how many were accepted.
  fn insert_all(&mut self, points: &[Point]) -> usize {
    points.iter().filter(|point| self.insert(**point)).count()
  }

  /// Every stored point in pre-order.
  fn collect_points(&self) -> Vec<Point>;

  /// `(bounds, depth)` of every node in pre-order.
  fn node_boxes(&self) -> Vec<NodeBox>;

  /// Points inside the closed box `[min, max]`.
  fn range_query(&self, min: Point, max: Point) -> Vec<Point>;

  fn statistics(&self) -> OctreeStats;

  /// Indented dump of every node.
  fn write_structure(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}
