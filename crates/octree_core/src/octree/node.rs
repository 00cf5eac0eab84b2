//! OctreeNode - recursive node generic over its child storage.
//!
//! A node owns its bounds, a buffer of points not yet pushed into children,
//! and a [`ChildStorage`]. A node is a leaf iff it has no live children,
//! whatever its buffer holds. Insertion only ever buffers in leaves; a leaf
//! whose buffer overflows [`OctreeConfig::max_points_per_leaf`] splits and
//! redistributes its buffer through the normal insert path.

use super::{Aabb3, ChildStorage, OctreeConfig};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::types::Point;

/// Octree node. Exclusively owned by its parent, or by the caller for the root.
#[derive(Debug)]
pub struct OctreeNode<S> {
  bounds: Aabb3,
  points: Vec<Point>,
  children: S,
}

impl<S: ChildStorage> OctreeNode<S> {
  /// Create an empty leaf covering `bounds`.
  pub fn new(bounds: Aabb3) -> Self {
    Self {
      bounds,
      points: Vec::new(),
      children: S::default(),
    }
  }

  #[inline]
  pub fn bounds(&self) -> &Aabb3 {
    &self.bounds
  }

  /// Points buffered in this node (empty for internal nodes).
  #[inline]
  pub fn points(&self) -> &[Point] {
    &self.points
  }

  #[inline]
  pub fn children(&self) -> &S {
    &self.children
  }

  #[inline]
  pub fn child(&self, octant: u8) -> Option<&OctreeNode<S>> {
    self.children.get(octant)
  }

  #[inline]
  pub fn is_leaf(&self) -> bool {
    self.children.is_empty()
  }

  /// Octant of `point` within this node.
  #[inline]
  pub fn octant_of(&self, point: Point) -> u8 {
    self.bounds.octant_of(point)
  }

  /// Insert `point` into the subtree rooted here, treating this node as
  /// depth 0.
  ///
  /// Returns false, and reports [`Diagnostic::PointOutOfBounds`], if the
  /// point lies outside this node. The point is discarded in that case.
  pub fn insert(
    &mut self,
    point: Point,
    config: &OctreeConfig,
    sink: &mut dyn DiagnosticSink,
  ) -> bool {
    self.insert_at(point, 0, config, sink)
  }

  pub(crate) fn insert_at(
    &mut self,
    point: Point,
    depth: u32,
    config: &OctreeConfig,
    sink: &mut dyn DiagnosticSink,
  ) -> bool {
    if !self.bounds.contains_point(point) {
      sink.report(Diagnostic::PointOutOfBounds {
        point,
        bounds: self.bounds,
      });
      return false;
    }

    if self.is_leaf() {
      self.points.push(point);
      if self.points.len() > config.max_points_per_leaf {
        if config.can_subdivide(depth) {
          self.subdivide(depth, config, sink);
        } else if self.points.len() == config.max_points_per_leaf + 1 {
          sink.report(Diagnostic::DepthLimitReached {
            depth,
            bounds: self.bounds,
          });
        }
      }
      return true;
    }

    let octant = self.bounds.octant_of(point);
    self
      .children
      .get_or_create(octant, &self.bounds)
      .insert_at(point, depth + 1, config, sink)
  }

  /// Turn this leaf into an internal node and push its buffer down.
  fn subdivide(&mut self, depth: u32, config: &OctreeConfig, sink: &mut dyn DiagnosticSink) {
    let pending = std::mem::take(&mut self.points);
    self.children.prepare_split(&self.bounds, &pending);

    // Buffer order is kept so every storage sees the same insertion sequence.
    for point in pending {
      let octant = self.bounds.octant_of(point);
      self
        .children
        .get_or_create(octant, &self.bounds)
        .insert_at(point, depth + 1, config, sink);
    }
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
