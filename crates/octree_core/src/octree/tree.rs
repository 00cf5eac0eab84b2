//! Octree - owning wrapper around a root [`OctreeNode`].
//!
//! Holds the root, the shared configuration and the diagnostic sink, and
//! exposes the traversal functions as methods.

use std::fmt;

use super::traversal;
use super::{Aabb3, ArrayChildren, ChildStorage, MapChildren, OctreeConfig, OctreeNode};
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::ConfigError;
use crate::index::SpatialIndex;
use crate::stats::OctreeStats;
use crate::types::{NodeBox, Point};

/// Octree with fixed 8-slot children (eager split).
pub type ArrayOctree<D = TracingSink> = Octree<ArrayChildren, D>;

/// Octree with sparse map children (split creates occupied octants only).
pub type MapOctree<D = TracingSink> = Octree<MapChildren, D>;

/// Pointer-based octree, generic over child storage and diagnostic sink.
#[derive(Debug)]
pub struct Octree<S, D = TracingSink> {
  root: OctreeNode<S>,
  config: OctreeConfig,
  sink: D,
}

impl<S: ChildStorage> Octree<S, TracingSink> {
  /// Empty tree over `bounds` with the default configuration.
  pub fn new(bounds: Aabb3) -> Self {
    Self {
      root: OctreeNode::new(bounds),
      config: OctreeConfig::default(),
      sink: TracingSink,
    }
  }

  pub fn with_config(bounds: Aabb3, config: OctreeConfig) -> Result<Self, ConfigError> {
    Self::with_parts(bounds, config, TracingSink)
  }
}

impl<S: ChildStorage, D: DiagnosticSink> Octree<S, D> {
  /// Empty tree reporting to `sink`, default configuration.
  pub fn with_sink(bounds: Aabb3, sink: D) -> Self {
    Self {
      root: OctreeNode::new(bounds),
      config: OctreeConfig::default(),
      sink,
    }
  }

  pub fn with_parts(bounds: Aabb3, config: OctreeConfig, sink: D) -> Result<Self, ConfigError> {
    config.validate()?;
    Ok(Self {
      root: OctreeNode::new(bounds),
      config,
      sink,
    })
  }

  #[inline]
  pub fn root(&self) -> &OctreeNode<S> {
    &self.root
  }

  #[inline]
  pub fn config(&self) -> &OctreeConfig {
    &self.config
  }

  #[inline]
  pub fn sink(&self) -> &D {
    &self.sink
  }

  pub fn sink_mut(&mut self) -> &mut D {
    &mut self.sink
  }

  /// Consume the tree, returning its sink.
  pub fn into_sink(self) -> D {
    self.sink
  }

  /// Insert one point; false if it was out of bounds and discarded.
  pub fn insert(&mut self, point: Point) -> bool {
    self.root.insert(point, &self.config, &mut self.sink)
  }

  /// Insert points in order, returning how many were accepted.
  #[cfg_attr(feature = "profiling", tracing::instrument(skip_all, name = "octree::extend"))]
  pub fn extend<I: IntoIterator<Item = Point>>(&mut self, points: I) -> usize {
    let mut accepted = 0;
    for point in points {
      if self.insert(point) {
        accepted += 1;
      }
    }
    accepted
  }

  /// Lazy pre-order iterator over stored points.
  pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
    traversal::points(&self.root)
  }

  pub fn collect_points(&self) -> Vec<Point> {
    traversal::collect_points(&self.root)
  }

  pub fn node_boxes(&self) -> Vec<NodeBox> {
    traversal::node_boxes(&self.root)
  }

  /// Points inside the closed box `[min, max]`.
  #[cfg_attr(feature = "profiling", tracing::instrument(skip_all, name = "octree::range_query"))]
  pub fn range_query(&self, min: Point, max: Point) -> Vec<Point> {
    traversal::range_query(&self.root, &Aabb3::new(min, max))
  }

  pub fn statistics(&self) -> OctreeStats {
    traversal::statistics(&self.root)
  }

  pub fn write_structure(&self, out: &mut dyn fmt::Write) -> fmt::Result {
    traversal::write_structure(&self.root, out)
  }
}

impl<S: ChildStorage, D: DiagnosticSink> SpatialIndex for Octree<S, D> {
  fn name(&self) -> &'static str {
    S::NAME
  }

  fn bounds(&self) -> Aabb3 {
    *self.root.bounds()
  }

  fn config(&self) -> &OctreeConfig {
    &self.config
  }

  fn insert(&mut self, point: Point) -> bool {
    Octree::insert(self, point)
  }

  fn collect_points(&self) -> Vec<Point> {
    Octree::collect_points(self)
  }

  fn node_boxes(&self) -> Vec<NodeBox> {
    Octree::node_boxes(self)
  }

  fn range_query(&self, min: Point, max: Point) -> Vec<Point> {
    Octree::range_query(self, min, max)
  }

  fn statistics(&self) -> OctreeStats {
    Octree::statistics(self)
  }

  fn write_structure(&self, out: &mut dyn fmt::Write) -> fmt::Result {
    Octree::write_structure(self, out)
  }
}
