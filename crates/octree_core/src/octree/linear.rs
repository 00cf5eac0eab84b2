//! LinearOctree - nodes stored flat, keyed by [`LocationalCode`].
//!
//! No node owns another. Parent/child relationships are computed on demand
//! from the key (`child = parent << 3 | octant`), and each node keeps an
//! 8-bit mask of which children exist. Splits are sparse: only octants that
//! receive points are materialized, and bounds follow the same midpoint rule
//! as the pointer-based variants, so all three partition space identically.

use std::collections::HashMap;
use std::fmt;

use smallvec::SmallVec;

use super::code::LocationalCode;
use super::traversal::{self, NodeView};
use super::{Aabb3, OctreeConfig};
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::ConfigError;
use crate::index::SpatialIndex;
use crate::stats::OctreeStats;
use crate::types::{NodeBox, Point};

#[derive(Clone, Debug)]
struct LinearNode {
  bounds: Aabb3,
  points: Vec<Point>,
  /// Bit `i` set iff child octant `i` exists.
  child_mask: u8,
}

impl LinearNode {
  fn new(bounds: Aabb3) -> Self {
    Self {
      bounds,
      points: Vec::new(),
      child_mask: 0,
    }
  }
}

/// Octree stored as a hash map of locational codes.
#[derive(Debug)]
pub struct LinearOctree<D = TracingSink> {
  nodes: HashMap<LocationalCode, LinearNode>,
  bounds: Aabb3,
  config: OctreeConfig,
  sink: D,
}

impl LinearOctree<TracingSink> {
  /// Empty tree over `bounds` with the default configuration.
  pub fn new(bounds: Aabb3) -> Self {
    Self::with_sink(bounds, TracingSink)
  }

  pub fn with_config(bounds: Aabb3, config: OctreeConfig) -> Result<Self, ConfigError> {
    Self::with_parts(bounds, config, TracingSink)
  }
}

impl<D: DiagnosticSink> LinearOctree<D> {
  pub const NAME: &'static str = "Morton Octree";

  pub fn with_sink(bounds: Aabb3, sink: D) -> Self {
    let mut nodes = HashMap::new();
    nodes.insert(LocationalCode::ROOT, LinearNode::new(bounds));
    Self {
      nodes,
      bounds,
      config: OctreeConfig::default(),
      sink,
    }
  }

  pub fn with_parts(bounds: Aabb3, config: OctreeConfig, sink: D) -> Result<Self, ConfigError> {
    config.validate()?;
    let mut tree = Self::with_sink(bounds, sink);
    tree.config = config;
    Ok(tree)
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

  pub fn into_sink(self) -> D {
    self.sink
  }

  /// Number of materialized nodes, root included.
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  /// Never true: the root always exists.
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  pub fn contains(&self, code: LocationalCode) -> bool {
    self.nodes.contains_key(&code)
  }

  pub fn root(&self) -> LinearNodeRef<'_> {
    LinearNodeRef {
      nodes: &self.nodes,
      code: LocationalCode::ROOT,
      node: &self.nodes[&LocationalCode::ROOT],
    }
  }

  /// Look up a node by key.
  pub fn node(&self, code: LocationalCode) -> Option<LinearNodeRef<'_>> {
    self.nodes.get(&code).map(|node| LinearNodeRef {
      nodes: &self.nodes,
      code,
      node,
    })
  }

  /// Insert one point; false if it was out of bounds and discarded.
  pub fn insert(&mut self, point: Point) -> bool {
    if !self.bounds.contains_point(point) {
      self.sink.report(Diagnostic::PointOutOfBounds {
        point,
        bounds: self.bounds,
      });
      return false;
    }
    self.insert_from(LocationalCode::ROOT, self.bounds, point);
    true
  }

  /// Insert points in order, returning how many were accepted.
  #[cfg_attr(feature = "profiling", tracing::instrument(skip_all, name = "linear::extend"))]
  pub fn extend<I: IntoIterator<Item = Point>>(&mut self, points: I) -> usize {
    let mut accepted = 0;
    for point in points {
      if self.insert(point) {
        accepted += 1;
      }
    }
    accepted
  }

  /// Descend from `code` (created with `bounds` if absent) to the leaf for
  /// `point` and buffer it there. `point` must lie inside `bounds`.
  fn insert_from(&mut self, mut code: LocationalCode, mut bounds: Aabb3, point: Point) {
    loop {
      let depth = code.depth();
      let node = self
        .nodes
        .entry(code)
        .or_insert_with(|| LinearNode::new(bounds));

      if node.child_mask == 0 {
        node.points.push(point);
        let buffered = node.points.len();
        if buffered > self.config.max_points_per_leaf {
          if self.config.can_subdivide(depth) {
            self.subdivide(code);
          } else if buffered == self.config.max_points_per_leaf + 1 {
            self.sink.report(Diagnostic::DepthLimitReached {
              depth,
              bounds: node.bounds,
            });
          }
        }
        return;
      }

      let octant = node.bounds.octant_of(point);
      node.child_mask |= 1 << octant;
      bounds = node.bounds.octant_bounds(octant);
      code = match code.child(octant) {
        Some(child) => child,
        None => unreachable!("internal node at maximum key depth"),
      };
    }
  }

  fn subdivide(&mut self, code: LocationalCode) {
    let Some(node) = self.nodes.get_mut(&code) else {
      return;
    };
    let pending = std::mem::take(&mut node.points);
    let parent = node.bounds;
    for point in &pending {
      node.child_mask |= 1 << parent.octant_of(*point);
    }

    for point in pending {
      let octant = parent.octant_of(point);
      if let Some(child) = code.child(octant) {
        self.insert_from(child, parent.octant_bounds(octant), point);
      }
    }
  }

  pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
    traversal::points(self.root())
  }

  pub fn collect_points(&self) -> Vec<Point> {
    traversal::collect_points(self.root())
  }

  pub fn node_boxes(&self) -> Vec<NodeBox> {
    traversal::node_boxes(self.root())
  }

  /// Points inside the closed box `[min, max]`.
  #[cfg_attr(feature = "profiling", tracing::instrument(skip_all, name = "linear::range_query"))]
  pub fn range_query(&self, min: Point, max: Point) -> Vec<Point> {
    traversal::range_query(self.root(), &Aabb3::new(min, max))
  }

  pub fn statistics(&self) -> OctreeStats {
    traversal::statistics(self.root())
  }

  pub fn write_structure(&self, out: &mut dyn fmt::Write) -> fmt::Result {
    traversal::write_structure(self.root(), out)
  }
}

// =============================================================================
// LinearNodeRef - NodeView over the flat map
// =============================================================================

/// Borrowed view of one node in a [`LinearOctree`].
///
/// Bounds, points and children are available through [`NodeView`].
#[derive(Clone, Copy, Debug)]
pub struct LinearNodeRef<'a> {
  nodes: &'a HashMap<LocationalCode, LinearNode>,
  code: LocationalCode,
  node: &'a LinearNode,
}

impl<'a> LinearNodeRef<'a> {
  pub fn code(&self) -> LocationalCode {
    self.code
  }

  pub fn depth(&self) -> u32 {
    self.code.depth()
  }

  /// Bit `i` set iff child octant `i` exists.
  pub fn child_mask(&self) -> u8 {
    self.node.child_mask
  }
}

impl<'a> NodeView<'a> for LinearNodeRef<'a> {
  #[inline]
  fn bounds(self) -> Aabb3 {
    self.node.bounds
  }

  #[inline]
  fn points(self) -> &'a [Point] {
    &self.node.points
  }

  fn children(self) -> SmallVec<[(u8, Self); 8]> {
    let nodes = self.nodes;
    (0u8..8)
      .filter(|&octant| self.node.child_mask & (1 << octant) != 0)
      .filter_map(|octant| {
        let code = self.code.child(octant)?;
        let node = nodes.get(&code)?;
        Some((octant, LinearNodeRef { nodes, code, node }))
      })
      .collect()
  }

  #[inline]
  fn is_leaf(self) -> bool {
    self.node.child_mask == 0
  }
}

impl<D: DiagnosticSink> SpatialIndex for LinearOctree<D> {
  fn name(&self) -> &'static str {
    Self::NAME
  }

  fn bounds(&self) -> Aabb3 {
    self.bounds
  }

  fn config(&self) -> &OctreeConfig {
    &self.config
  }

  fn insert(&mut self, point: Point) -> bool {
    LinearOctree::insert(self, point)
  }

  fn collect_points(&self) -> Vec<Point> {
    LinearOctree::collect_points(self)
  }

  fn node_boxes(&self) -> Vec<NodeBox> {
    LinearOctree::node_boxes(self)
  }

  fn range_query(&self, min: Point, max: Point) -> Vec<Point> {
    LinearOctree::range_query(self, min, max)
  }

  fn statistics(&self) -> OctreeStats {
    LinearOctree::statistics(self)
  }

  fn write_structure(&self, out: &mut dyn fmt::Write) -> fmt::Result {
    LinearOctree::write_structure(self, out)
  }
}

#[cfg(test)]
#[path = "linear_test.rs"]
mod linear_test;
