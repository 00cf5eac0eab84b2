//! Read-only walks shared by every storage strategy.
//!
//! Traversals are written once against [`NodeView`], a cheap copyable handle
//! onto a node. Pointer nodes (`&OctreeNode<S>`) and linear nodes
//! ([`LinearNodeRef`](super::linear::LinearNodeRef)) both implement it, so
//! point collection, box collection, range queries and statistics behave
//! identically across variants.
//!
//! All walks are pre-order with children in ascending octant order.

use std::fmt;
use std::marker::PhantomData;

use smallvec::SmallVec;

use super::{Aabb3, ChildStorage, OctreeNode};
use crate::stats::OctreeStats;
use crate::types::{NodeBox, Point};

/// Read-only handle onto one tree node.
pub trait NodeView<'a>: Copy + 'a {
  fn bounds(self) -> Aabb3;

  /// Points buffered in this node.
  fn points(self) -> &'a [Point];

  /// Live children with their octants, ascending by octant.
  fn children(self) -> SmallVec<[(u8, Self); 8]>;

  fn is_leaf(self) -> bool {
    self.children().is_empty()
  }
}

impl<'a, S: ChildStorage> NodeView<'a> for &'a OctreeNode<S> {
  #[inline]
  fn bounds(self) -> Aabb3 {
    *OctreeNode::bounds(self)
  }

  #[inline]
  fn points(self) -> &'a [Point] {
    OctreeNode::points(self)
  }

  #[inline]
  fn children(self) -> SmallVec<[(u8, Self); 8]> {
    OctreeNode::children(self).iter().collect()
  }

  #[inline]
  fn is_leaf(self) -> bool {
    OctreeNode::is_leaf(self)
  }
}

// =============================================================================
// Preorder - lazy depth-first walk
// =============================================================================

/// Lazy pre-order iterator yielding `(depth, node)`, root at depth 0.
///
/// With a region set, subtrees whose bounds do not overlap the region
/// (closed-interval test) are skipped entirely.
#[derive(Debug)]
pub struct Preorder<'a, V> {
  stack: Vec<(u32, V)>,
  region: Option<Aabb3>,
  _marker: PhantomData<&'a ()>,
}

impl<'a, V: NodeView<'a>> Preorder<'a, V> {
  /// Visit every node.
  pub fn new(root: V) -> Self {
    Self {
      stack: vec![(0, root)],
      region: None,
      _marker: PhantomData,
    }
  }

  /// Visit only nodes whose bounds overlap `region`.
  pub fn within(root: V, region: Aabb3) -> Self {
    let stack = if root.bounds().overlaps(&region) {
      vec![(0, root)]
    } else {
      Vec::new()
    };
    Self {
      stack,
      region: Some(region),
      _marker: PhantomData,
    }
  }
}

impl<'a, V: NodeView<'a>> Iterator for Preorder<'a, V> {
  type Item = (u32, V);

  fn next(&mut self) -> Option<Self::Item> {
    let (depth, node) = self.stack.pop()?;
    // Reversed so the lowest octant is popped first.
    for (_, child) in node.children().into_iter().rev() {
      let keep = self
        .region
        .map_or(true, |region| child.bounds().overlaps(&region));
      if keep {
        self.stack.push((depth + 1, child));
      }
    }
    Some((depth, node))
  }
}

// =============================================================================
// Aggregations
// =============================================================================

/// Every buffered point, lazily, in pre-order.
pub fn points<'a, V: NodeView<'a>>(root: V) -> impl Iterator<Item = Point> + 'a {
  Preorder::new(root).flat_map(|(_, node)| node.points().iter().copied())
}

/// Every buffered point in pre-order: a node's buffer, then its children.
pub fn collect_points<'a, V: NodeView<'a>>(root: V) -> Vec<Point> {
  points(root).collect()
}

/// `(bounds, depth)` of every node in pre-order.
pub fn node_boxes<'a, V: NodeView<'a>>(root: V) -> Vec<NodeBox> {
  Preorder::new(root)
    .map(|(depth, node)| NodeBox::new(node.bounds(), depth))
    .collect()
}

/// Points inside the closed box `region`, in traversal order.
pub fn range_query<'a, V: NodeView<'a>>(root: V, region: &Aabb3) -> Vec<Point> {
  let region = *region;
  Preorder::within(root, region)
    .flat_map(move |(_, node)| {
      node
        .points()
        .iter()
        .copied()
        .filter(move |point| region.contains_point(*point))
    })
    .collect()
}

/// Node/leaf/point counts and maximum depth in one walk.
pub fn statistics<'a, V: NodeView<'a>>(root: V) -> OctreeStats {
  Preorder::new(root).fold(OctreeStats::default(), |mut stats, (depth, node)| {
    stats.total_nodes += 1;
    if node.is_leaf() {
      stats.leaf_nodes += 1;
    }
    stats.total_points += node.points().len();
    stats.max_depth = stats.max_depth.max(depth);
    stats
  })
}

/// Indented dump of the tree structure.
pub fn write_structure<'a, V: NodeView<'a>>(root: V, out: &mut dyn fmt::Write) -> fmt::Result {
  write_node(root, 0, out)
}

fn write_node<'a, V: NodeView<'a>>(node: V, depth: usize, out: &mut dyn fmt::Write) -> fmt::Result {
  let pad = depth * 2;
  let bounds = node.bounds();
  let children = node.children();
  writeln!(
    out,
    "{:pad$}Node bounds: ({},{},{}) to ({},{},{})",
    "",
    bounds.min.x,
    bounds.min.y,
    bounds.min.z,
    bounds.max.x,
    bounds.max.y,
    bounds.max.z,
  )?;
  writeln!(out, "{:pad$}Points: {}", "", node.points().len())?;
  writeln!(out, "{:pad$}Active children: {}", "", children.len())?;
  for (octant, child) in children {
    writeln!(out, "{:pad$}Child {}:", "", octant)?;
    write_node(child, depth + 1, out)?;
  }
  Ok(())
}

#[cfg(test)]
#[path = "traversal_test.rs"]
mod traversal_test;
