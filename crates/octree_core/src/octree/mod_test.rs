use crate::diagnostics::{NullSink, RecordingSink};
use crate::index::SpatialIndex;
use crate::octree::test_utils::{p, sorted, world};
use crate::octree::{
  ArrayOctree, LinearOctree, MapOctree, NodeView, Octree, OctreeConfig, Preorder,
};
use crate::types::Point;

/// One empty tree per storage strategy, behind the common facade.
fn all_variants() -> Vec<Box<dyn SpatialIndex>> {
  let array: ArrayOctree<NullSink> = Octree::with_sink(world(), NullSink);
  let map: MapOctree<NullSink> = Octree::with_sink(world(), NullSink);
  let linear = LinearOctree::with_sink(world(), NullSink);
  vec![Box::new(array) as Box<dyn SpatialIndex>, Box::new(map), Box::new(linear)]
}

fn diagonal() -> [Point; 3] {
  [p(1.0, 1.0, 1.0), p(2.0, 2.0, 2.0), p(3.0, 3.0, 3.0)]
}

// =========================================================================
// Batch 1: variant naming
// =========================================================================

#[test]
fn test_variant_names() {
  let names: Vec<&str> = all_variants().iter().map(|index| index.name()).collect();
  assert_eq!(names, vec!["Classic Octree", "HashMap Octree", "Morton Octree"]);
}

#[test]
fn test_empty_trees_are_single_leaf() {
  for index in all_variants() {
    let stats = index.statistics();
    assert_eq!(stats.total_nodes, 1, "{}", index.name());
    assert_eq!(stats.leaf_nodes, 1, "{}", index.name());
    assert_eq!(stats.total_points, 0, "{}", index.name());
    assert_eq!(stats.max_depth, 0, "{}", index.name());
    assert_eq!(stats.average_points_per_leaf(), 0.0);
    assert_eq!(index.bounds(), world());
  }
}

// =========================================================================
// Batch 2: documented scenarios
// =========================================================================

/// Three diagonal points with threshold 1: array storage allocates every
/// sibling, sparse storage only the occupied path.
#[test]
fn test_diagonal_scenario_statistics() {
  let expected = [(33, 29), (7, 3), (7, 3)];

  for (mut index, (nodes, leaves)) in all_variants().into_iter().zip(expected) {
    assert_eq!(index.insert_all(&diagonal()), 3);

    let stats = index.statistics();
    assert_eq!(stats.total_nodes, nodes, "{}", index.name());
    assert_eq!(stats.leaf_nodes, leaves, "{}", index.name());
    assert_eq!(stats.internal_nodes(), 4, "{}", index.name());
    assert_eq!(stats.total_points, 3, "{}", index.name());
    assert_eq!(stats.max_depth, 4, "{}", index.name());
  }
}

/// The same points land in the same leaf boxes whatever the storage.
#[test]
fn test_diagonal_scenario_leaf_boxes() {
  let expected = [
    (p(1.0, 1.0, 1.0), Point::splat(0.0), Point::splat(1.25)),
    (p(2.0, 2.0, 2.0), Point::splat(1.25), Point::splat(2.5)),
    (p(3.0, 3.0, 3.0), Point::splat(2.5), Point::splat(5.0)),
  ];

  let mut array: ArrayOctree<NullSink> = Octree::with_sink(world(), NullSink);
  let mut map: MapOctree<NullSink> = Octree::with_sink(world(), NullSink);
  let mut linear = LinearOctree::with_sink(world(), NullSink);
  array.extend(diagonal());
  map.extend(diagonal());
  linear.extend(diagonal());

  let array_leaves: Vec<_> = Preorder::new(array.root())
    .filter(|(_, node)| !NodeView::points(*node).is_empty())
    .map(|(depth, node)| (depth, NodeView::bounds(node), NodeView::points(node).to_vec()))
    .collect();
  let map_leaves: Vec<_> = Preorder::new(map.root())
    .filter(|(_, node)| !NodeView::points(*node).is_empty())
    .map(|(depth, node)| (depth, NodeView::bounds(node), NodeView::points(node).to_vec()))
    .collect();
  let linear_leaves: Vec<_> = Preorder::new(linear.root())
    .filter(|(_, node)| !NodeView::points(*node).is_empty())
    .map(|(depth, node)| (depth, NodeView::bounds(node), NodeView::points(node).to_vec()))
    .collect();

  assert_eq!(array_leaves.len(), 3);
  for ((_, bounds, points), (point, min, max)) in array_leaves.iter().zip(expected) {
    assert_eq!(points, &vec![point]);
    assert_eq!(bounds.min, min);
    assert_eq!(bounds.max, max);
  }
  assert_eq!(array_leaves, map_leaves);
  assert_eq!(map_leaves, linear_leaves);
}

/// Out-of-bounds inserts leave the tree untouched and are reported.
#[test]
fn test_out_of_bounds_scenario() {
  let inside = p(0.0, 0.0, 0.0);
  let outside = p(15.0, 0.0, 0.0);

  let mut array: ArrayOctree<RecordingSink> = Octree::with_sink(world(), RecordingSink::default());
  let mut map: MapOctree<RecordingSink> = Octree::with_sink(world(), RecordingSink::default());
  let mut linear = LinearOctree::with_sink(world(), RecordingSink::default());

  assert_eq!(array.extend([inside, outside]), 1);
  assert_eq!(map.extend([inside, outside]), 1);
  assert_eq!(linear.extend([inside, outside]), 1);

  for sink in [array.sink(), map.sink(), linear.sink()] {
    assert_eq!(sink.rejected_points().collect::<Vec<_>>(), vec![outside]);
  }
  assert_eq!(array.collect_points(), vec![inside]);
  assert_eq!(map.collect_points(), vec![inside]);
  assert_eq!(linear.collect_points(), vec![inside]);
  assert_eq!(array.statistics().total_nodes, 1);
}

#[test]
fn test_range_query_scenario() {
  let points = [p(0.0, 0.0, 0.0), p(5.0, 5.0, 5.0), p(-0.5, -0.5, -0.5)];
  for mut index in all_variants() {
    index.insert_all(&points);
    let hits = index.range_query(Point::splat(-1.0), Point::splat(1.0));
    assert_eq!(
      sorted(hits),
      sorted([p(0.0, 0.0, 0.0), p(-0.5, -0.5, -0.5)]),
      "{}",
      index.name()
    );
  }
}

/// A query box that misses the root returns nothing.
#[test]
fn test_range_query_outside_root() {
  for mut index in all_variants() {
    index.insert_all(&diagonal());
    assert!(index
      .range_query(Point::splat(11.0), Point::splat(12.0))
      .is_empty());
  }
}

/// Degenerate boxes are legal queries.
#[test]
fn test_range_query_degenerate_box() {
  for mut index in all_variants() {
    index.insert_all(&diagonal());
    let hits = index.range_query(p(2.0, 2.0, 2.0), p(2.0, 2.0, 2.0));
    assert_eq!(hits, vec![p(2.0, 2.0, 2.0)], "{}", index.name());
  }
}

/// An inverted root box rejects every point.
#[test]
fn test_inverted_root_rejects_everything() {
  let inverted = crate::octree::Aabb3::new(Point::splat(1.0), Point::splat(-1.0));
  let mut tree: MapOctree<RecordingSink> = Octree::with_sink(inverted, RecordingSink::default());
  assert_eq!(tree.extend([Point::ZERO, Point::splat(1.0)]), 0);
  assert_eq!(tree.sink().len(), 2);
  assert_eq!(tree.statistics().total_points, 0);
}

// =========================================================================
// Batch 3: structural invariants
// =========================================================================

/// A node is a leaf exactly when it has no children, and only leaves hold
/// points.
#[test]
fn test_leaf_iff_no_children() {
  let points = crate::octree::test_utils::scattered(200, 7, &world());

  let mut array: ArrayOctree<NullSink> = Octree::with_sink(world(), NullSink);
  array.extend(points.iter().copied());
  for (_, node) in Preorder::new(array.root()) {
    assert_eq!(NodeView::is_leaf(node), NodeView::children(node).is_empty());
    if !NodeView::is_leaf(node) {
      assert!(NodeView::points(node).is_empty());
      assert_eq!(NodeView::children(node).len(), 8);
    }
  }

  let mut linear = LinearOctree::with_sink(world(), NullSink);
  linear.extend(points.iter().copied());
  for (_, node) in Preorder::new(linear.root()) {
    assert_eq!(NodeView::is_leaf(node), NodeView::children(node).is_empty());
    if !NodeView::is_leaf(node) {
      assert!(NodeView::points(node).is_empty());
    }
  }
}

/// Every child box is the matching octant of its parent box.
#[test]
fn test_children_tile_parent() {
  let points = crate::octree::test_utils::scattered(100, 11, &world());
  let mut map: MapOctree<NullSink> = Octree::with_sink(world(), NullSink);
  map.extend(points);

  for (_, node) in Preorder::new(map.root()) {
    let parent = NodeView::bounds(node);
    for (octant, child) in NodeView::children(node) {
      assert_eq!(NodeView::bounds(child), parent.octant_bounds(octant));
    }
  }
}

/// Leaves respect the threshold unless they sit at the depth limit.
#[test]
fn test_leaf_capacity_respected() {
  let config = OctreeConfig {
    max_points_per_leaf: 4,
    max_depth: 6,
  };
  let mut points = crate::octree::test_utils::scattered(300, 3, &world());
  points.extend([p(1.0, 1.0, 1.0); 10]);

  let mut map: MapOctree<NullSink> = Octree::with_parts(world(), config, NullSink).unwrap();
  map.extend(points.iter().copied());

  for (depth, node) in Preorder::new(map.root()) {
    if NodeView::points(node).len() > config.max_points_per_leaf {
      assert_eq!(depth, config.max_depth);
    }
  }
  assert_eq!(map.statistics().total_points, points.len());
}

#[test]
fn test_write_structure_matches_across_sparse_variants() {
  let mut map: MapOctree<NullSink> = Octree::with_sink(world(), NullSink);
  let mut linear = LinearOctree::with_sink(world(), NullSink);
  map.extend(diagonal());
  linear.extend(diagonal());

  let mut map_dump = String::new();
  let mut linear_dump = String::new();
  map.write_structure(&mut map_dump).unwrap();
  linear.write_structure(&mut linear_dump).unwrap();
  assert_eq!(map_dump, linear_dump);
}
