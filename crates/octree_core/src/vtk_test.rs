use super::*;
use crate::diagnostics::NullSink;
use crate::octree::test_utils::{p, world};
use crate::octree::{Aabb3, LinearOctree, MapOctree, Octree};

fn render(points: &[Point], boxes: &[NodeBox]) -> String {
  let mut buf = Vec::new();
  write_vtk(&mut buf, "Octree", points, boxes).unwrap();
  String::from_utf8(buf).unwrap()
}

/// Section header followed by its body lines.
fn section<'a>(text: &'a str, header: &str) -> Vec<&'a str> {
  text
    .lines()
    .skip_while(|line| !line.starts_with(header))
    .skip(1)
    .take_while(|line| !line.is_empty())
    .collect()
}

#[test]
fn test_single_point_single_box_exact() {
  let boxes = [NodeBox::new(
    Aabb3::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0)),
    2,
  )];
  let text = render(&[p(0.5, 0.25, -1.0)], &boxes);

  let expected = "\
# vtk DataFile Version 3.0
Octree
ASCII
DATASET UNSTRUCTURED_GRID

POINTS 9 float
0.500000 0.250000 -1.000000
0.000000 0.000000 0.000000
1.000000 0.000000 0.000000
1.000000 1.000000 0.000000
0.000000 1.000000 0.000000
0.000000 0.000000 1.000000
1.000000 0.000000 1.000000
1.000000 1.000000 1.000000
0.000000 1.000000 1.000000

CELLS 2 11
1 0
8 1 2 3 4 5 6 7 8

CELL_TYPES 2
1
12

CELL_DATA 2
SCALARS OctreeLevel int 1
LOOKUP_TABLE default
-1
2
";
  assert_eq!(text, expected);
}

/// No points and no boxes still produce a well-formed file.
#[test]
fn test_empty_grid() {
  let text = render(&[], &[]);
  assert!(text.contains("POINTS 0 float"));
  assert!(text.contains("CELLS 0 0"));
  assert!(text.contains("CELL_TYPES 0"));
  assert!(text.contains("CELL_DATA 0"));
  assert!(text.ends_with("LOOKUP_TABLE default\n"));
}

/// Counts for a tree: 8 corners per box, points first, boxes after.
#[test]
fn test_counts_follow_tree() {
  let mut tree: MapOctree<NullSink> = Octree::with_sink(world(), NullSink);
  tree.extend([p(1.0, 1.0, 1.0), p(2.0, 2.0, 2.0), p(3.0, 3.0, 3.0)]);
  let points = tree.collect_points();
  let boxes = tree.node_boxes();
  assert_eq!((points.len(), boxes.len()), (3, 7));

  let text = render(&points, &boxes);
  assert!(text.contains("POINTS 59 float"));
  assert!(text.contains("CELLS 10 69"));

  let cells = section(&text, "CELLS");
  assert_eq!(cells.len(), 10);
  assert_eq!(cells[2], "1 2");
  assert_eq!(cells[3], "8 3 4 5 6 7 8 9 10");
  assert_eq!(cells[9], "8 51 52 53 54 55 56 57 58");

  let types = section(&text, "CELL_TYPES");
  assert_eq!(types, vec!["1", "1", "1", "12", "12", "12", "12", "12", "12", "12"]);

  let levels: Vec<&str> = section(&text, "CELL_DATA").into_iter().skip(2).collect();
  assert_eq!(levels, vec!["-1", "-1", "-1", "0", "1", "2", "3", "4", "4", "3"]);
}

#[test]
fn test_export_writes_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("octree_random.vtk");

  let mut tree = LinearOctree::with_sink(world(), NullSink);
  tree.extend([p(-5.0, -5.0, -5.0), p(5.0, 5.0, 5.0)]);
  export_vtk(&path, "Morton Octree", &tree).unwrap();

  let text = std::fs::read_to_string(&path).unwrap();
  assert!(text.starts_with("# vtk DataFile Version 3.0\nMorton Octree\n"));
  assert!(text.contains("POINTS 26 float"));
  assert!(text.contains("CELL_TYPES 5"));
}

/// A missing parent directory surfaces as a create error; the tree is
/// untouched.
#[test]
fn test_export_unwritable_path() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("missing").join("out.vtk");

  let mut tree: MapOctree<NullSink> = Octree::with_sink(world(), NullSink);
  tree.extend([p(1.0, 1.0, 1.0)]);
  let err = export_vtk(&path, "HashMap Octree", &tree).unwrap_err();

  assert!(matches!(err, ExportError::Create { .. }));
  assert!(err.to_string().contains("out.vtk"));
  assert_eq!(tree.collect_points(), vec![p(1.0, 1.0, 1.0)]);
}
