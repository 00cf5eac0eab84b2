//! Legacy ASCII VTK export for ParaView and similar viewers.
//!
//! The file is an unstructured grid holding every stored point as a vertex
//! cell followed by every node box as a hexahedron cell. A per-cell scalar
//! `OctreeLevel` carries `-1` for points and the node depth for boxes, for
//! depth-based coloring.
//!
//! ```text
//! POINTS      stored points, then 8 corners per box
//! CELLS       "1 i" per point, "8 s s+1 .. s+7" per box
//! CELL_TYPES  1 (VTK_VERTEX) per point, 12 (VTK_HEXAHEDRON) per box
//! CELL_DATA   -1 per point, depth per box
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::ExportError;
use crate::index::SpatialIndex;
use crate::types::{NodeBox, Point};

const VTK_VERTEX: u8 = 1;
const VTK_HEXAHEDRON: u8 = 12;

/// Write `points` and `boxes` as a VTK unstructured grid.
pub fn write_vtk<W: Write>(
  mut out: W,
  title: &str,
  points: &[Point],
  boxes: &[NodeBox],
) -> io::Result<()> {
  writeln!(out, "# vtk DataFile Version 3.0")?;
  writeln!(out, "{title}")?;
  writeln!(out, "ASCII")?;
  writeln!(out, "DATASET UNSTRUCTURED_GRID")?;
  writeln!(out)?;

  writeln!(out, "POINTS {} float", points.len() + boxes.len() * 8)?;
  for point in points {
    write_coords(&mut out, *point)?;
  }
  for node_box in boxes {
    for corner in node_box.bounds.corners() {
      write_coords(&mut out, corner)?;
    }
  }

  let cells = points.len() + boxes.len();
  writeln!(out)?;
  writeln!(out, "CELLS {} {}", cells, points.len() * 2 + boxes.len() * 9)?;
  for i in 0..points.len() {
    writeln!(out, "1 {i}")?;
  }
  let base = points.len();
  for i in 0..boxes.len() {
    let start = base + i * 8;
    write!(out, "8")?;
    for corner in start..start + 8 {
      write!(out, " {corner}")?;
    }
    writeln!(out)?;
  }

  writeln!(out)?;
  writeln!(out, "CELL_TYPES {cells}")?;
  for _ in points {
    writeln!(out, "{VTK_VERTEX}")?;
  }
  for _ in boxes {
    writeln!(out, "{VTK_HEXAHEDRON}")?;
  }

  writeln!(out)?;
  writeln!(out, "CELL_DATA {cells}")?;
  writeln!(out, "SCALARS OctreeLevel int 1")?;
  writeln!(out, "LOOKUP_TABLE default")?;
  for _ in points {
    writeln!(out, "-1")?;
  }
  for node_box in boxes {
    writeln!(out, "{}", node_box.depth)?;
  }

  out.flush()
}

fn write_coords<W: Write>(out: &mut W, point: Point) -> io::Result<()> {
  writeln!(out, "{:.6} {:.6} {:.6}", point.x, point.y, point.z)
}

/// Export `index` to `path`. The tree is only read.
#[cfg_attr(feature = "profiling", tracing::instrument(skip_all, name = "vtk::export"))]
pub fn export_vtk(path: &Path, title: &str, index: &dyn SpatialIndex) -> Result<(), ExportError> {
  let file = File::create(path).map_err(|source| ExportError::Create {
    path: path.to_path_buf(),
    source,
  })?;

  let points = index.collect_points();
  let boxes = index.node_boxes();
  write_vtk(BufWriter::new(file), title, &points, &boxes).map_err(|source| {
    ExportError::Write {
      path: path.to_path_buf(),
      source,
    }
  })?;

  tracing::info!(
    path = %path.display(),
    points = points.len(),
    boxes = boxes.len(),
    "octree exported"
  );
  Ok(())
}

#[cfg(test)]
#[path = "vtk_test.rs"]
mod vtk_test;
