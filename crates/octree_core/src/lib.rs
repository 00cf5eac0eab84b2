//! octree_core - spatial-partitioning benchmark engine
//!
//! Builds an octree over 3D points with one of three interchangeable
//! storage strategies, then answers range queries, reports structural
//! statistics and exports the hierarchy for visualization.
//!
//! # Features
//!
//! - **Array storage**: each node owns 8 fixed child slots; a split
//!   allocates all 8 at once
//! - **Map storage**: each node owns a sparse octant map; a split allocates
//!   only occupied octants
//! - **Linear storage**: one flat map keyed by 64-bit locational codes
//! - **Shared traversal**: point/box collection, pruned range queries and
//!   statistics written once over every strategy
//! - **VTK export**: legacy ASCII unstructured grid with per-cell depth
//!
//! # Example
//!
//! ```ignore
//! use octree_core::{Aabb3, ArrayOctree, Point};
//!
//! let mut tree = ArrayOctree::new(Aabb3::new(Point::splat(-10.0), Point::splat(10.0)));
//! tree.extend([Point::new(1.0, 1.0, 1.0), Point::new(2.0, 2.0, 2.0)]);
//!
//! let hits = tree.range_query(Point::ZERO, Point::splat(1.5));
//! println!("{}", tree.statistics().summary("Classic Octree"));
//! ```

pub mod diagnostics;
pub mod error;
pub mod index;
pub mod octree;
pub mod stats;
pub mod types;
pub mod vtk;

// Re-export commonly used items
pub use diagnostics::{Diagnostic, DiagnosticSink, NullSink, RecordingSink, TracingSink};
pub use error::{ConfigError, ExportError};
pub use index::SpatialIndex;
pub use octree::{
  Aabb3, ArrayChildren, ArrayOctree, ChildStorage, LinearOctree, LocationalCode, MapChildren,
  MapOctree, NodeView, Octree, OctreeConfig, OctreeNode,
};
pub use stats::OctreeStats;
pub use types::{NodeBox, Point};
