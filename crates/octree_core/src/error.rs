//! Error types for tree construction and export.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid [`OctreeConfig`](crate::octree::OctreeConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("max_points_per_leaf must be at least 1")]
  ZeroLeafCapacity,

  #[error("max_depth {requested} exceeds the {limit} levels a 64-bit locational code can address")]
  DepthExceedsKeyWidth { requested: u32, limit: u32 },
}

/// Failure while writing a tree to disk. The tree itself is never modified.
#[derive(Debug, Error)]
pub enum ExportError {
  #[error("could not open {} for writing", path.display())]
  Create {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed writing {}", path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}
