//! OctreeConfig - subdivision thresholds shared by every storage strategy.

use super::code::LocationalCode;
use crate::error::ConfigError;

/// Configuration for octree subdivision.
///
/// Every variant reads the same two numbers, so trees built from the same
/// insertion order partition space identically regardless of storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OctreeConfig {
  /// A leaf subdivides once its buffer holds more than this many points.
  pub max_points_per_leaf: usize,

  /// Deepest level a node may occupy (root = 0). Leaves at this depth keep
  /// buffering instead of subdividing, which bounds recursion for duplicate
  /// points.
  pub max_depth: u32,
}

impl OctreeConfig {
  /// Overflow threshold used by the benchmark.
  pub const DEFAULT_MAX_POINTS_PER_LEAF: usize = 1;

  /// Check the configuration is usable by all variants.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.max_points_per_leaf == 0 {
      return Err(ConfigError::ZeroLeafCapacity);
    }
    if self.max_depth > LocationalCode::MAX_DEPTH {
      return Err(ConfigError::DepthExceedsKeyWidth {
        requested: self.max_depth,
        limit: LocationalCode::MAX_DEPTH,
      });
    }
    Ok(())
  }

  /// Whether a node at `depth` may still be split.
  #[inline]
  pub fn can_subdivide(&self, depth: u32) -> bool {
    depth < self.max_depth
  }
}

impl Default for OctreeConfig {
  fn default() -> Self {
    Self {
      max_points_per_leaf: Self::DEFAULT_MAX_POINTS_PER_LEAF,
      max_depth: LocationalCode::MAX_DEPTH,
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
