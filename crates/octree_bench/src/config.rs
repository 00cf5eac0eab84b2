//! Configuration parsing for benchmark runs.

use anyhow::{Context, Result};
use octree_core::{Aabb3, OctreeConfig, Point};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root configuration for a benchmark run. Every field is optional.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
	/// Lower corner of the root box.
	pub bounds_min: [f32; 3],
	/// Upper corner of the root box.
	pub bounds_max: [f32; 3],
	/// Leaf overflow threshold.
	pub max_points_per_leaf: usize,
	/// Deepest level a node may occupy.
	pub max_depth: u32,
	/// RNG seed for the random distribution (absent: OS entropy).
	pub seed: Option<u64>,
	/// Directory the VTK file is written to.
	pub output_dir: PathBuf,
}

impl Default for BenchConfig {
	fn default() -> Self {
		let core = OctreeConfig::default();
		Self {
			bounds_min: [-10.0; 3],
			bounds_max: [10.0; 3],
			max_points_per_leaf: core.max_points_per_leaf,
			max_depth: core.max_depth,
			seed: None,
			output_dir: PathBuf::from("."),
		}
	}
}

impl BenchConfig {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		let config = Self::parse(&content)
			.with_context(|| format!("Invalid config file: {}", path.display()))?;
		Ok(config)
	}

	/// Parse and validate TOML text.
	pub fn parse(content: &str) -> Result<Self> {
		let config: BenchConfig =
			toml::from_str(content).with_context(|| "Failed to parse config TOML")?;

		let (min, max) = (config.bounds_min, config.bounds_max);
		if min.iter().chain(max.iter()).any(|v| !v.is_finite()) {
			anyhow::bail!("bounds must be finite, got {:?} to {:?}", min, max);
		}
		if (0..3).any(|axis| min[axis] > max[axis]) {
			anyhow::bail!("bounds_min {:?} exceeds bounds_max {:?}", min, max);
		}
		config.octree_config().validate()?;

		Ok(config)
	}

	pub fn bounds(&self) -> Aabb3 {
		Aabb3::new(Point::from(self.bounds_min), Point::from(self.bounds_max))
	}

	pub fn octree_config(&self) -> OctreeConfig {
		OctreeConfig {
			max_points_per_leaf: self.max_points_per_leaf,
			max_depth: self.max_depth,
		}
	}
}
