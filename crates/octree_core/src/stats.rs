//! Structural statistics gathered by a full tree walk.

use std::fmt;

/// Snapshot of tree shape. Recomputed on demand, never cached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OctreeStats {
	/// Number of materialized nodes, root included.
	pub total_nodes: usize,
	/// Nodes without live children.
	pub leaf_nodes: usize,
	/// Buffered points summed over every node.
	pub total_points: usize,
	/// Deepest node depth (root = 0).
	pub max_depth: u32,
}

impl OctreeStats {
	/// Nodes with at least one live child.
	#[inline]
	pub fn internal_nodes(&self) -> usize {
		self.total_nodes - self.leaf_nodes
	}

	/// Mean buffered points per leaf, or 0 for a tree without leaves.
	#[inline]
	pub fn average_points_per_leaf(&self) -> f64 {
		if self.leaf_nodes == 0 {
			0.0
		} else {
			self.total_points as f64 / self.leaf_nodes as f64
		}
	}

	/// Human-readable report headed by `title`.
	pub fn summary<'a>(&'a self, title: &'a str) -> StatsSummary<'a> {
		StatsSummary { title, stats: self }
	}
}

/// Display adapter returned by [`OctreeStats::summary`].
#[derive(Debug)]
pub struct StatsSummary<'a> {
	title: &'a str,
	stats: &'a OctreeStats,
}

impl fmt::Display for StatsSummary<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let stats = self.stats;
		writeln!(f, "=== {} Statistics ===", self.title)?;
		writeln!(f, "Total nodes: {}", stats.total_nodes)?;
		writeln!(f, "Leaf nodes: {}", stats.leaf_nodes)?;
		writeln!(f, "Internal nodes: {}", stats.internal_nodes())?;
		writeln!(f, "Total points: {}", stats.total_points)?;
		writeln!(f, "Maximum depth: {}", stats.max_depth)?;
		write!(f, "Average points per leaf: {:.4}", stats.average_points_per_leaf())
	}
}
