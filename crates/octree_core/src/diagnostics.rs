//! Diagnostic channel for recoverable conditions during insertion.
//!
//! The engine never prints. Each tree owns a [`DiagnosticSink`] and reports
//! through it; the caller decides where reports go.
//!
//! # Usage
//!
//! ```ignore
//! use octree_core::{ArrayOctree, RecordingSink};
//!
//! let mut tree = ArrayOctree::with_sink(bounds, RecordingSink::default());
//! tree.insert(Point::splat(100.0));
//! assert_eq!(tree.sink().len(), 1);
//! ```

use std::fmt;

use crate::octree::Aabb3;
use crate::types::Point;

/// A recoverable condition observed by the tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Diagnostic {
  /// The point lies outside the root bounds and was discarded.
  PointOutOfBounds { point: Point, bounds: Aabb3 },
  /// A leaf at the configured maximum depth overflowed its threshold and
  /// keeps buffering. Reported once per leaf.
  DepthLimitReached { depth: u32, bounds: Aabb3 },
}

impl fmt::Display for Diagnostic {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Diagnostic::PointOutOfBounds { point, bounds } => write!(
        f,
        "point ({}, {}, {}) is outside node bounds ({}, {}, {}) to ({}, {}, {})",
        point.x, point.y, point.z, bounds.min.x, bounds.min.y, bounds.min.z, bounds.max.x,
        bounds.max.y, bounds.max.z
      ),
      Diagnostic::DepthLimitReached { depth, bounds } => write!(
        f,
        "leaf at depth {} overflowed without subdividing ({}, {}, {}) to ({}, {}, {})",
        depth, bounds.min.x, bounds.min.y, bounds.min.z, bounds.max.x, bounds.max.y, bounds.max.z
      ),
    }
  }
}

/// Receiver for [`Diagnostic`]s.
pub trait DiagnosticSink {
  fn report(&mut self, diagnostic: Diagnostic);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &mut T {
  fn report(&mut self, diagnostic: Diagnostic) {
    (**self).report(diagnostic)
  }
}

/// Forwards diagnostics to `tracing`. Default sink for every tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
  fn report(&mut self, diagnostic: Diagnostic) {
    match diagnostic {
      Diagnostic::PointOutOfBounds { point, .. } => {
        tracing::warn!(x = point.x, y = point.y, z = point.z, "{}", diagnostic);
      }
      Diagnostic::DepthLimitReached { depth, .. } => {
        tracing::debug!(depth, "{}", diagnostic);
      }
    }
  }
}

/// Keeps every diagnostic in memory, in report order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
  diagnostics: Vec<Diagnostic>,
}

impl RecordingSink {
  pub fn diagnostics(&self) -> &[Diagnostic] {
    &self.diagnostics
  }

  pub fn len(&self) -> usize {
    self.diagnostics.len()
  }

  pub fn is_empty(&self) -> bool {
    self.diagnostics.is_empty()
  }

  /// Points rejected for lying outside the tree.
  pub fn rejected_points(&self) -> impl Iterator<Item = Point> + '_ {
    self.diagnostics.iter().filter_map(|d| match d {
      Diagnostic::PointOutOfBounds { point, .. } => Some(*point),
      _ => None,
    })
  }

  pub fn clear(&mut self) {
    self.diagnostics.clear();
  }
}

impl DiagnosticSink for RecordingSink {
  fn report(&mut self, diagnostic: Diagnostic) {
    self.diagnostics.push(diagnostic);
  }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
  fn report(&mut self, _diagnostic: Diagnostic) {}
}
