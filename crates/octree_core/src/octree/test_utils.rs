//! Fixtures shared by the octree tests.

use glam::Vec3;

use super::Aabb3;
use crate::types::Point;

/// The benchmark's default world: `[-10, 10]` on every axis.
pub fn world() -> Aabb3 {
  Aabb3::new(Vec3::splat(-10.0), Vec3::splat(10.0))
}

pub fn p(x: f32, y: f32, z: f32) -> Point {
  Vec3::new(x, y, z)
}

/// Points as sortable arrays, for order-insensitive multiset comparison.
pub fn sorted(points: impl IntoIterator<Item = Point>) -> Vec<[f32; 3]> {
  let mut out: Vec<[f32; 3]> = points.into_iter().map(|point| point.to_array()).collect();
  out.sort_by(|a, b| a.partial_cmp(b).expect("test points are never NaN"));
  out
}

/// Deterministic pseudo-random points inside `bounds` (xorshift64*).
pub fn scattered(count: usize, seed: u64, bounds: &Aabb3) -> Vec<Point> {
  let mut state = seed.max(1);
  let mut next_unit = move || {
    state ^= state >> 12;
    state ^= state << 25;
    state ^= state >> 27;
    let bits = state.wrapping_mul(0x2545_f491_4f6c_dd1d) >> 40;
    bits as f32 / (1u64 << 24) as f32
  };
  let size = bounds.size();
  (0..count)
    .map(|_| {
      let t = Vec3::new(next_unit(), next_unit(), next_unit());
      bounds.min + t * size
    })
    .collect()
}
