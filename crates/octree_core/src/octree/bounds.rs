//! Axis-aligned bounding box and the octant math built on it.

use glam::{BVec3, Vec3};

use crate::types::Point;

/// Axis-aligned bounding box.
///
/// Both corners are inclusive. `min <= max` on every axis is the caller's
/// responsibility; an inverted box is kept as given and contains no point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb3 {
	/// Minimum corner (inclusive).
	pub min: Vec3,
	/// Maximum corner (inclusive).
	pub max: Vec3,
}

impl Aabb3 {
	/// Create a new AABB from min and max corners.
	pub fn new(min: Vec3, max: Vec3) -> Self {
		Self { min, max }
	}

	/// Create a new AABB from center and half-extents.
	///
	/// Useful for defining world bounds symmetrically around an origin.
	pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
		Self {
			min: center - half_extents,
			max: center + half_extents,
		}
	}

	/// Check if this AABB overlaps with another.
	///
	/// Two AABBs overlap if they share any interior or boundary points.
	#[inline]
	pub fn overlaps(&self, other: &Aabb3) -> bool {
		self.min.x <= other.max.x
			&& self.max.x >= other.min.x
			&& self.min.y <= other.max.y
			&& self.max.y >= other.min.y
			&& self.min.z <= other.max.z
			&& self.max.z >= other.min.z
	}

	/// Check if this AABB contains a point. NaN coordinates are never contained.
	#[inline]
	pub fn contains_point(&self, point: Point) -> bool {
		point.x >= self.min.x
			&& point.x <= self.max.x
			&& point.y >= self.min.y
			&& point.y <= self.max.y
			&& point.z >= self.min.z
			&& point.z <= self.max.z
	}

	/// Get the size of the AABB (max - min).
	#[inline]
	pub fn size(&self) -> Vec3 {
		self.max - self.min
	}

	/// Get the center of the AABB.
	#[inline]
	pub fn center(&self) -> Vec3 {
		(self.min + self.max) * 0.5
	}

	/// Octant (0-7) of `point` relative to the box center.
	///
	/// - bit 0: `point.x > center.x`
	/// - bit 1: `point.y > center.y`
	/// - bit 2: `point.z > center.z`
	///
	/// Comparisons are strict, so a point on a midplane belongs to the lower
	/// half of that axis.
	#[inline]
	pub fn octant_of(&self, point: Point) -> u8 {
		let center = self.center();
		(point.x > center.x) as u8 | ((point.y > center.y) as u8) << 1 | ((point.z > center.z) as u8) << 2
	}

	/// Bounds of the child box for `octant`.
	///
	/// For each axis whose bit is set the lower bound moves up to the center,
	/// otherwise the upper bound moves down to it. The eight results tile the
	/// parent exactly.
	#[inline]
	pub fn octant_bounds(&self, octant: u8) -> Aabb3 {
		debug_assert!(octant < 8, "octant out of range: {octant}");
		let center = self.center();
		let upper = BVec3::new(octant & 1 != 0, octant & 2 != 0, octant & 4 != 0);
		Aabb3 {
			min: Vec3::select(upper, center, self.min),
			max: Vec3::select(upper, self.max, center),
		}
	}

	/// The eight corners in hexahedron order: the bottom face (min z)
	/// counter-clockwise starting at `min`, then the top face (max z) in the
	/// same order.
	pub fn corners(&self) -> [Point; 8] {
		let (lo, hi) = (self.min, self.max);
		[
			Vec3::new(lo.x, lo.y, lo.z),
			Vec3::new(hi.x, lo.y, lo.z),
			Vec3::new(hi.x, hi.y, lo.z),
			Vec3::new(lo.x, hi.y, lo.z),
			Vec3::new(lo.x, lo.y, hi.z),
			Vec3::new(hi.x, lo.y, hi.z),
			Vec3::new(hi.x, hi.y, hi.z),
			Vec3::new(lo.x, hi.y, hi.z),
		]
	}
}
