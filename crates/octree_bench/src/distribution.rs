//! Point generators for the benchmark distributions.

use clap::ValueEnum;
use octree_core::{Aabb3, Point};
use rand::Rng;

/// Shape of the generated point cloud.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Distribution {
	/// Uniform random points in the box.
	Random,
	/// Regular lattice spanning the box, faces included.
	Grid,
	/// Shrinking spiral rising from the box center.
	Spiral,
}

impl Distribution {
	/// Lowercase name, as used on the command line and in file names.
	pub fn name(self) -> &'static str {
		match self {
			Distribution::Random => "random",
			Distribution::Grid => "grid",
			Distribution::Spiral => "spiral",
		}
	}

	/// Generate the cloud. Grid rounds `count` down to a perfect cube.
	pub fn generate<R: Rng>(self, count: usize, bounds: &Aabb3, rng: &mut R) -> Vec<Point> {
		match self {
			Distribution::Random => random_points(count, bounds, rng),
			Distribution::Grid => grid_points(grid_side(count), bounds),
			Distribution::Spiral => spiral_points(count, bounds),
		}
	}
}

pub fn random_points<R: Rng>(count: usize, bounds: &Aabb3, rng: &mut R) -> Vec<Point> {
	let (min, max) = (bounds.min, bounds.max);
	(0..count)
		.map(|_| {
			Point::new(
				rng.random_range(min.x..=max.x),
				rng.random_range(min.y..=max.y),
				rng.random_range(min.z..=max.z),
			)
		})
		.collect()
}

/// Largest `side` with `side³ <= count`.
pub fn grid_side(count: usize) -> usize {
	let mut side = (count as f64).cbrt() as usize;
	while (side + 1).pow(3) <= count {
		side += 1;
	}
	while side > 0 && side.pow(3) > count {
		side -= 1;
	}
	side
}

/// `side³` lattice points, both faces included on every axis.
pub fn grid_points(side: usize, bounds: &Aabb3) -> Vec<Point> {
	let step = if side > 1 {
		bounds.size() / (side - 1) as f32
	} else {
		Point::ZERO
	};

	let mut points = Vec::with_capacity(side.pow(3));
	for x in 0..side {
		for y in 0..side {
			for z in 0..side {
				let index = Point::new(x as f32, y as f32, z as f32);
				points.push(bounds.min + index * step);
			}
		}
	}
	points
}

/// Spiral around the box center: radius shrinks linearly from half the
/// smallest extent, angle advances 0.1 rad per point and height rises by
/// a tenth of the angle. Long spirals climb out of the box.
pub fn spiral_points(count: usize, bounds: &Aabb3) -> Vec<Point> {
	let center = bounds.center();
	let radius = bounds.size().min_element() / 2.0;

	(0..count)
		.map(|i| {
			let t = i as f32 * 0.1;
			let r = radius * (1.0 - i as f32 / count as f32);
			Point::new(
				center.x + r * t.cos(),
				center.y + r * t.sin(),
				center.z + t * 0.1,
			)
		})
		.collect()
}
