//! Octree storage benchmark driver.
//!
//! Builds one octree variant from a generated point cloud, reports build
//! time and tree statistics, and exports the result as a VTK file.
//!
//! Tree types:
//! - classic: 8 fixed child slots per node, all allocated on split
//! - hashmap: sparse octant map per node, occupied octants only
//! - morton: flat map keyed by 64-bit locational codes

mod config;
mod distribution;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use octree_core::{
	vtk, Aabb3, ArrayOctree, LinearOctree, MapOctree, OctreeConfig, SpatialIndex,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use web_time::Instant;

use config::BenchConfig;
use distribution::Distribution;

/// Child-storage strategy under test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TreeType {
	/// Fixed 8-slot children.
	Classic,
	/// Sparse hash-map children.
	Hashmap,
	/// Linear tree keyed by locational code.
	Morton,
}

/// Octree storage benchmark.
#[derive(Parser, Debug)]
#[command(name = "octree_bench")]
#[command(about = "Compares octree child-storage strategies on generated point clouds")]
struct Args {
	/// Storage strategy.
	#[arg(value_enum)]
	tree: TreeType,

	/// Point distribution.
	#[arg(value_enum)]
	distribution: Distribution,

	/// Number of points to generate (grid rounds down to a perfect cube).
	num_points: usize,

	/// Path to configuration TOML file.
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// RNG seed for the random distribution (overrides the config file).
	#[arg(short, long)]
	seed: Option<u64>,

	/// VTK output path (default: <output_dir>/octree_<distribution>.vtk).
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Print the indented node structure after the statistics.
	#[arg(long)]
	dump: bool,
}

fn main() -> Result<()> {
	init_logging();
	let args = Args::parse();

	let mut config = match &args.config {
		Some(path) => {
			println!("Loading config from: {}", path.display());
			BenchConfig::load(path)?
		}
		None => BenchConfig::default(),
	};
	if args.seed.is_some() {
		config.seed = args.seed;
	}

	let bounds = config.bounds();
	let mut index = make_index(args.tree, bounds, config.octree_config())
		.context("Invalid octree configuration")?;

	let mut rng = match config.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	};
	let points = args
		.distribution
		.generate(args.num_points, &bounds, &mut rng);
	tracing::info!(
		tree = index.name(),
		distribution = args.distribution.name(),
		points = points.len(),
		"building octree"
	);

	let start = Instant::now();
	let accepted = index.insert_all(&points);
	let elapsed = start.elapsed();

	println!("\nBuild time: {} ms", elapsed.as_millis());
	if accepted < points.len() {
		println!(
			"Rejected {} of {} points outside the root bounds",
			points.len() - accepted,
			points.len()
		);
	}
	println!("{}", index.statistics().summary(index.name()));

	if args.dump {
		let mut dump = String::new();
		index
			.write_structure(&mut dump)
			.context("Failed to format tree structure")?;
		println!("\n{dump}");
	}

	let output = args.output.unwrap_or_else(|| {
		config
			.output_dir
			.join(format!("octree_{}.vtk", args.distribution.name()))
	});
	vtk::export_vtk(&output, index.name(), &*index)
		.with_context(|| format!("Failed to export {}", output.display()))?;
	println!("\nExported to: {}", output.display());

	Ok(())
}

/// Default to `info` unless RUST_LOG says otherwise.
fn init_logging() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn make_index(
	tree: TreeType,
	bounds: Aabb3,
	config: OctreeConfig,
) -> Result<Box<dyn SpatialIndex>, octree_core::ConfigError> {
	let index: Box<dyn SpatialIndex> = match tree {
		TreeType::Classic => Box::new(ArrayOctree::with_config(bounds, config)?),
		TreeType::Hashmap => Box::new(MapOctree::with_config(bounds, config)?),
		TreeType::Morton => Box::new(LinearOctree::with_config(bounds, config)?),
	};
	Ok(index)
}
