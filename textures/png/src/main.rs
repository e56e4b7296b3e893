use clap::Parser;
use log::info;
use std::path::PathBuf;

use assetkit_textures_png::{
	EXTENSION,
	optimize_dir,
	OptimizeCfg,
	PngOptimizeError,
	SCALE,
	SOURCE_DIR,
	TARGET_DIR
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Downscale a directory of PNG images with lossless recompression")]
struct Args {
	/// Directory holding the original images
	#[arg(long, default_value = SOURCE_DIR)]
	source: PathBuf,
	/// Directory the downscaled images are written to
	#[arg(long, default_value = TARGET_DIR)]
	target: PathBuf,
	/// Factor applied to both width and height
	#[arg(long, default_value_t = SCALE)]
	scale: f64,
	/// Only files with this extension are picked up
	#[arg(long, default_value = EXTENSION)]
	extension: String,
}

impl From<Args> for OptimizeCfg {
	fn from(args: Args) -> Self {
		Self {
			source_dir: args.source,
			target_dir: args.target,
			scale: args.scale,
			extension: args.extension,
		}
	}
}

fn main() -> Result<(), PngOptimizeError> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let cfg = OptimizeCfg::from(Args::parse());
	let report = optimize_dir(&cfg)?;

	info!("{} processed, {} failed", report.processed.len(), report.failed.len());

	Ok(())
}
