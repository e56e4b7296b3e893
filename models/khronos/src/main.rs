use clap::Parser;

use std::{
	io::{
		self,
		Write
	},
	path::PathBuf
};

use assetkit_models_khronos::glb::import::{
	GlbImportError,
	inspect_file
};

#[derive(Parser, Debug)]
#[command(author, version, about = "List the meshes and material indices stored in a GLB file")]
struct Args {
	/// GLB file to inspect
	#[arg(default_value = "public/cassette_new.glb")]
	file: PathBuf,
}

fn main() -> Result<(), GlbImportError> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let args = Args::parse();
	let inspection = inspect_file(&args.file)?;

	let mut out = io::stdout().lock();
	inspection.report(&mut out)?;
	out.flush()?;

	Ok(())
}
