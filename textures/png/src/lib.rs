use glob::{
	GlobError,
	Pattern,
	PatternError
};

use image::{
	codecs::png::{
		CompressionType,
		FilterType as PngFilter,
		PngEncoder
	},
	imageops::FilterType,
	io::Reader,
	ImageEncoder,
	ImageError
};

use log::{
	error,
	info
};

use std::{
	fmt::{
		Display,
		Formatter,
		self
	},
	fs::{
		File,
		self
	},
	io::{
		BufWriter,
		self,
		Write
	},
	path::{
		Path,
		PathBuf
	}
};

use thiserror::Error;

use assetkit_core::texture::Extent;

pub const SOURCE_DIR: &str = "public/image_original";
pub const TARGET_DIR: &str = "public/image";
pub const SCALE: f64 = 0.25;
pub const EXTENSION: &str = "png";

#[derive(Error, Debug)]
pub enum PngOptimizeError {
	#[error("I/O error: {source}")]
	IO {
		#[from]
		source: io::Error,
	},
	#[error("{0}")]
	Image(#[from] ImageError),
	#[error("Bad file pattern: {0}")]
	Pattern(#[from] PatternError),
	#[error("Unreadable directory entry: {0}")]
	Glob(#[from] GlobError),
	#[error("Scale factor must be a positive number, got {0}")]
	Scale(f64),
	#[error("{original} scaled by {scale} leaves no pixels")]
	Extent {
		original: Extent,
		scale: f64,
	},
	#[error("No file name in {0}")]
	FileName(PathBuf),
}

#[derive(Clone, Debug, PartialEq)]
pub struct OptimizeCfg {
	pub source_dir: PathBuf,
	pub target_dir: PathBuf,
	pub scale: f64,
	pub extension: String,
}

impl Default for OptimizeCfg {
	fn default() -> Self {
		Self {
			source_dir: PathBuf::from(SOURCE_DIR),
			target_dir: PathBuf::from(TARGET_DIR),
			scale: SCALE,
			extension: EXTENSION.to_string(),
		}
	}
}

impl OptimizeCfg {
	pub fn validate(&self) -> Result<(), PngOptimizeError> {
		if !self.scale.is_finite() || self.scale <= 0.0 {
			return Err(PngOptimizeError::Scale(self.scale));
		}

		Ok(())
	}

	/// Glob pattern matching every candidate in the source directory
	pub fn pattern(&self) -> String {
		let dir = Pattern::escape(&self.source_dir.to_string_lossy());
		let files = format!("*.{}", Pattern::escape(&self.extension));

		Path::new(&dir).join(files).to_string_lossy().into_owned()
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProcessedImage {
	pub name: String,
	pub original: Extent,
	pub resized: Extent,
	pub original_size: u64,
	pub new_size: u64,
}

impl ProcessedImage {
	/// New file size as a percentage of the original
	pub fn ratio(&self) -> f64 {
		if self.original_size == 0 {
			return 0.0;
		}

		self.new_size as f64 / self.original_size as f64 * 100.0
	}
}

impl Display for ProcessedImage {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "Processed {}: {:.1}KB -> {:.1}KB ({:.1}%)", self.name,
			self.original_size as f64 / 1024.0, self.new_size as f64 / 1024.0, self.ratio())
	}
}

/// Outcome of a directory run. Files land in `failed` without stopping the rest.
#[derive(Debug, Default)]
pub struct BatchReport {
	pub processed: Vec<ProcessedImage>,
	pub failed: Vec<(PathBuf, PngOptimizeError)>,
}

/// Downscales one image into `target_dir`, keeping its file name.
///
/// The output is always PNG, written with the strongest lossless compression.
pub fn optimize_file(path: &Path, target_dir: &Path, scale: f64) -> Result<ProcessedImage, PngOptimizeError> {
	let name = path.file_name().ok_or_else(|| PngOptimizeError::FileName(path.to_path_buf()))?;
	let target = target_dir.join(name);

	let img = Reader::open(path)?.with_guessed_format()?.decode()?;
	let original = Extent::new(img.width(), img.height());
	let resized = original.scale(scale);
	if resized.is_empty() {
		return Err(PngOptimizeError::Extent {
			original: original,
			scale: scale,
		});
	}

	let img = img.resize_exact(resized.width, resized.height, FilterType::Lanczos3);

	let mut out = BufWriter::new(File::create(&target)?);
	PngEncoder::new_with_quality(&mut out, CompressionType::Best, PngFilter::Adaptive)
		.write_image(img.as_bytes(), img.width(), img.height(), img.color())?;
	out.flush()?;
	drop(out);

	Ok(ProcessedImage {
		name: name.to_string_lossy().into_owned(),
		original: original,
		resized: resized,
		original_size: fs::metadata(path)?.len(),
		new_size: fs::metadata(&target)?.len(),
	})
}

/// Runs [`optimize_file`] over every matching file in the source directory,
/// one at a time in alphabetical order.
pub fn optimize_dir(cfg: &OptimizeCfg) -> Result<BatchReport, PngOptimizeError> {
	cfg.validate()?;
	fs::create_dir_all(&cfg.target_dir)?;

	let entries: Vec<_> = glob::glob(&cfg.pattern())?.collect();
	info!("Found {} images to process.", entries.len());

	let mut report = BatchReport::default();

	for entry in entries {
		let path = match entry {
			Ok(path) => path,
			Err(e) => {
				error!("Error processing {}: {}", e.path().display(), e);
				report.failed.push((e.path().to_path_buf(), e.into()));
				continue;
			},
		};

		match optimize_file(&path, &cfg.target_dir, cfg.scale) {
			Ok(img) => {
				info!("{}", img);
				report.processed.push(img);
			},
			Err(e) => {
				error!("Error processing {}: {}", path.display(), e);
				report.failed.push((path, e));
			},
		}
	}

	Ok(report)
}
