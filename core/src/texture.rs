use std::fmt::{
	Display,
	Formatter,
	self
};

/// Pixel dimensions of an image
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Extent {
	pub width: u32,
	pub height: u32,
}

impl Extent {
	pub fn new(width: u32, height: u32) -> Extent {
		Extent {
			width: width,
			height: height,
		}
	}

	/// Multiplies both axes by `factor`, rounding down
	pub fn scale(&self, factor: f64) -> Extent {
		Extent {
			width: (self.width as f64 * factor).floor() as u32,
			height: (self.height as f64 * factor).floor() as u32,
		}
	}

	/// Whether either axis has collapsed to zero
	pub fn is_empty(&self) -> bool {
		self.width == 0 || self.height == 0
	}
}

impl Display for Extent {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}", self.width, self.height)
	}
}
