use std::io::{
	Read,
	Result,
	Seek,
	SeekFrom
};

pub trait ReadBinExt: Read {
	/// Reads up to `len` bytes, stopping early if the stream runs out
	#[inline]
	fn read_at_most(&mut self, len: usize) -> Result<Vec<u8>> {
		let mut data = Vec::with_capacity(len);
		Read::take(&mut *self, len as u64).read_to_end(&mut data)?;

		Ok(data)
	}

	/// Reads exactly `len` bytes into a new buffer
	#[inline]
	fn read_vec(&mut self, len: usize) -> Result<Vec<u8>> {
		let mut data = vec![0; len];
		self.read_exact(&mut data)?;

		Ok(data)
	}
}

impl<R> ReadBinExt for R
where
	R: Read + ?Sized,
{
}

pub trait SeekBinExt: Seek {
	/// Advances the stream position by `len` bytes without reading them
	#[inline]
	fn skip(&mut self, len: u64) -> Result<u64> {
		self.seek(SeekFrom::Current(len as i64))
	}
}

impl<S> SeekBinExt for S
where
	S: Seek + ?Sized,
{
}
