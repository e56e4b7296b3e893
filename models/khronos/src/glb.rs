#[cfg(feature = "import")]
use byteorder::{
	LE,
	ReadBytesExt
};

use std::io::{
	self,
	Write
};

use assetkit_core::rtag4;

use crate::gltf::Mesh;

#[cfg(feature = "import")]
use import::GlbImportError;

pub const MAGIC: u32 = rtag4!(b"glTF");
pub const HEADER_SIZE: u32 = 12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Header {
	pub magic: u32,
	pub version: u32,
	pub size: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChunkType {
	Binary,
	Json,
	Unknown(u32),
}

impl ChunkType {
	pub const BINARY: u32 = rtag4!(b"BIN\x00");
	pub const JSON: u32 = rtag4!(b"JSON");

	pub fn from_tag(tag: u32) -> ChunkType {
		match tag {
			ChunkType::BINARY => ChunkType::Binary,
			ChunkType::JSON => ChunkType::Json,
			_ => ChunkType::Unknown(tag),
		}
	}

	pub fn tag(&self) -> u32 {
		match *self {
			ChunkType::Binary => ChunkType::BINARY,
			ChunkType::Json => ChunkType::JSON,
			ChunkType::Unknown(tag) => tag,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChunkHeader {
	pub size: u32,
	pub kind: ChunkType,
}

impl ChunkHeader {
	#[cfg(feature = "import")]
	fn read<R>(buf: &mut R) -> Result<ChunkHeader, GlbImportError>
	where
		R: ReadBytesExt,
	{
		Ok(ChunkHeader {
			size: buf.read_u32::<LE>()?,
			kind: ChunkType::from_tag(buf.read_u32::<LE>()?),
		})
	}
}

/// What a single pass over a GLB container turned up.
///
/// Only the first JSON chunk is ever looked at; the walk stops there, so any
/// later JSON or BIN chunks go unread.
#[derive(Clone, Debug, PartialEq)]
pub enum Inspection {
	/// The leading bytes (at most 4) did not spell `glTF`
	InvalidMagic(Vec<u8>),
	/// The JSON chunk has no `meshes` field
	NoMeshes,
	Meshes(Vec<Mesh>),
	/// The declared length was used up before any JSON chunk showed up
	NoJsonChunk,
}

impl Inspection {
	/// Writes the human-readable listing
	pub fn report<W>(&self, out: &mut W) -> io::Result<()>
	where
		W: Write,
	{
		match self {
			Inspection::InvalidMagic(_) => writeln!(out, "Not a valid GLB file"),
			Inspection::NoMeshes => writeln!(out, "No meshes found in JSON chunk"),
			Inspection::NoJsonChunk => writeln!(out, "No JSON chunk found"),
			Inspection::Meshes(meshes) => {
				writeln!(out, "Meshes found:")?;

				for (i, mesh) in meshes.iter().enumerate() {
					writeln!(out, "Index {}: {}", i, mesh.display_name())?;

					for material in mesh.primitives.iter().filter_map(|p| p.material) {
						writeln!(out, "  - Material Index: {}", material)?;
					}
				}

				Ok(())
			},
		}
	}
}

#[cfg(feature = "import")]
pub mod import {
	use byteorder::{
		LE,
		ReadBytesExt
	};

	use log::debug;

	use std::{
		fs::File,
		io::{
			BufReader,
			Read,
			Seek
		},
		path::Path,
		str::{
			self,
			Utf8Error
		}
	};

	use thiserror::Error;

	use assetkit_core::{
		io_ext::{
			ReadBinExt,
			SeekBinExt
		},
		tag_str
	};

	use crate::gltf::{
		self,
		SchemaError
	};

	use super::*;

	#[derive(Error, Debug)]
	pub enum GlbImportError {
		#[error("I/O error")]
		IO {
			#[from]
			source: io::Error,
		},
		#[error("JSON chunk is not valid UTF-8")]
		Utf8(#[from] Utf8Error),
		#[error("JSON chunk could not be parsed: {0}")]
		Json(#[from] json::Error),
		#[error("Unexpected glTF structure: {0}")]
		Schema(#[from] SchemaError),
	}

	/// Walks the container from the current stream position.
	///
	/// Non-JSON chunks are skipped by seeking past them, and the walk ends at
	/// the first JSON chunk. A bad magic is reported through
	/// [`Inspection::InvalidMagic`]; a truncated stream or broken JSON is an
	/// error.
	pub fn inspect<R>(buf: &mut R) -> Result<Inspection, GlbImportError>
	where
		R: Read + Seek,
	{
		let start = buf.stream_position()?;

		let magic = buf.read_at_most(4)?;
		if magic[..] != MAGIC.to_le_bytes()[..] {
			debug!("bad magic {:?}", magic);
			return Ok(Inspection::InvalidMagic(magic));
		}

		let header = Header {
			magic: MAGIC,
			version: buf.read_u32::<LE>()?,
			size: buf.read_u32::<LE>()?,
		};
		debug!("glTF binary v{}, {} bytes declared", header.version, header.size);

		while buf.stream_position()? - start < header.size as u64 {
			let chunk = ChunkHeader::read(buf)?;

			match chunk.kind {
				ChunkType::Json => {
					debug!("JSON chunk, {} bytes", chunk.size);
					let data = buf.read_vec(chunk.size as usize)?;
					let doc = json::parse(str::from_utf8(&data)?)?;

					return Ok(match gltf::meshes(&doc)? {
						Some(meshes) => Inspection::Meshes(meshes),
						None => Inspection::NoMeshes,
					});
				},
				kind => {
					debug!("skipping {} chunk, {} bytes", tag_str(kind.tag()), chunk.size);
					buf.skip(chunk.size as u64)?;
				},
			}
		}

		Ok(Inspection::NoJsonChunk)
	}

	/// Opens and inspects the GLB file at `path`
	pub fn inspect_file<P>(path: P) -> Result<Inspection, GlbImportError>
	where
		P: AsRef<Path>,
	{
		let mut buf = BufReader::new(File::open(path)?);
		inspect(&mut buf)
	}

}
