#[cfg(feature = "io_ext")]
pub mod io_ext;

pub mod texture;

/// Converts a 4-byte string into a 32-bit little endian integer.
/// Byte strings longer than 4 bytes are truncated.
#[macro_export]
macro_rules! rtag4 {
	($b4: literal) => {
		u32::from_le_bytes([$b4[0], $b4[1], $b4[2], $b4[3]])
	}
}

/// Renders a little endian 4-byte tag as text, escaping anything unprintable.
pub fn tag_str(tag: u32) -> String {
	tag.to_le_bytes().iter().flat_map(|b| std::ascii::escape_default(*b)).map(char::from).collect()
}
