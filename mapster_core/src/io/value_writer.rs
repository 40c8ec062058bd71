//! The `ValueWriter` trait, counterpart of [`ValueReader`](super::ValueReader).
//!
//! The tile writer uses [`ValueWriter::position`] to compute the byte offsets it stores in block
//! headers and index entries.
//!
//! ```rust
//! use mapster_core::io::{ValueWriter, ValueWriterBlob};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut writer = ValueWriterBlob::new_le();
//!     writer.write_i32(-2)?;
//!     writer.write_u8(7)?;
//!     assert_eq!(writer.position()?, 5);
//!     assert_eq!(writer.into_blob().into_vec(), vec![0xFE, 0xFF, 0xFF, 0xFF, 7]);
//!     Ok(())
//! }
//! ```

use crate::Blob;
use anyhow::Result;
use byteorder::{ByteOrder, WriteBytesExt};
use std::io::Write;

/// Writes fixed-width values in the byte order `E`.
pub trait ValueWriter<E: ByteOrder> {
	fn get_writer(&mut self) -> &mut dyn Write;

	/// Number of bytes written so far.
	fn position(&mut self) -> Result<u64>;

	fn write_u8(&mut self, value: u8) -> Result<()> {
		Ok(self.get_writer().write_u8(value)?)
	}

	fn write_i32(&mut self, value: i32) -> Result<()> {
		Ok(self.get_writer().write_i32::<E>(value)?)
	}

	fn write_i64(&mut self, value: i64) -> Result<()> {
		Ok(self.get_writer().write_i64::<E>(value)?)
	}

	fn write_u64(&mut self, value: u64) -> Result<()> {
		Ok(self.get_writer().write_u64::<E>(value)?)
	}

	fn write_f64(&mut self, value: f64) -> Result<()> {
		Ok(self.get_writer().write_f64::<E>(value)?)
	}

	fn write_blob(&mut self, blob: &Blob) -> Result<()> {
		self.write_slice(blob.as_slice())
	}

	fn write_slice(&mut self, bytes: &[u8]) -> Result<()> {
		self.get_writer().write_all(bytes)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::super::ValueWriterBlob;
	use super::*;

	#[test]
	fn integers_are_little_endian() -> Result<()> {
		let mut writer = ValueWriterBlob::new_le();
		writer.write_u8(255)?;
		writer.write_i32(-3)?;
		writer.write_u64(0x0102_0304_0506_0708)?;
		writer.write_i64(-1)?;
		assert_eq!(
			writer.into_blob().into_vec(),
			vec![
				255, 0xFD, 0xFF, 0xFF, 0xFF, 8, 7, 6, 5, 4, 3, 2, 1, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF
			]
		);
		Ok(())
	}

	#[test]
	fn float() -> Result<()> {
		let mut writer = ValueWriterBlob::new_le();
		writer.write_f64(1.0)?;
		assert_eq!(writer.into_blob().into_vec(), vec![0, 0, 0, 0, 0, 0, 0xF0, 0x3F]);
		Ok(())
	}

	#[test]
	fn raw_bytes() -> Result<()> {
		let mut writer = ValueWriterBlob::new_le();
		writer.write_slice(b"ab")?;
		writer.write_blob(&Blob::from(vec![9u8]))?;
		assert_eq!(writer.position()?, 3);
		assert_eq!(writer.into_blob().into_vec(), vec![b'a', b'b', 9]);
		Ok(())
	}
}
