//! A reference to a string inside a tile's character pool.
//!
//! | Field  | Offset | Width |
//! |--------|--------|-------|
//! | Offset | 0      | 4     |
//! | Length | 4      | 4     |

use super::Record;
use crate::io::{ValueReader, ValueWriter};
use anyhow::Result;
use byteorder::LE;

/// Offset and length, in bytes, of one string inside the character pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StringEntry {
	pub offset: i32,
	pub length: i32,
}

impl StringEntry {
	pub fn new(offset: i32, length: i32) -> StringEntry {
		StringEntry { offset, length }
	}
}

impl Record for StringEntry {
	const LENGTH: u64 = 8;
	const NAME: &'static str = "string entry";

	fn read(reader: &mut dyn ValueReader<'_, LE>) -> Result<Self> {
		Ok(StringEntry {
			offset: reader.read_i32()?,
			length: reader.read_i32()?,
		})
	}

	fn write(&self, writer: &mut dyn ValueWriter<LE>) -> Result<()> {
		writer.write_i32(self.offset)?;
		writer.write_i32(self.length)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn field_offsets() -> Result<()> {
		let blob = StringEntry::new(0x0102_0304, 0x0506_0708).to_blob()?;
		assert_eq!(blob.into_vec(), vec![4, 3, 2, 1, 8, 7, 6, 5]);
		Ok(())
	}

	#[rstest]
	#[case(0, 0)]
	#[case(123_456, 789)]
	#[case(-1, -1)]
	#[case(i32::MIN, i32::MAX)]
	#[case(i32::MAX, i32::MIN)]
	fn conversion(#[case] offset: i32, #[case] length: i32) -> Result<()> {
		let entry = StringEntry::new(offset, length);
		let blob = entry.to_blob()?;
		assert_eq!(blob.len(), StringEntry::LENGTH);
		assert_eq!(StringEntry::from_bytes(blob.as_slice())?, entry);
		Ok(())
	}
}
