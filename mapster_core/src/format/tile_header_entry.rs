//! One entry of the tile index that follows the file header.
//!
//! | Field         | Offset | Width |
//! |---------------|--------|-------|
//! | ID            | 0      | 4     |
//! | OffsetInBytes | 4      | 8     |

use super::{FileHeader, Record};
use crate::io::{ValueReader, ValueWriter};
use anyhow::Result;
use byteorder::LE;

/// Maps a tile identifier to the absolute file offset of its tile block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileHeaderEntry {
	pub id: i32,
	pub offset_in_bytes: u64,
}

impl TileHeaderEntry {
	pub fn new(id: i32, offset_in_bytes: u64) -> TileHeaderEntry {
		TileHeaderEntry { id, offset_in_bytes }
	}

	/// Absolute file offset of the `index`-th entry of the tile index.
	pub fn position_in_file(index: u64) -> u64 {
		FileHeader::LENGTH + index * Self::LENGTH
	}
}

impl Record for TileHeaderEntry {
	const LENGTH: u64 = 12;
	const NAME: &'static str = "tile index entry";

	fn read(reader: &mut dyn ValueReader<'_, LE>) -> Result<Self> {
		Ok(TileHeaderEntry {
			id: reader.read_i32()?,
			offset_in_bytes: reader.read_u64()?,
		})
	}

	fn write(&self, writer: &mut dyn ValueWriter<LE>) -> Result<()> {
		writer.write_i32(self.id)?;
		writer.write_u64(self.offset_in_bytes)
	}
}
