//! The header at the start of every tile block.
//!
//! | Field                    | Offset | Width |
//! |--------------------------|--------|-------|
//! | FeaturesCount            | 0      | 4     |
//! | CoordinatesCount         | 4      | 4     |
//! | StringCount              | 8      | 4     |
//! | CharactersCount          | 12     | 4     |
//! | CoordinatesOffsetInBytes | 16     | 8     |
//! | StringsOffsetInBytes     | 24     | 8     |
//! | CharactersOffsetInBytes  | 32     | 8     |
//!
//! The three offsets are absolute positions in the file buffer.

use super::Record;
use crate::io::{ValueReader, ValueWriter};
use anyhow::Result;
use byteorder::LE;

/// Pool sizes and pool positions of one tile block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TileBlockHeader {
	/// Number of renderable features in the tile.
	pub features_count: i32,
	/// Number of coordinates used by the features of the tile.
	pub coordinates_count: i32,
	/// Number of string entries used by the features of the tile.
	pub string_count: i32,
	/// Number of bytes in the tile's character pool.
	pub characters_count: i32,
	pub coordinates_offset_in_bytes: u64,
	pub strings_offset_in_bytes: u64,
	pub characters_offset_in_bytes: u64,
}

impl Record for TileBlockHeader {
	const LENGTH: u64 = 40;
	const NAME: &'static str = "tile block header";

	fn read(reader: &mut dyn ValueReader<'_, LE>) -> Result<Self> {
		Ok(TileBlockHeader {
			features_count: reader.read_i32()?,
			coordinates_count: reader.read_i32()?,
			string_count: reader.read_i32()?,
			characters_count: reader.read_i32()?,
			coordinates_offset_in_bytes: reader.read_u64()?,
			strings_offset_in_bytes: reader.read_u64()?,
			characters_offset_in_bytes: reader.read_u64()?,
		})
	}

	fn write(&self, writer: &mut dyn ValueWriter<LE>) -> Result<()> {
		writer.write_i32(self.features_count)?;
		writer.write_i32(self.coordinates_count)?;
		writer.write_i32(self.string_count)?;
		writer.write_i32(self.characters_count)?;
		writer.write_u64(self.coordinates_offset_in_bytes)?;
		writer.write_u64(self.strings_offset_in_bytes)?;
		writer.write_u64(self.characters_offset_in_bytes)
	}
}
