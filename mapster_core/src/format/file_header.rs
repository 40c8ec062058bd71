//! The header at the very start of every tile file.
//!
//! | Field     | Offset | Width |
//! |-----------|--------|-------|
//! | Version   | 0      | 8     |
//! | TileCount | 8      | 4     |

use super::Record;
use crate::io::{ValueReader, ValueWriter};
use anyhow::Result;
use byteorder::LE;

/// The only format version this crate reads and writes.
pub const FORMAT_VERSION: i64 = 1;

/// Format version and number of entries in the tile index that follows the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
	pub version: i64,
	pub tile_count: i32,
}

impl FileHeader {
	/// Creates a header for the current [`FORMAT_VERSION`].
	pub fn new(tile_count: i32) -> FileHeader {
		FileHeader {
			version: FORMAT_VERSION,
			tile_count,
		}
	}
}

impl Record for FileHeader {
	const LENGTH: u64 = 12;
	const NAME: &'static str = "file header";

	fn read(reader: &mut dyn ValueReader<'_, LE>) -> Result<Self> {
		Ok(FileHeader {
			version: reader.read_i64()?,
			tile_count: reader.read_i32()?,
		})
	}

	fn write(&self, writer: &mut dyn ValueWriter<LE>) -> Result<()> {
		writer.write_i64(self.version)?;
		writer.write_i32(self.tile_count)
	}
}
