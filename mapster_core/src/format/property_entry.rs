//! One key/value pair of a tile's property pool.
//!
//! | Field | Offset | Width |
//! |-------|--------|-------|
//! | Key   | 0      | 4     |
//! | Value | 4      | 4     |
//!
//! `Key` is the discriminant of a [`TerrainKey`](crate::TerrainKey), `Value` is the index of a
//! [`StringEntry`](super::StringEntry) in the tile's string pool.

use super::Record;
use crate::io::{ValueReader, ValueWriter};
use anyhow::Result;
use byteorder::LE;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PropertyEntry {
	pub key: i32,
	pub value: i32,
}

impl PropertyEntry {
	pub fn new(key: i32, value: i32) -> PropertyEntry {
		PropertyEntry { key, value }
	}
}

impl Record for PropertyEntry {
	const LENGTH: u64 = 8;
	const NAME: &'static str = "property entry";

	fn read(reader: &mut dyn ValueReader<'_, LE>) -> Result<Self> {
		Ok(PropertyEntry {
			key: reader.read_i32()?,
			value: reader.read_i32()?,
		})
	}

	fn write(&self, writer: &mut dyn ValueWriter<LE>) -> Result<()> {
		writer.write_i32(self.key)?;
		writer.write_i32(self.value)
	}
}
