//! The on-disk record of one map feature.
//!
//! | Field            | Offset | Width |
//! |------------------|--------|-------|
//! | Id               | 0      | 8     |
//! | LabelOffset      | 8      | 4     |
//! | GeometryType     | 12     | 1     |
//! | CoordinateOffset | 13     | 4     |
//! | CoordinateCount  | 17     | 4     |
//! | PropertiesOffset | 21     | 4     |
//! | PropertyCount    | 25     | 4     |
//!
//! `LabelOffset` indexes the string pool and is negative for features without a label.
//! `CoordinateOffset` indexes the coordinate pool and `PropertiesOffset` the property pool.

use super::{GeometryType, Record};
use crate::io::{ValueReader, ValueWriter};
use anyhow::Result;
use byteorder::LE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapFeature {
	pub id: i64,
	pub label_offset: i32,
	pub geometry_type: GeometryType,
	pub coordinate_offset: i32,
	pub coordinate_count: i32,
	pub properties_offset: i32,
	pub property_count: i32,
}

impl MapFeature {
	/// Label offset of a feature without a label.
	pub const NO_LABEL: i32 = -1;

	pub fn has_label(&self) -> bool {
		self.label_offset >= 0
	}
}

impl Record for MapFeature {
	const LENGTH: u64 = 29;
	const NAME: &'static str = "map feature";

	fn read(reader: &mut dyn ValueReader<'_, LE>) -> Result<Self> {
		Ok(MapFeature {
			id: reader.read_i64()?,
			label_offset: reader.read_i32()?,
			geometry_type: GeometryType::try_from(reader.read_u8()?)?,
			coordinate_offset: reader.read_i32()?,
			coordinate_count: reader.read_i32()?,
			properties_offset: reader.read_i32()?,
			property_count: reader.read_i32()?,
		})
	}

	fn write(&self, writer: &mut dyn ValueWriter<LE>) -> Result<()> {
		writer.write_i64(self.id)?;
		writer.write_i32(self.label_offset)?;
		writer.write_u8(self.geometry_type.as_u8())?;
		writer.write_i32(self.coordinate_offset)?;
		writer.write_i32(self.coordinate_count)?;
		writer.write_i32(self.properties_offset)?;
		writer.write_i32(self.property_count)
	}
}
