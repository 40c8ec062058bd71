//! A geographic coordinate as stored in a tile's coordinate pool.
//!
//! | Field     | Offset | Width |
//! |-----------|--------|-------|
//! | Latitude  | 0      | 8     |
//! | Longitude | 8      | 8     |

use super::Record;
use crate::io::{ValueReader, ValueWriter};
use anyhow::Result;
use byteorder::LE;

/// Latitude and longitude in degrees.
///
/// Equality compares the stored values exactly. Two coordinates are only equal if they were decoded
/// from, or will encode to, the same bytes (`-0.0` and `0.0` aside).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinate {
	pub latitude: f64,
	pub longitude: f64,
}

impl Coordinate {
	pub fn new(latitude: f64, longitude: f64) -> Coordinate {
		Coordinate { latitude, longitude }
	}
}

impl Record for Coordinate {
	const LENGTH: u64 = 16;
	const NAME: &'static str = "coordinate";

	fn read(reader: &mut dyn ValueReader<'_, LE>) -> Result<Self> {
		Ok(Coordinate {
			latitude: reader.read_f64()?,
			longitude: reader.read_f64()?,
		})
	}

	fn write(&self, writer: &mut dyn ValueWriter<LE>) -> Result<()> {
		writer.write_f64(self.latitude)?;
		writer.write_f64(self.longitude)
	}
}
