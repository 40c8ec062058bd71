use crate::TileError;
use std::fmt::{self, Display};

/// Geometry of a map feature, stored as a single byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GeometryType {
	Polyline = 0,
	Polygon = 1,
	Point = 2,
}

impl GeometryType {
	pub fn as_u8(self) -> u8 {
		self as u8
	}
}

impl TryFrom<u8> for GeometryType {
	type Error = TileError;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			0 => Ok(GeometryType::Polyline),
			1 => Ok(GeometryType::Polygon),
			2 => Ok(GeometryType::Point),
			other => Err(TileError::corrupt(format!("unknown geometry type {other}"))),
		}
	}
}

impl Display for GeometryType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			GeometryType::Polyline => "polyline",
			GeometryType::Polygon => "polygon",
			GeometryType::Point => "point",
		})
	}
}
