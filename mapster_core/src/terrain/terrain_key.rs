//! The closed set of property keys a tile can carry.
//!
//! Keys are stored as `i32` discriminants so the hot path never compares strings. A discriminant
//! outside the known range decodes to [`TerrainKey::Unrecognized`] instead of failing.

use std::fmt::{self, Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TerrainKey {
	AdminLevel,
	Amenity,
	Boundary,
	Building,
	Farm,
	Highway,
	Landuse,
	Leisure,
	Name,
	Natural,
	Place,
	Railway,
	Reservoir,
	Residential,
	Water,
	/// A discriminant that is not part of this enumeration.
	Unrecognized(i32),
}

impl TerrainKey {
	/// Every recognized key, in discriminant order.
	pub const ALL: [TerrainKey; 15] = [
		TerrainKey::AdminLevel,
		TerrainKey::Amenity,
		TerrainKey::Boundary,
		TerrainKey::Building,
		TerrainKey::Farm,
		TerrainKey::Highway,
		TerrainKey::Landuse,
		TerrainKey::Leisure,
		TerrainKey::Name,
		TerrainKey::Natural,
		TerrainKey::Place,
		TerrainKey::Railway,
		TerrainKey::Reservoir,
		TerrainKey::Residential,
		TerrainKey::Water,
	];

	pub fn from_i32(value: i32) -> TerrainKey {
		usize::try_from(value)
			.ok()
			.and_then(|index| Self::ALL.get(index).copied())
			.unwrap_or(TerrainKey::Unrecognized(value))
	}

	pub fn as_i32(self) -> i32 {
		match self {
			TerrainKey::AdminLevel => 0,
			TerrainKey::Amenity => 1,
			TerrainKey::Boundary => 2,
			TerrainKey::Building => 3,
			TerrainKey::Farm => 4,
			TerrainKey::Highway => 5,
			TerrainKey::Landuse => 6,
			TerrainKey::Leisure => 7,
			TerrainKey::Name => 8,
			TerrainKey::Natural => 9,
			TerrainKey::Place => 10,
			TerrainKey::Railway => 11,
			TerrainKey::Reservoir => 12,
			TerrainKey::Residential => 13,
			TerrainKey::Water => 14,
			TerrainKey::Unrecognized(value) => value,
		}
	}

	/// The OSM tag name of this key, or `None` for [`TerrainKey::Unrecognized`].
	pub fn as_str(self) -> Option<&'static str> {
		Some(match self {
			TerrainKey::AdminLevel => "admin_level",
			TerrainKey::Amenity => "amenity",
			TerrainKey::Boundary => "boundary",
			TerrainKey::Building => "building",
			TerrainKey::Farm => "farm",
			TerrainKey::Highway => "highway",
			TerrainKey::Landuse => "landuse",
			TerrainKey::Leisure => "leisure",
			TerrainKey::Name => "name",
			TerrainKey::Natural => "natural",
			TerrainKey::Place => "place",
			TerrainKey::Railway => "railway",
			TerrainKey::Reservoir => "reservoir",
			TerrainKey::Residential => "residential",
			TerrainKey::Water => "water",
			TerrainKey::Unrecognized(_) => return None,
		})
	}

	/// Looks up a key by its OSM tag name, ignoring ASCII case.
	pub fn parse_str(name: &str) -> Option<TerrainKey> {
		Self::ALL
			.into_iter()
			.find(|key| key.as_str().is_some_and(|known| known.eq_ignore_ascii_case(name)))
	}

	pub fn is_recognized(self) -> bool {
		!matches!(self, TerrainKey::Unrecognized(_))
	}
}

impl Display for TerrainKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.as_str() {
			Some(name) => f.write_str(name),
			None => write!(f, "unrecognized({})", self.as_i32()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn discriminants_follow_declaration_order() {
		for (index, key) in TerrainKey::ALL.iter().enumerate() {
			assert_eq!(key.as_i32(), index as i32);
			assert_eq!(TerrainKey::from_i32(index as i32), *key);
		}
	}

	#[rstest]
	#[case(-1)]
	#[case(15)]
	#[case(i32::MAX)]
	fn unknown_discriminants(#[case] value: i32) {
		let key = TerrainKey::from_i32(value);
		assert_eq!(key, TerrainKey::Unrecognized(value));
		assert!(!key.is_recognized());
		assert_eq!(key.as_i32(), value);
		assert_eq!(key.as_str(), None);
	}

	#[rstest]
	#[case("highway", Some(TerrainKey::Highway))]
	#[case("ADMIN_LEVEL", Some(TerrainKey::AdminLevel))]
	#[case("Water", Some(TerrainKey::Water))]
	#[case("surface", None)]
	fn parse_names(#[case] name: &str, #[case] expected: Option<TerrainKey>) {
		assert_eq!(TerrainKey::parse_str(name), expected);
	}

	#[test]
	fn display() {
		assert_eq!(TerrainKey::Landuse.to_string(), "landuse");
		assert_eq!(TerrainKey::Unrecognized(99).to_string(), "unrecognized(99)");
	}
}
