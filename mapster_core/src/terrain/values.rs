//! Closed enumerations for the values of selected property keys.
//!
//! Parsing is ASCII case-insensitive and never fails: unknown text maps to the `Unrecognized`
//! variant of each enumeration.

use std::fmt::{self, Display};

macro_rules! value_enum {
	($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
		$(#[$meta])*
		#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
		pub enum $name {
			$($variant,)+
			Unrecognized,
		}

		impl $name {
			/// Every recognized value, in declaration order.
			pub const ALL: &'static [$name] = &[$($name::$variant),+];

			/// Parses an OSM tag value, ignoring ASCII case.
			pub fn parse_str(value: &str) -> $name {
				Self::ALL
					.iter()
					.copied()
					.find(|known| known.as_str().eq_ignore_ascii_case(value))
					.unwrap_or($name::Unrecognized)
			}

			pub fn as_str(self) -> &'static str {
				match self {
					$($name::$variant => $text,)+
					$name::Unrecognized => "unrecognized",
				}
			}

			pub fn is_recognized(self) -> bool {
				self != $name::Unrecognized
			}
		}

		impl Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(self.as_str())
			}
		}
	};
}

value_enum!(
	/// Values of the `highway` key that are drawn as roads.
	HighwayType {
		Motorway => "motorway",
		Primary => "primary",
		Residential => "residential",
		Road => "road",
		Secondary => "secondary",
		Tertiary => "tertiary",
		Trunk => "trunk",
		Unclassified => "unclassified",
	}
);

value_enum!(
	/// Land-use subtypes found in the values of `landuse` and `boundary`.
	LandType {
		Allotments => "allotments",
		Basin => "basin",
		Brownfield => "brownfield",
		Cemetery => "cemetery",
		Commercial => "commercial",
		Construction => "construction",
		Farm => "farm",
		Forest => "forest",
		Grass => "grass",
		Greenfield => "greenfield",
		Industrial => "industrial",
		Meadow => "meadow",
		Military => "military",
		Orchard => "orchard",
		Quarry => "quarry",
		RecreationGround => "recreation_ground",
		Reservoir => "reservoir",
		Residential => "residential",
		Square => "square",
		WinterSports => "winter_sports",
	}
);

value_enum!(
	/// Settlement subtypes found in the values of `place`.
	UrbanType {
		City => "city",
		Hamlet => "hamlet",
		Locality => "locality",
		Town => "town",
	}
);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("motorway", HighwayType::Motorway)]
	#[case("Residential", HighwayType::Residential)]
	#[case("TRUNK", HighwayType::Trunk)]
	#[case("footway", HighwayType::Unrecognized)]
	#[case("", HighwayType::Unrecognized)]
	fn highway_values(#[case] text: &str, #[case] expected: HighwayType) {
		assert_eq!(HighwayType::parse_str(text), expected);
	}

	#[rstest]
	#[case("forest", LandType::Forest)]
	#[case("recreation_ground", LandType::RecreationGround)]
	#[case("Winter_Sports", LandType::WinterSports)]
	#[case("recreation ground", LandType::Unrecognized)]
	fn land_values(#[case] text: &str, #[case] expected: LandType) {
		assert_eq!(LandType::parse_str(text), expected);
	}

	#[rstest]
	#[case("city", UrbanType::City)]
	#[case("HAMLET", UrbanType::Hamlet)]
	#[case("village", UrbanType::Unrecognized)]
	fn urban_values(#[case] text: &str, #[case] expected: UrbanType) {
		assert_eq!(UrbanType::parse_str(text), expected);
	}

	#[test]
	fn member_counts() {
		assert_eq!(HighwayType::ALL.len(), 8);
		assert_eq!(LandType::ALL.len(), 20);
		assert_eq!(UrbanType::ALL.len(), 4);
		assert!(!LandType::ALL.contains(&LandType::Unrecognized));
	}

	#[test]
	fn display_and_recognition() {
		assert_eq!(LandType::WinterSports.to_string(), "winter_sports");
		assert!(UrbanType::Town.is_recognized());
		assert!(!UrbanType::Unrecognized.is_recognized());
	}
}
