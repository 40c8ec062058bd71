use mapster_core::{HighwayType, UrbanType};
use std::fmt::{self, Display};

/// Position of a shape in the back-to-front drawing order. Lower values are drawn first.
pub type DrawOrder = i32;

/// Subtypes of [`ShapeCategory::GeoFeature`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeoFeatureKind {
	Plain,
	Hills,
	Mountains,
	Forest,
	Desert,
	Unknown,
	Water,
	Residential,
}

impl GeoFeatureKind {
	/// Maps the value of a `natural` property to a subtype.
	pub fn from_natural(value: &str) -> GeoFeatureKind {
		const KINDS: [(&str, GeoFeatureKind); 15] = [
			("fell", GeoFeatureKind::Plain),
			("grassland", GeoFeatureKind::Plain),
			("heath", GeoFeatureKind::Plain),
			("moor", GeoFeatureKind::Plain),
			("scrub", GeoFeatureKind::Plain),
			("wetland", GeoFeatureKind::Plain),
			("wood", GeoFeatureKind::Forest),
			("tree_row", GeoFeatureKind::Forest),
			("bare_rock", GeoFeatureKind::Mountains),
			("rock", GeoFeatureKind::Mountains),
			("scree", GeoFeatureKind::Mountains),
			("beach", GeoFeatureKind::Desert),
			("sand", GeoFeatureKind::Desert),
			("water", GeoFeatureKind::Water),
			("hill", GeoFeatureKind::Hills),
		];
		KINDS
			.iter()
			.find(|(name, _)| name.eq_ignore_ascii_case(value))
			.map_or(GeoFeatureKind::Unknown, |(_, kind)| *kind)
	}

	pub fn as_str(self) -> &'static str {
		match self {
			GeoFeatureKind::Plain => "plain",
			GeoFeatureKind::Hills => "hills",
			GeoFeatureKind::Mountains => "mountains",
			GeoFeatureKind::Forest => "forest",
			GeoFeatureKind::Desert => "desert",
			GeoFeatureKind::Unknown => "unknown",
			GeoFeatureKind::Water => "water",
			GeoFeatureKind::Residential => "residential",
		}
	}
}

/// The kind of drawable shape a feature is classified as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeCategory {
	Road(HighwayType),
	Waterway { filled: bool },
	Border,
	PopulatedPlace(UrbanType),
	Railway,
	GeoFeature(GeoFeatureKind),
}

impl ShapeCategory {
	pub const GEO_FEATURE_ORDER: DrawOrder = 10;
	pub const WATERWAY_ORDER: DrawOrder = 20;
	pub const RAILWAY_ORDER: DrawOrder = 30;
	pub const ROAD_ORDER: DrawOrder = 40;
	pub const BORDER_ORDER: DrawOrder = 50;
	pub const POPULATED_PLACE_ORDER: DrawOrder = 60;

	/// The fixed draw order of the category. Subtypes never change it.
	pub fn draw_order(self) -> DrawOrder {
		match self {
			ShapeCategory::GeoFeature(_) => Self::GEO_FEATURE_ORDER,
			ShapeCategory::Waterway { .. } => Self::WATERWAY_ORDER,
			ShapeCategory::Railway => Self::RAILWAY_ORDER,
			ShapeCategory::Road(_) => Self::ROAD_ORDER,
			ShapeCategory::Border => Self::BORDER_ORDER,
			ShapeCategory::PopulatedPlace(_) => Self::POPULATED_PLACE_ORDER,
		}
	}

	pub fn name(self) -> &'static str {
		match self {
			ShapeCategory::Road(_) => "road",
			ShapeCategory::Waterway { .. } => "waterway",
			ShapeCategory::Border => "border",
			ShapeCategory::PopulatedPlace(_) => "populated place",
			ShapeCategory::Railway => "railway",
			ShapeCategory::GeoFeature(_) => "geo feature",
		}
	}
}

impl Display for ShapeCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ShapeCategory::Road(highway) => write!(f, "road/{highway}"),
			ShapeCategory::Waterway { filled: true } => f.write_str("waterway/filled"),
			ShapeCategory::PopulatedPlace(urban) => write!(f, "populated place/{urban}"),
			ShapeCategory::GeoFeature(kind) => write!(f, "geo feature/{}", kind.as_str()),
			other => f.write_str(other.name()),
		}
	}
}
