//! The ordered rule list of the feature classifier.
//!
//! Rules are evaluated top to bottom and the first rule that returns a category decides the shape.
//! Later rules are never consulted, so a feature tagged both `highway` and `water` is a road.

use super::{GeoFeatureKind, PlacePredicates, ShapeCategory};
use mapster_core::{GeometryType, HighwayType, LandType, MapFeatureData, TerrainKey};
use std::fmt;

type Matcher = fn(&MapFeatureData<'_>, &dyn PlacePredicates) -> Option<ShapeCategory>;

/// One named step of the classification.
pub struct Rule {
	name: &'static str,
	matcher: Matcher,
}

impl Rule {
	const fn new(name: &'static str, matcher: Matcher) -> Rule {
		Rule { name, matcher }
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Returns the category if this rule matches `feature`.
	pub fn apply(&self, feature: &MapFeatureData<'_>, predicates: &dyn PlacePredicates) -> Option<ShapeCategory> {
		(self.matcher)(feature, predicates)
	}
}

impl fmt::Debug for Rule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Rule").field(&self.name).finish()
	}
}

const LAND_RESIDENTIAL: &[LandType] = &[
	LandType::Cemetery,
	LandType::Industrial,
	LandType::Commercial,
	LandType::Square,
	LandType::Construction,
	LandType::Military,
	LandType::Quarry,
	LandType::Brownfield,
];

const LAND_PLAIN: &[LandType] = &[
	LandType::Farm,
	LandType::Meadow,
	LandType::Grass,
	LandType::Greenfield,
	LandType::RecreationGround,
	LandType::WinterSports,
	LandType::Allotments,
];

pub static RULES: [Rule; 14] = [
	Rule::new("highway", |f, _| {
		values(f, TerrainKey::Highway)
			.map(HighwayType::parse_str)
			.find(|highway| highway.is_recognized())
			.map(ShapeCategory::Road)
	}),
	Rule::new("water", |f, _| {
		(f.has_property(TerrainKey::Water) && f.geometry_type() != GeometryType::Point).then(|| {
			ShapeCategory::Waterway {
				filled: f.geometry_type() == GeometryType::Polygon,
			}
		})
	}),
	Rule::new("border", |f, p| p.should_be_border(f).then_some(ShapeCategory::Border)),
	Rule::new("populated place", |f, p| {
		p.populated_place(f).map(ShapeCategory::PopulatedPlace)
	}),
	Rule::new("railway", |f, _| {
		f.has_property(TerrainKey::Railway).then_some(ShapeCategory::Railway)
	}),
	Rule::new("natural", |f, _| {
		if !is_polygon(f) {
			return None;
		}
		f.property(TerrainKey::Natural)
			.map(|natural| ShapeCategory::GeoFeature(GeoFeatureKind::from_natural(natural)))
	}),
	Rule::new("forest boundary", |f, _| {
		has_land_type(f, TerrainKey::Boundary, &[LandType::Forest]).then_some(forest())
	}),
	Rule::new("forest landuse", |f, _| {
		has_land_type(f, TerrainKey::Landuse, &[LandType::Forest, LandType::Orchard]).then_some(forest())
	}),
	Rule::new("residential landuse", |f, _| {
		(is_polygon(f) && has_land_type(f, TerrainKey::Landuse, LAND_RESIDENTIAL)).then_some(residential())
	}),
	Rule::new("plain landuse", |f, _| {
		(is_polygon(f) && has_land_type(f, TerrainKey::Landuse, LAND_PLAIN))
			.then_some(ShapeCategory::GeoFeature(GeoFeatureKind::Plain))
	}),
	Rule::new("water landuse", |f, _| {
		(is_polygon(f) && has_land_type(f, TerrainKey::Landuse, &[LandType::Reservoir, LandType::Basin]))
			.then_some(ShapeCategory::GeoFeature(GeoFeatureKind::Water))
	}),
	Rule::new("building", |f, _| {
		(is_polygon(f) && f.has_property(TerrainKey::Building)).then_some(residential())
	}),
	Rule::new("leisure", |f, _| {
		(is_polygon(f) && f.has_property(TerrainKey::Leisure)).then_some(residential())
	}),
	Rule::new("amenity", |f, _| {
		(is_polygon(f) && f.has_property(TerrainKey::Amenity)).then_some(residential())
	}),
];

fn values<'a>(feature: &MapFeatureData<'a>, key: TerrainKey) -> impl Iterator<Item = &'a str> {
	feature
		.properties()
		.iter()
		.filter(move |p| p.key == key)
		.map(|p| p.value)
}

fn has_land_type(feature: &MapFeatureData<'_>, key: TerrainKey, kinds: &[LandType]) -> bool {
	values(feature, key).any(|value| kinds.contains(&LandType::parse_str(value)))
}

fn is_polygon(feature: &MapFeatureData<'_>) -> bool {
	feature.geometry_type() == GeometryType::Polygon
}

fn forest() -> ShapeCategory {
	ShapeCategory::GeoFeature(GeoFeatureKind::Forest)
}

fn residential() -> ShapeCategory {
	ShapeCategory::GeoFeature(GeoFeatureKind::Residential)
}
