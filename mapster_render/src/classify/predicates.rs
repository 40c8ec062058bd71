use mapster_core::{GeometryType, MapFeatureData, TerrainKey, UrbanType};

/// Decides which features are drawn as borders and which as populated places.
///
/// The classifier consults these predicates at fixed positions of its rule list. Implementations
/// must be shareable between tessellation threads.
pub trait PlacePredicates: Send + Sync {
	fn should_be_border(&self, feature: &MapFeatureData<'_>) -> bool;

	/// Returns the settlement type if `feature` is a populated place.
	fn populated_place(&self, feature: &MapFeatureData<'_>) -> Option<UrbanType>;

	fn should_be_populated_place(&self, feature: &MapFeatureData<'_>) -> bool {
		self.populated_place(feature).is_some()
	}
}

/// Predicates for OpenStreetMap tagging.
///
/// - border: `boundary=administrative` together with `admin_level=2`
/// - populated place: a point with a `place` value of city, town, locality or hamlet
#[derive(Clone, Copy, Debug, Default)]
pub struct OsmPredicates;

impl PlacePredicates for OsmPredicates {
	fn should_be_border(&self, feature: &MapFeatureData<'_>) -> bool {
		let administrative = feature
			.properties()
			.iter()
			.any(|p| p.key == TerrainKey::Boundary && p.value.eq_ignore_ascii_case("administrative"));
		let national = feature
			.properties()
			.iter()
			.any(|p| p.key == TerrainKey::AdminLevel && p.value.trim() == "2");
		administrative && national
	}

	fn populated_place(&self, feature: &MapFeatureData<'_>) -> Option<UrbanType> {
		if feature.geometry_type() != GeometryType::Point {
			return None;
		}
		feature
			.properties()
			.iter()
			.filter(|p| p.key == TerrainKey::Place)
			.map(|p| UrbanType::parse_str(p.value))
			.find(|urban| urban.is_recognized())
	}
}
