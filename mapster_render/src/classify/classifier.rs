use super::{DrawOrder, OsmPredicates, PlacePredicates, RULES, Rule, ShapeCategory};
use log::trace;
use mapster_core::MapFeatureData;

/// Assigns each decoded feature at most one shape category.
pub struct FeatureClassifier {
	predicates: Box<dyn PlacePredicates>,
}

impl FeatureClassifier {
	/// A classifier using [`OsmPredicates`].
	pub fn new() -> FeatureClassifier {
		FeatureClassifier::with_predicates(OsmPredicates)
	}

	pub fn with_predicates(predicates: impl PlacePredicates + 'static) -> FeatureClassifier {
		FeatureClassifier {
			predicates: Box::new(predicates),
		}
	}

	/// The rules in evaluation order.
	pub fn rules() -> &'static [Rule] {
		&RULES
	}

	/// Returns the category and draw order of the first matching rule, or `None` if no rule matches.
	pub fn classify(&self, feature: &MapFeatureData<'_>) -> Option<(ShapeCategory, DrawOrder)> {
		self
			.matching_rule(feature)
			.map(|(_, category)| (category, category.draw_order()))
	}

	/// Like [`FeatureClassifier::classify`], but also names the rule that decided.
	pub fn matching_rule(&self, feature: &MapFeatureData<'_>) -> Option<(&'static Rule, ShapeCategory)> {
		let found = RULES
			.iter()
			.find_map(|rule| rule.apply(feature, self.predicates.as_ref()).map(|category| (rule, category)));
		if found.is_none() {
			trace!("feature {} matches no rule", feature.id());
		}
		found
	}
}

impl Default for FeatureClassifier {
	fn default() -> Self {
		FeatureClassifier::new()
	}
}

impl std::fmt::Debug for FeatureClassifier {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FeatureClassifier").field("rules", &RULES.len()).finish()
	}
}
