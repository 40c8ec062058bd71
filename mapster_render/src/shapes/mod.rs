//! Drawable shapes built from classified features.
//!
//! Every shape owns its projected [`ScreenPath`]. The renderer moves that path onto the canvas with
//! [`Shape::translate_and_scale`] and then calls [`Shape::render_onto`].

mod border;
mod geo_feature;
mod path;
mod populated_place;
mod railway;
mod road;
pub mod style;
mod waterway;

pub use border::*;
pub use geo_feature::*;
pub use path::*;
pub use populated_place::*;
pub use railway::*;
pub use road::*;
pub use waterway::*;

use crate::{DrawOrder, ShapeCategory, surface::DrawingSurface};
use geo::Coord;
use mapster_core::MapFeatureData;
use std::fmt::Debug;

pub trait Shape: Send + Debug {
	fn category(&self) -> ShapeCategory;

	fn path(&self) -> &ScreenPath;

	fn path_mut(&mut self) -> &mut ScreenPath;

	fn render_onto(&self, surface: &mut dyn DrawingSurface);

	fn draw_order(&self) -> DrawOrder {
		self.category().draw_order()
	}

	fn screen_coordinates(&self) -> &[Coord<f64>] {
		self.path().points()
	}

	fn translate_and_scale(&mut self, origin_x: f64, origin_y: f64, scale: f64, canvas_height: f64) {
		self
			.path_mut()
			.translate_and_scale(origin_x, origin_y, scale, canvas_height);
	}
}

/// Builds the shape for a feature that was classified as `category`.
pub fn build_shape(category: ShapeCategory, feature: &MapFeatureData<'_>) -> Box<dyn Shape> {
	let path = ScreenPath::from_feature(feature);
	match category {
		ShapeCategory::Road(highway) => Box::new(Road::new(path, highway)),
		ShapeCategory::Waterway { filled } => Box::new(Waterway::new(path, filled)),
		ShapeCategory::Border => Box::new(Border::new(path)),
		ShapeCategory::PopulatedPlace(urban) => Box::new(PopulatedPlace::new(path, urban, feature.label())),
		ShapeCategory::Railway => Box::new(Railway::new(path)),
		ShapeCategory::GeoFeature(kind) => Box::new(GeoFeature::new(path, kind)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		GeoFeatureKind,
		surface::{DrawCommand, RecordingSurface},
		test_utils::decode_single,
	};
	use approx::assert_abs_diff_eq;
	use mapster_core::{FeatureRecord, GeometryType, HighwayType, UrbanType};

	fn record(geometry: GeometryType) -> FeatureRecord {
		FeatureRecord::new(1, geometry)
			.with_label("Mitte")
			.with_coordinates([(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)])
	}

	fn rendered(category: ShapeCategory) -> Vec<DrawCommand> {
		let encoded = decode_single(&record(GeometryType::Polygon));
		let shape = build_shape(category, &encoded.feature());
		assert_eq!(shape.category(), category);
		assert_eq!(shape.draw_order(), category.draw_order());
		assert_eq!(shape.screen_coordinates().len(), 3);
		let mut surface = RecordingSurface::new(10, 10);
		shape.render_onto(&mut surface);
		surface.into_commands()
	}

	#[test]
	fn line_shapes_are_stroked() {
		for category in [
			ShapeCategory::Road(HighwayType::Primary),
			ShapeCategory::Waterway { filled: false },
			ShapeCategory::Border,
			ShapeCategory::Railway,
		] {
			let commands = rendered(category);
			assert_eq!(commands.len(), 1, "{category}");
			assert!(matches!(commands[0], DrawCommand::Polyline { .. }), "{category}");
		}
	}

	#[test]
	fn area_shapes_are_filled() {
		for category in [
			ShapeCategory::Waterway { filled: true },
			ShapeCategory::GeoFeature(GeoFeatureKind::Forest),
		] {
			let commands = rendered(category);
			assert_eq!(commands.len(), 1, "{category}");
			assert!(matches!(commands[0], DrawCommand::Polygon { .. }), "{category}");
		}
	}

	#[test]
	fn populated_place_is_a_marker() {
		let commands = rendered(ShapeCategory::PopulatedPlace(UrbanType::Town));
		assert!(matches!(commands[..], [DrawCommand::Circle { .. }]));
	}

	#[test]
	fn projected_coordinates() {
		let encoded = decode_single(&record(GeometryType::Polyline));
		let shape = build_shape(ShapeCategory::Railway, &encoded.feature());
		let points = shape.screen_coordinates();
		assert_abs_diff_eq!(points[0].x, 0.0);
		assert_abs_diff_eq!(points[0].y, 0.0, epsilon = 1e-6);
		assert!(points[1].x > 0.0);
		assert!(points[2].y > 0.0);
	}

	#[test]
	fn translate_through_trait() {
		let encoded = decode_single(&record(GeometryType::Polyline));
		let mut shape = build_shape(ShapeCategory::Border, &encoded.feature());
		shape.translate_and_scale(0.0, 0.0, 0.0, 50.0);
		assert!(shape.screen_coordinates().iter().all(|p| *p == Coord { x: 0.0, y: 50.0 }));
	}
}
