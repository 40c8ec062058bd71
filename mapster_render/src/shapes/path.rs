use crate::projection::project_all;
use geo::Coord;
use mapster_core::MapFeatureData;

/// The screen coordinates of one shape.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScreenPath {
	points: Vec<Coord<f64>>,
}

impl ScreenPath {
	pub fn new(points: Vec<Coord<f64>>) -> ScreenPath {
		ScreenPath { points }
	}

	/// Projects the coordinates of `feature`.
	pub fn from_feature(feature: &MapFeatureData<'_>) -> ScreenPath {
		ScreenPath::new(project_all(feature.coordinates()))
	}

	pub fn points(&self) -> &[Coord<f64>] {
		&self.points
	}

	/// Moves the path so that `(origin_x, origin_y)` lands on the bottom-left corner of the canvas,
	/// scales it by `scale` and flips the y axis.
	pub fn translate_and_scale(&mut self, origin_x: f64, origin_y: f64, scale: f64, canvas_height: f64) {
		for point in &mut self.points {
			*point = Coord {
				x: (point.x - origin_x) * scale,
				y: canvas_height - (point.y - origin_y) * scale,
			};
		}
	}
}
