use super::{ScreenPath, Shape, style};
use crate::{ShapeCategory, surface::DrawingSurface};
use mapster_core::UrbanType;

/// A settlement marker at the first coordinate of its feature.
#[derive(Clone, Debug)]
pub struct PopulatedPlace {
	path: ScreenPath,
	urban: UrbanType,
	label: Option<String>,
}

impl PopulatedPlace {
	pub fn new(path: ScreenPath, urban: UrbanType, label: Option<&str>) -> PopulatedPlace {
		PopulatedPlace {
			path,
			urban,
			label: label.map(str::to_string),
		}
	}

	pub fn urban_type(&self) -> UrbanType {
		self.urban
	}

	pub fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}
}

impl Shape for PopulatedPlace {
	fn category(&self) -> ShapeCategory {
		ShapeCategory::PopulatedPlace(self.urban)
	}

	fn path(&self) -> &ScreenPath {
		&self.path
	}

	fn path_mut(&mut self) -> &mut ScreenPath {
		&mut self.path
	}

	fn render_onto(&self, surface: &mut dyn DrawingSurface) {
		if let Some(center) = self.path.points().first() {
			surface.fill_circle(*center, style::place_radius(self.urban), style::PLACE);
		}
	}
}
