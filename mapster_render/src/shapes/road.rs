use super::{ScreenPath, Shape, style};
use crate::{ShapeCategory, surface::DrawingSurface};
use mapster_core::HighwayType;

#[derive(Clone, Debug)]
pub struct Road {
	path: ScreenPath,
	highway: HighwayType,
}

impl Road {
	pub fn new(path: ScreenPath, highway: HighwayType) -> Road {
		Road { path, highway }
	}

	pub fn highway(&self) -> HighwayType {
		self.highway
	}
}

impl Shape for Road {
	fn category(&self) -> ShapeCategory {
		ShapeCategory::Road(self.highway)
	}

	fn path(&self) -> &ScreenPath {
		&self.path
	}

	fn path_mut(&mut self) -> &mut ScreenPath {
		&mut self.path
	}

	fn render_onto(&self, surface: &mut dyn DrawingSurface) {
		surface.stroke_polyline(
			self.path.points(),
			style::road_color(self.highway),
			style::road_width(self.highway),
		);
	}
}
