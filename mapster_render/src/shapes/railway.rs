use super::{ScreenPath, Shape, style};
use crate::{ShapeCategory, surface::DrawingSurface};

#[derive(Clone, Debug)]
pub struct Railway {
	path: ScreenPath,
}

impl Railway {
	pub fn new(path: ScreenPath) -> Railway {
		Railway { path }
	}
}

impl Shape for Railway {
	fn category(&self) -> ShapeCategory {
		ShapeCategory::Railway
	}

	fn path(&self) -> &ScreenPath {
		&self.path
	}

	fn path_mut(&mut self) -> &mut ScreenPath {
		&mut self.path
	}

	fn render_onto(&self, surface: &mut dyn DrawingSurface) {
		surface.stroke_polyline(self.path.points(), style::RAILWAY, style::RAILWAY_WIDTH);
	}
}
