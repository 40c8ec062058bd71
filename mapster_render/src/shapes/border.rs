use super::{ScreenPath, Shape, style};
use crate::{ShapeCategory, surface::DrawingSurface};

#[derive(Clone, Debug)]
pub struct Border {
	path: ScreenPath,
}

impl Border {
	pub fn new(path: ScreenPath) -> Border {
		Border { path }
	}
}

impl Shape for Border {
	fn category(&self) -> ShapeCategory {
		ShapeCategory::Border
	}

	fn path(&self) -> &ScreenPath {
		&self.path
	}

	fn path_mut(&mut self) -> &mut ScreenPath {
		&mut self.path
	}

	fn render_onto(&self, surface: &mut dyn DrawingSurface) {
		surface.stroke_polyline(self.path.points(), style::BORDER, style::BORDER_WIDTH);
	}
}
