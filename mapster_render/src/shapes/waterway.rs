use super::{ScreenPath, Shape, style};
use crate::{ShapeCategory, surface::DrawingSurface};

/// A river or stream, or a water area when `filled`.
#[derive(Clone, Debug)]
pub struct Waterway {
	path: ScreenPath,
	filled: bool,
}

impl Waterway {
	pub fn new(path: ScreenPath, filled: bool) -> Waterway {
		Waterway { path, filled }
	}

	pub fn is_filled(&self) -> bool {
		self.filled
	}
}

impl Shape for Waterway {
	fn category(&self) -> ShapeCategory {
		ShapeCategory::Waterway { filled: self.filled }
	}

	fn path(&self) -> &ScreenPath {
		&self.path
	}

	fn path_mut(&mut self) -> &mut ScreenPath {
		&mut self.path
	}

	fn render_onto(&self, surface: &mut dyn DrawingSurface) {
		if self.filled {
			surface.fill_polygon(self.path.points(), style::WATER);
		} else {
			surface.stroke_polyline(self.path.points(), style::WATER, style::WATERWAY_WIDTH);
		}
	}
}
