use super::{ScreenPath, Shape, style};
use crate::{GeoFeatureKind, ShapeCategory, surface::DrawingSurface};

/// A filled land area, coloured by its kind.
#[derive(Clone, Debug)]
pub struct GeoFeature {
	path: ScreenPath,
	kind: GeoFeatureKind,
}

impl GeoFeature {
	pub fn new(path: ScreenPath, kind: GeoFeatureKind) -> GeoFeature {
		GeoFeature { path, kind }
	}

	pub fn kind(&self) -> GeoFeatureKind {
		self.kind
	}
}

impl Shape for GeoFeature {
	fn category(&self) -> ShapeCategory {
		ShapeCategory::GeoFeature(self.kind)
	}

	fn path(&self) -> &ScreenPath {
		&self.path
	}

	fn path_mut(&mut self) -> &mut ScreenPath {
		&mut self.path
	}

	fn render_onto(&self, surface: &mut dyn DrawingSurface) {
		surface.fill_polygon(self.path.points(), style::geo_feature_color(self.kind));
	}
}
