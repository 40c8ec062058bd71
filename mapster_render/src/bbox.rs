use geo::{Coord, Rect};

/// The axis-aligned extent of all screen coordinates folded into it.
///
/// Starts out empty, with each minimum at `+inf` and each maximum at `-inf`, and only ever widens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
	pub min_x: f64,
	pub max_x: f64,
	pub min_y: f64,
	pub max_y: f64,
}

impl BoundingBox {
	pub fn new() -> BoundingBox {
		BoundingBox {
			min_x: f64::INFINITY,
			max_x: f64::NEG_INFINITY,
			min_y: f64::INFINITY,
			max_y: f64::NEG_INFINITY,
		}
	}

	/// Returns `true` until the first coordinate is included.
	pub fn is_empty(&self) -> bool {
		self.min_x > self.max_x || self.min_y > self.max_y
	}

	pub fn include(&mut self, point: Coord<f64>) {
		self.min_x = self.min_x.min(point.x);
		self.max_x = self.max_x.max(point.x);
		self.min_y = self.min_y.min(point.y);
		self.max_y = self.max_y.max(point.y);
	}

	pub fn include_all(&mut self, points: &[Coord<f64>]) {
		for point in points {
			self.include(*point);
		}
	}

	/// Widens this box to also cover `other`.
	pub fn merge(&mut self, other: &BoundingBox) {
		self.min_x = self.min_x.min(other.min_x);
		self.max_x = self.max_x.max(other.max_x);
		self.min_y = self.min_y.min(other.min_y);
		self.max_y = self.max_y.max(other.max_y);
	}

	pub fn width(&self) -> f64 {
		self.max_x - self.min_x
	}

	pub fn height(&self) -> f64 {
		self.max_y - self.min_y
	}

	pub fn as_rect(&self) -> Option<Rect<f64>> {
		if self.is_empty() {
			return None;
		}
		Some(Rect::new(
			Coord {
				x: self.min_x,
				y: self.min_y,
			},
			Coord {
				x: self.max_x,
				y: self.max_y,
			},
		))
	}
}

impl Default for BoundingBox {
	fn default() -> Self {
		BoundingBox::new()
	}
}
