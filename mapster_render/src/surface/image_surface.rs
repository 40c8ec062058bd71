use super::DrawingSurface;
use geo::Coord;
use image::{Rgba, RgbaImage};
use imageproc::{
	drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut},
	point::Point,
};

/// Strokes up to this width are drawn as one pixel lines.
const HAIRLINE: f64 = 1.5;

/// A raster surface backed by an [`RgbaImage`].
#[derive(Clone, Debug)]
pub struct ImageSurface {
	image: RgbaImage,
}

impl ImageSurface {
	pub fn new(width: u32, height: u32) -> ImageSurface {
		ImageSurface {
			image: RgbaImage::new(width, height),
		}
	}

	pub fn image(&self) -> &RgbaImage {
		&self.image
	}

	pub fn into_image(self) -> RgbaImage {
		self.image
	}
}

impl From<RgbaImage> for ImageSurface {
	fn from(image: RgbaImage) -> Self {
		ImageSurface { image }
	}
}

impl DrawingSurface for ImageSurface {
	fn width(&self) -> u32 {
		self.image.width()
	}

	fn height(&self) -> u32 {
		self.image.height()
	}

	fn fill_background(&mut self, color: Rgba<u8>) {
		for pixel in self.image.pixels_mut() {
			*pixel = color;
		}
	}

	fn fill_polygon(&mut self, points: &[Coord<f64>], color: Rgba<u8>) {
		let outline = polygon_outline(points);
		if outline.len() < 3 {
			self.stroke_polyline(points, color, 1.0);
			return;
		}
		draw_polygon_mut(&mut self.image, &outline, color);
	}

	fn stroke_polyline(&mut self, points: &[Coord<f64>], color: Rgba<u8>, width: f64) {
		for segment in points.windows(2) {
			let (start, end) = (segment[0], segment[1]);
			if width <= HAIRLINE {
				draw_line_segment_mut(
					&mut self.image,
					(start.x as f32, start.y as f32),
					(end.x as f32, end.y as f32),
					color,
				);
			} else {
				self.thick_segment(start, end, color, width);
			}
		}
		if width > HAIRLINE {
			for point in points {
				self.fill_circle(*point, width / 2.0, color);
			}
		}
	}

	fn fill_circle(&mut self, center: Coord<f64>, radius: f64, color: Rgba<u8>) {
		draw_filled_circle_mut(
			&mut self.image,
			(center.x.round() as i32, center.y.round() as i32),
			radius.round().max(0.0) as i32,
			color,
		);
	}
}

impl ImageSurface {
	/// Fills the rectangle around the segment from `start` to `end`. Joints are rounded by the caller.
	fn thick_segment(&mut self, start: Coord<f64>, end: Coord<f64>, color: Rgba<u8>, width: f64) {
		let (dx, dy) = (end.x - start.x, end.y - start.y);
		let length = dx.hypot(dy);
		if length < f64::EPSILON {
			return;
		}
		let half = width / 2.0;
		let normal = Coord {
			x: -dy / length * half,
			y: dx / length * half,
		};
		let quad = polygon_outline(&[start + normal, end + normal, end - normal, start - normal]);
		if quad.len() >= 3 {
			draw_polygon_mut(&mut self.image, &quad, color);
		}
	}
}

/// Rounds an outline to pixels, dropping repeated points and the closing point.
fn polygon_outline(points: &[Coord<f64>]) -> Vec<Point<i32>> {
	let mut outline: Vec<Point<i32>> = Vec::with_capacity(points.len());
	for point in points {
		let pixel = Point::new(point.x.round() as i32, point.y.round() as i32);
		if outline.last() != Some(&pixel) {
			outline.push(pixel);
		}
	}
	while outline.len() > 1 && outline.first() == outline.last() {
		outline.pop();
	}
	outline
}
