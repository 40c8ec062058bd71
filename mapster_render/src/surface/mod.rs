//! Targets that shapes paint onto.
//!
//! Points are canvas pixels with the origin in the top-left corner.

mod image_surface;
mod recording_surface;

pub use image_surface::*;
pub use recording_surface::*;

use geo::Coord;
use image::Rgba;

pub trait DrawingSurface {
	fn width(&self) -> u32;

	fn height(&self) -> u32;

	/// Paints every pixel with `color`.
	fn fill_background(&mut self, color: Rgba<u8>);

	/// Fills the polygon outlined by `points`. The outline is closed implicitly.
	fn fill_polygon(&mut self, points: &[Coord<f64>], color: Rgba<u8>);

	/// Draws the connected line segments through `points` with a stroke of `width` pixels.
	fn stroke_polyline(&mut self, points: &[Coord<f64>], color: Rgba<u8>, width: f64);

	fn fill_circle(&mut self, center: Coord<f64>, radius: f64, color: Rgba<u8>);
}
