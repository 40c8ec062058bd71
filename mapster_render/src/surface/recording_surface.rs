use super::DrawingSurface;
use geo::Coord;
use image::Rgba;

/// A drawing call captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	Background(Rgba<u8>),
	Polygon {
		points: Vec<Coord<f64>>,
		color: Rgba<u8>,
	},
	Polyline {
		points: Vec<Coord<f64>>,
		color: Rgba<u8>,
		width: f64,
	},
	Circle {
		center: Coord<f64>,
		radius: f64,
		color: Rgba<u8>,
	},
}

/// A surface that keeps a list of drawing calls instead of pixels.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
	width: u32,
	height: u32,
	commands: Vec<DrawCommand>,
}

impl RecordingSurface {
	pub fn new(width: u32, height: u32) -> RecordingSurface {
		RecordingSurface {
			width,
			height,
			commands: Vec::new(),
		}
	}

	pub fn commands(&self) -> &[DrawCommand] {
		&self.commands
	}

	pub fn into_commands(self) -> Vec<DrawCommand> {
		self.commands
	}
}

impl DrawingSurface for RecordingSurface {
	fn width(&self) -> u32 {
		self.width
	}

	fn height(&self) -> u32 {
		self.height
	}

	fn fill_background(&mut self, color: Rgba<u8>) {
		self.commands.push(DrawCommand::Background(color));
	}

	fn fill_polygon(&mut self, points: &[Coord<f64>], color: Rgba<u8>) {
		self.commands.push(DrawCommand::Polygon {
			points: points.to_vec(),
			color,
		});
	}

	fn stroke_polyline(&mut self, points: &[Coord<f64>], color: Rgba<u8>, width: f64) {
		self.commands.push(DrawCommand::Polyline {
			points: points.to_vec(),
			color,
			width,
		});
	}

	fn fill_circle(&mut self, center: Coord<f64>, radius: f64, color: Rgba<u8>) {
		self.commands.push(DrawCommand::Circle { center, radius, color });
	}
}
