//! Draining a tessellation onto a drawing surface.

use crate::{
	FeatureClassifier, RenderConfig, RenderError, Tessellation,
	surface::{DrawingSurface, ImageSurface},
	tessellate_parallel,
};
use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use log::debug;
use mapster_core::{MapFeatureData, TileFile};

/// What a render pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderStats {
	/// Shapes handed to the surface.
	pub drawn: usize,
	/// Shapes skipped for having fewer than two screen coordinates.
	pub skipped: usize,
	/// Uniform factor from screen coordinates to pixels.
	pub scale: f64,
}

/// Fits the tessellation's bounding box onto a `width` x `height` canvas and draws every shape in
/// ascending draw order.
///
/// The scale preserves the aspect ratio. Shapes with fewer than two screen coordinates are skipped.
/// Fails with [`RenderError::EmptyScene`] if there is nothing to draw and with
/// [`RenderError::DegenerateBoundingBox`] if the box has no width or height.
pub fn render(
	tessellation: Tessellation,
	surface: &mut dyn DrawingSurface,
	width: u32,
	height: u32,
) -> Result<RenderStats> {
	let (bbox, mut queue) = tessellation.into_parts();
	if bbox.is_empty() || queue.is_empty() {
		return Err(RenderError::EmptyScene.into());
	}

	let (box_width, box_height) = (bbox.width(), bbox.height());
	let spans = |extent: f64| extent.is_finite() && extent > 0.0;
	if !spans(box_width) || !spans(box_height) {
		return Err(RenderError::DegenerateBoundingBox {
			width: box_width,
			height: box_height,
		}
		.into());
	}

	let scale = (f64::from(width) / box_width).min(f64::from(height) / box_height);
	let mut stats = RenderStats {
		scale,
		..RenderStats::default()
	};

	for mut shape in queue.drain_ordered() {
		if shape.screen_coordinates().len() < 2 {
			stats.skipped += 1;
			continue;
		}
		shape.translate_and_scale(bbox.min_x, bbox.min_y, scale, f64::from(height));
		shape.render_onto(surface);
		stats.drawn += 1;
	}

	debug!(
		"rendered {} shapes, skipped {}, scale {scale}",
		stats.drawn, stats.skipped
	);
	Ok(stats)
}

/// Renders onto a new image of the configured size, cleared with the configured background.
pub fn render_image(tessellation: Tessellation, config: &RenderConfig) -> Result<RgbaImage> {
	config.validate()?;
	let mut surface = ImageSurface::new(config.width, config.height);
	surface.fill_background(Rgba(config.background));
	render(tessellation, &mut surface, config.width, config.height)?;
	Ok(surface.into_image())
}

/// Locates, decodes, tessellates and renders one tile.
pub fn render_tile(
	file: &TileFile<'_>,
	tile_id: i32,
	classifier: &FeatureClassifier,
	config: &RenderConfig,
) -> Result<RgbaImage> {
	config.validate()?;
	let block = file.locate(tile_id)?;
	let features = block
		.features()
		.collect::<Result<Vec<MapFeatureData<'_>>>>()
		.with_context(|| format!("failed to decode tile {tile_id}"))?;
	let tessellation = tessellate_parallel(&features, classifier, config.worker_count())?;
	debug!(
		"tile {tile_id}: {} of {} features produced shapes",
		tessellation.shapes_produced(),
		tessellation.features_seen()
	);
	render_image(tessellation, config).with_context(|| format!("failed to render tile {tile_id}"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		surface::{DrawCommand, RecordingSurface},
		tessellate,
		test_utils::encode,
	};
	use approx::assert_relative_eq;
	use mapster_core::{FeatureRecord, GeometryType, TerrainKey};

	fn tessellation_of(records: &[FeatureRecord]) -> Tessellation {
		let encoded = encode(records);
		tessellate(&encoded.features(), &FeatureClassifier::new())
	}

	fn render_error(result: Result<RenderStats>) -> RenderError {
		result.unwrap_err().downcast::<RenderError>().unwrap()
	}

	fn road(coordinates: &[(f64, f64)]) -> FeatureRecord {
		FeatureRecord::new(1, GeometryType::Polyline)
			.with_coordinates(coordinates.iter().copied())
			.with_property(TerrainKey::Highway, "residential")
	}

	#[test]
	fn empty_scene() {
		let mut surface = RecordingSurface::new(10, 10);
		let error = render_error(render(Tessellation::new(), &mut surface, 10, 10));
		assert_eq!(error, RenderError::EmptyScene);
		assert!(surface.commands().is_empty());
	}

	#[test]
	fn degenerate_bounding_box() {
		// A horizontal road has no height.
		let tessellation = tessellation_of(&[road(&[(0.0, 0.0), (0.0, 1.0)])]);
		let mut surface = RecordingSurface::new(10, 10);
		let error = render_error(render(tessellation, &mut surface, 10, 10));
		assert!(matches!(error, RenderError::DegenerateBoundingBox { height, .. } if height == 0.0));
	}

	#[test]
	fn fits_and_flips() -> Result<()> {
		let tessellation = tessellation_of(&[road(&[(0.0, 0.0), (1.0, 2.0)])]);
		let bbox = *tessellation.bounding_box();
		let mut surface = RecordingSurface::new(200, 100);
		let stats = render(tessellation, &mut surface, 200, 100)?;

		assert_eq!(stats.drawn, 1);
		assert_eq!(stats.skipped, 0);
		// Mercator stretches latitude, so the box is slightly less than twice as wide as high and
		// the height decides the scale.
		assert!(bbox.width() < 2.0 * bbox.height());
		assert_relative_eq!(stats.scale, 100.0 / bbox.height());

		let DrawCommand::Polyline { points, .. } = &surface.commands()[0] else {
			panic!("expected a polyline, got {:?}", surface.commands());
		};
		assert_relative_eq!(points[0].x, 0.0, epsilon = 1e-6);
		assert_relative_eq!(points[0].y, 100.0, epsilon = 1e-6);
		assert_relative_eq!(points[1].y, 0.0, epsilon = 1e-6);
		assert!(points[1].x > 199.0 && points[1].x <= 200.0, "right edge, got {}", points[1].x);
		Ok(())
	}

	#[test]
	fn single_point_shapes_are_skipped() -> Result<()> {
		let tessellation = tessellation_of(&[
			road(&[(0.0, 0.0), (1.0, 1.0)]),
			FeatureRecord::new(2, GeometryType::Point)
				.with_coordinates([(0.5, 0.5)])
				.with_property(TerrainKey::Place, "city"),
		]);
		let mut surface = RecordingSurface::new(50, 50);
		let stats = render(tessellation, &mut surface, 50, 50)?;
		assert_eq!((stats.drawn, stats.skipped), (1, 1));
		assert_eq!(surface.commands().len(), 1);
		Ok(())
	}

	#[test]
	fn back_to_front() -> Result<()> {
		let tessellation = tessellation_of(&[
			road(&[(0.0, 0.0), (1.0, 1.0)]),
			FeatureRecord::new(2, GeometryType::Polygon)
				.with_coordinates([(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.0, 0.0)])
				.with_property(TerrainKey::Landuse, "forest"),
		]);
		let mut surface = RecordingSurface::new(50, 50);
		render(tessellation, &mut surface, 50, 50)?;
		let commands = surface.commands();
		assert!(matches!(commands[0], DrawCommand::Polygon { .. }));
		assert!(matches!(commands[1], DrawCommand::Polyline { .. }));
		Ok(())
	}

	#[test]
	fn image_has_background_and_shapes() -> Result<()> {
		let tessellation = tessellation_of(&[FeatureRecord::new(1, GeometryType::Polygon)
			.with_coordinates([(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)])
			.with_property(TerrainKey::Building, "yes")]);
		let config = RenderConfig {
			width: 40,
			height: 40,
			background: [0, 0, 0, 255],
			workers: Some(1),
		};
		let image = render_image(tessellation, &config)?;
		assert_eq!(image.dimensions(), (40, 40));
		assert_ne!(image.get_pixel(20, 20), &Rgba([0, 0, 0, 255]));
		Ok(())
	}

	#[test]
	fn invalid_canvas() {
		let config = RenderConfig {
			height: 0,
			..RenderConfig::default()
		};
		let error = render_image(Tessellation::new(), &config).unwrap_err();
		assert!(matches!(
			error.downcast_ref::<RenderError>(),
			Some(RenderError::InvalidCanvas { height: 0, .. })
		));
	}
}
