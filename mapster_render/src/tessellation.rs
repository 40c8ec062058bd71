//! Classifying features into queued shapes and a bounding box.

use crate::{BoundingBox, FeatureClassifier, RenderQueue, ShapeCategory, shapes::build_shape};
use anyhow::{Result, anyhow};
use log::debug;
use mapster_core::MapFeatureData;

/// The shapes produced from a set of features, ready to be rendered.
#[derive(Debug, Default)]
pub struct Tessellation {
	bbox: BoundingBox,
	queue: RenderQueue,
	features_seen: usize,
	shapes_produced: usize,
}

impl Tessellation {
	pub fn new() -> Tessellation {
		Tessellation::default()
	}

	/// Classifies `feature`, queues its shape and widens the bounding box.
	///
	/// Returns the category, or `None` if no rule matched and the feature was dropped.
	pub fn add_feature(&mut self, feature: &MapFeatureData<'_>, classifier: &FeatureClassifier) -> Option<ShapeCategory> {
		self.features_seen += 1;
		let (category, order) = classifier.classify(feature)?;
		let shape = build_shape(category, feature);
		self.bbox.include_all(shape.screen_coordinates());
		self.queue.push_with_order(shape, order);
		self.shapes_produced += 1;
		Some(category)
	}

	/// Appends the shapes of `other` behind the shapes of this tessellation.
	pub fn merge(&mut self, other: Tessellation) {
		self.bbox.merge(&other.bbox);
		self.queue.append(other.queue);
		self.features_seen += other.features_seen;
		self.shapes_produced += other.shapes_produced;
	}

	pub fn bounding_box(&self) -> &BoundingBox {
		&self.bbox
	}

	pub fn queue(&self) -> &RenderQueue {
		&self.queue
	}

	pub fn into_parts(self) -> (BoundingBox, RenderQueue) {
		(self.bbox, self.queue)
	}

	pub fn features_seen(&self) -> usize {
		self.features_seen
	}

	pub fn shapes_produced(&self) -> usize {
		self.shapes_produced
	}

	pub fn is_empty(&self) -> bool {
		self.queue.is_empty()
	}
}

/// Tessellates `features` one after another.
pub fn tessellate<'a, 'f, I>(features: I, classifier: &FeatureClassifier) -> Tessellation
where
	I: IntoIterator<Item = &'f MapFeatureData<'a>>,
	'a: 'f,
{
	let mut tessellation = Tessellation::new();
	for feature in features {
		tessellation.add_feature(feature, classifier);
	}
	tessellation
}

/// Tessellates `features` on up to `workers` scoped threads.
///
/// The slice is split into contiguous chunks whose results are merged in chunk order, so the queue
/// and bounding box are identical to those of [`tessellate`].
pub fn tessellate_parallel(
	features: &[MapFeatureData<'_>],
	classifier: &FeatureClassifier,
	workers: usize,
) -> Result<Tessellation> {
	let workers = workers.clamp(1, features.len().max(1));
	if workers == 1 {
		return Ok(tessellate(features, classifier));
	}
	let chunk_size = features.len().div_ceil(workers);

	let parts = std::thread::scope(|scope| {
		let handles = features
			.chunks(chunk_size)
			.map(|chunk| scope.spawn(move || tessellate(chunk, classifier)))
			.collect::<Vec<_>>();
		handles
			.into_iter()
			.map(|handle| handle.join().map_err(|_| anyhow!("tessellation worker panicked")))
			.collect::<Result<Vec<_>>>()
	})?;

	let mut tessellation = Tessellation::new();
	for part in parts {
		tessellation.merge(part);
	}
	debug!(
		"tessellated {} features into {} shapes on {workers} workers",
		tessellation.features_seen, tessellation.shapes_produced
	);
	Ok(tessellation)
}
