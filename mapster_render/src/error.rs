use thiserror::Error;

/// Fatal conditions of a render pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
	/// The bounding box of all shapes has no width or no height, so no scale factor exists.
	#[error("degenerate bounding box of {width} x {height}")]
	DegenerateBoundingBox { width: f64, height: f64 },

	/// Nothing was tessellated, so there is no bounding box to fit.
	#[error("no shapes to render")]
	EmptyScene,

	#[error("invalid canvas size {width} x {height}")]
	InvalidCanvas { width: u32, height: u32 },
}
