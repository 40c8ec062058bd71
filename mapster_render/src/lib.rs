//! Turns decoded mapster tiles into pictures.
//!
//! Rendering runs in three stages:
//!
//! 1. The [`FeatureClassifier`] walks its ordered rule list and maps each feature to a
//!    [`ShapeCategory`] and draw order, or drops it.
//! 2. [`tessellate`] (or [`tessellate_parallel`]) builds a projected shape for every classified
//!    feature, pushes it into a [`RenderQueue`] and widens a [`BoundingBox`].
//! 3. [`render`] fits the bounding box onto the canvas and drains the queue back to front onto a
//!    [`surface::DrawingSurface`].
//!
//! [`render_tile`] runs all three for one tile of a [`mapster_core::TileFile`].

mod bbox;
pub use bbox::*;

mod classify;
pub use classify::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

pub mod projection;

mod queue;
pub use queue::*;

mod renderer;
pub use renderer::*;

pub mod shapes;

pub mod surface;

mod tessellation;
pub use tessellation::*;

#[cfg(test)]
mod test_utils;
