//! Reads and writes the mapster binary tile format.
//!
//! A tile file is a header, an index of tile identifiers and offsets, and one block per tile. Every
//! block stores its features together with pools of coordinates, strings and key/value properties
//! that the features reference by index.

pub mod decoder;

mod error;
pub use error::*;

pub mod format;

pub mod io;

pub mod terrain;

pub mod types;
pub use types::*;

pub mod writer;

pub use decoder::{CoordinateView, MapFeatureData, Property, TileBlock, TileFile};
pub use format::{Coordinate, GeometryType};
pub use terrain::{HighwayType, LandType, TerrainKey, UrbanType};
pub use writer::{FeatureRecord, TileBuilder, TileFileWriter};
