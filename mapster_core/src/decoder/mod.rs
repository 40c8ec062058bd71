//! Zero-copy decoding of tile files.
//!
//! [`TileFile`] validates the header and index, [`TileFile::locate`] opens a [`TileBlock`], and the
//! block yields [`MapFeatureData`] views whose label, coordinates and property values borrow the
//! original buffer.

mod feature;
mod tile_block;
mod tile_file;

pub use feature::*;
pub use tile_block::*;
pub use tile_file::*;
