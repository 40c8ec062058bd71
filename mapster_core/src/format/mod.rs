//! Fixed, padding-free byte layouts of the tile file.
//!
//! A file starts with a [`FileHeader`], followed by `tile_count` [`TileHeaderEntry`] records. Each
//! entry points to a tile block that starts with a [`TileBlockHeader`], followed by its
//! [`MapFeature`] records and then its [`PropertyEntry`] pool. The coordinate, string and character
//! pools of a block live at the absolute offsets its header declares.
//!
//! Every record is little-endian and implements [`Record`], which reads and writes its fields at
//! their documented offsets.

mod coordinate;
mod file_header;
mod geometry_type;
mod map_feature;
mod property_entry;
mod record;
mod string_entry;
mod tile_block_header;
mod tile_header_entry;

pub use coordinate::*;
pub use file_header::*;
pub use geometry_type::*;
pub use map_feature::*;
pub use property_entry::*;
pub use record::*;
pub use string_entry::*;
pub use tile_block_header::*;
pub use tile_header_entry::*;
