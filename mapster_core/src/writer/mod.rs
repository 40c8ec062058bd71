//! Producing tile files, for tooling and tests.

mod tile_builder;
mod tile_file_writer;

pub use tile_builder::*;
pub use tile_file_writer::*;
