//! Byte-order aware readers and writers for the fixed-width values of the tile format.
//!
//! # Overview
//!
//! Readers borrow a byte slice and never copy it; writers collect into an in-memory [`Blob`](crate::Blob).
//! The tile format is little-endian throughout, so only the `new_le` constructors are provided.

mod value_reader;
mod value_reader_slice;
mod value_writer;
mod value_writer_blob;

pub use value_reader::*;
pub use value_reader_slice::*;
pub use value_writer::*;
pub use value_writer_blob::*;
