//! Contains the byte containers shared by the readers, writers and the decoder.

mod blob;
pub use blob::*;

mod byte_range;
pub use byte_range::*;
