//! This module provides the `ByteRange` struct, which represents a range of bytes with an offset and length.
//!
//! The decoder describes every pool of a tile block as a `ByteRange` inside the file buffer and checks
//! each record it reads against it.
//!
//! # Examples
//!
//! ```rust
//! use mapster_core::ByteRange;
//!
//! let range = ByteRange::new(23, 42);
//! assert_eq!(range.as_range_usize(), 23..65);
//! assert_eq!(range.records(1, 2, 8), Some(ByteRange::new(31, 16)));
//! ```

use std::fmt;
use std::ops::Range;

/// A struct representing a range of bytes with an offset and length.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct ByteRange {
	/// The starting offset of the byte range.
	pub offset: u64,
	/// The length of the byte range.
	pub length: u64,
}

impl ByteRange {
	/// Creates a new `ByteRange` with the specified offset and length.
	pub fn new(offset: u64, length: u64) -> Self {
		Self { offset, length }
	}

	/// Returns the exclusive end of the range, or `None` if it overflows `u64`.
	pub fn checked_end(&self) -> Option<u64> {
		self.offset.checked_add(self.length)
	}

	/// Returns the sub-range of `count` records of `record_length` bytes, starting at record `index`.
	///
	/// Returns `None` if the arithmetic overflows.
	pub fn records(&self, index: u64, count: u64, record_length: u64) -> Option<ByteRange> {
		let offset = self.offset.checked_add(index.checked_mul(record_length)?)?;
		let length = count.checked_mul(record_length)?;
		offset.checked_add(length)?;
		Some(ByteRange::new(offset, length))
	}

	/// Converts the `ByteRange` to a `Range<usize>`.
	pub fn as_range_usize(&self) -> Range<usize> {
		Range {
			start: self.offset as usize,
			end: (self.offset + self.length) as usize,
		}
	}
}

impl fmt::Debug for ByteRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ByteRange[{},{}]", self.offset, self.length)
	}
}
