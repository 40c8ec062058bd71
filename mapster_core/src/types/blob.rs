//! This module provides the [`Blob`] struct, an owned buffer of bytes produced by the tile writer.
//!
//! # Examples
//!
//! ```rust
//! use mapster_core::Blob;
//!
//! let blob = Blob::from(vec![0, 1, 2, 3, 4, 5, 6, 7]);
//! assert_eq!(blob.len(), 8);
//! assert_eq!(blob.range(2..5), &[2, 3, 4]);
//! ```

use std::fmt::Debug;
use std::ops::Range;

/// A simple wrapper around [`Vec<u8>`] that provides additional methods for working with byte data.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Blob(Vec<u8>);

impl Blob {
	/// Returns a byte slice from the specified `range`.
	///
	/// # Panics
	///
	/// Panics if the specified range is out of bounds.
	#[must_use]
	pub fn range(&self, range: Range<usize>) -> &[u8] {
		&self.0[range]
	}

	/// Returns a reference to the underlying byte slice.
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		self.0.as_ref()
	}

	/// Consumes this [`Blob`] and returns the underlying `Vec<u8>`.
	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Returns the length of the underlying byte slice.
	#[must_use]
	pub fn len(&self) -> u64 {
		self.0.len() as u64
	}

	/// Returns `true` if the underlying byte slice is empty.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<u8>> for Blob {
	fn from(item: Vec<u8>) -> Self {
		Blob(item)
	}
}

impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		const PREVIEW: usize = 16;
		write!(f, "Blob({}:", self.0.len())?;
		for byte in self.0.iter().take(PREVIEW) {
			write!(f, " {byte:02x}")?;
		}
		if self.0.len() > PREVIEW {
			write!(f, " ...")?;
		}
		write!(f, ")")
	}
}
