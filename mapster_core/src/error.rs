//! Typed failure causes raised while decoding tile files.
//!
//! Decoder functions return `anyhow::Result`, so a [`TileError`] travels as the root cause of an
//! `anyhow::Error` and can be recovered with `err.downcast_ref::<TileError>()`.

use thiserror::Error;

/// Errors that can occur while locating or decoding a tile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
	/// The requested tile identifier is not part of the file's index.
	#[error("tile {0} not found in tile index")]
	TileNotFound(i32),

	/// An offset, length or value resolves outside the bounds of its pool.
	#[error("corrupt tile data: {0}")]
	CorruptData(String),

	/// The file header announces a format version this reader does not support.
	#[error("unsupported format version {found}, expected {expected}")]
	UnsupportedVersion { found: i64, expected: i64 },
}

impl TileError {
	/// Shorthand for building a [`TileError::CorruptData`].
	pub fn corrupt(message: impl Into<String>) -> Self {
		TileError::CorruptData(message.into())
	}

	/// Returns `true` for the kinds that make the whole file unusable.
	pub fn is_corrupt(&self) -> bool {
		matches!(self, TileError::CorruptData(_) | TileError::UnsupportedVersion { .. })
	}
}

/// Finds a [`TileError`] anywhere in the cause chain of an `anyhow::Error`.
pub fn find_tile_error(err: &anyhow::Error) -> Option<&TileError> {
	err.chain().find_map(|cause| cause.downcast_ref::<TileError>())
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::{Context, Result};

	#[test]
	fn display_messages() {
		assert_eq!(TileError::TileNotFound(42).to_string(), "tile 42 not found in tile index");
		assert_eq!(
			TileError::corrupt("coordinate range 3..9 exceeds pool of 4").to_string(),
			"corrupt tile data: coordinate range 3..9 exceeds pool of 4"
		);
		assert_eq!(
			TileError::UnsupportedVersion { found: 7, expected: 1 }.to_string(),
			"unsupported format version 7, expected 1"
		);
	}

	#[test]
	fn corrupt_kinds() {
		assert!(TileError::corrupt("x").is_corrupt());
		assert!(TileError::UnsupportedVersion { found: 2, expected: 1 }.is_corrupt());
		assert!(!TileError::TileNotFound(1).is_corrupt());
	}

	#[test]
	fn found_through_context() {
		let result: Result<()> = Err(TileError::TileNotFound(3)).context("while rendering");
		let err = result.unwrap_err();
		assert_eq!(find_tile_error(&err), Some(&TileError::TileNotFound(3)));
	}

	#[test]
	fn missing_in_foreign_error() {
		let err = anyhow::anyhow!("something else");
		assert!(find_tile_error(&err).is_none());
	}
}
