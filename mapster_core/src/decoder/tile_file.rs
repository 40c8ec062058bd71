//! Random access to the tiles of a tile file held in memory.
//!
//! # Example
//!
//! ```rust
//! use mapster_core::{FeatureRecord, GeometryType, TerrainKey, TileBuilder, TileFile, TileFileWriter};
//! # fn main() -> anyhow::Result<()> {
//! let mut tile = TileBuilder::new(7);
//! tile.add_feature(FeatureRecord::new(1, GeometryType::Point).with_property(TerrainKey::Place, "town"));
//! let mut writer = TileFileWriter::new();
//! writer.add_tile(tile)?;
//! let blob = writer.into_blob()?;
//!
//! let file = TileFile::new(blob.as_slice())?;
//! let block = file.locate(7)?;
//! assert_eq!(block.feature_count(), 1);
//! # Ok(())
//! # }
//! ```

use super::TileBlock;
use crate::{
	ByteRange, TileError,
	format::{FORMAT_VERSION, FileHeader, Record, TileHeaderEntry},
};
use anyhow::{Context, Result, ensure};
use log::{debug, trace};

/// A validated view of a tile file. Borrows the file buffer and never copies it.
#[derive(Clone, Debug)]
pub struct TileFile<'a> {
	data: &'a [u8],
	header: FileHeader,
	/// Index entries in file order.
	entries: Vec<TileHeaderEntry>,
	/// The same entries sorted by identifier, for lookups.
	sorted: Vec<TileHeaderEntry>,
}

impl<'a> TileFile<'a> {
	/// Reads the file header and the tile index.
	///
	/// Fails with [`TileError::UnsupportedVersion`] for a foreign format version and with
	/// [`TileError::CorruptData`] if the index does not fit into the buffer or repeats an identifier.
	pub fn new(data: &'a [u8]) -> Result<TileFile<'a>> {
		let header = FileHeader::read_at(data, 0).context("failed to read file header")?;

		if header.version != FORMAT_VERSION {
			return Err(TileError::UnsupportedVersion {
				found: header.version,
				expected: FORMAT_VERSION,
			}
			.into());
		}
		ensure!(
			header.tile_count >= 0,
			TileError::corrupt(format!("negative tile count {}", header.tile_count))
		);

		let index = ByteRange::new(FileHeader::LENGTH, 0)
			.records(0, header.tile_count as u64, TileHeaderEntry::LENGTH)
			.filter(|range| range.checked_end().is_some_and(|end| end <= data.len() as u64))
			.ok_or_else(|| {
				TileError::corrupt(format!(
					"tile index of {} entries exceeds file of {} bytes",
					header.tile_count,
					data.len()
				))
			})?;
		trace!("tile index at {index:?}");

		let entries = (0..header.tile_count as u64)
			.map(|i| {
				TileHeaderEntry::read_at(data, TileHeaderEntry::position_in_file(i))
					.with_context(|| format!("failed to read tile index entry {i}"))
			})
			.collect::<Result<Vec<_>>>()?;

		let mut sorted = entries.clone();
		sorted.sort_by_key(|entry| entry.id);
		if let Some(pair) = sorted.windows(2).find(|pair| pair[0].id == pair[1].id) {
			return Err(TileError::corrupt(format!("tile {} appears twice in the tile index", pair[0].id)).into());
		}

		debug!("opened tile file with {} tiles ({} bytes)", entries.len(), data.len());

		Ok(TileFile {
			data,
			header,
			entries,
			sorted,
		})
	}

	pub fn header(&self) -> &FileHeader {
		&self.header
	}

	pub fn tile_count(&self) -> usize {
		self.entries.len()
	}

	/// Tile identifiers in index order.
	pub fn tile_ids(&self) -> impl Iterator<Item = i32> + '_ {
		self.entries.iter().map(|entry| entry.id)
	}

	pub fn contains(&self, tile_id: i32) -> bool {
		self.find_entry(tile_id).is_some()
	}

	/// Finds the block of `tile_id` and validates the pools declared by its header.
	///
	/// Fails with [`TileError::TileNotFound`] if the identifier is not in the index.
	pub fn locate(&self, tile_id: i32) -> Result<TileBlock<'a>> {
		let entry = self.find_entry(tile_id).ok_or(TileError::TileNotFound(tile_id))?;
		TileBlock::new(self.data, tile_id, entry.offset_in_bytes)
			.with_context(|| format!("failed to open block of tile {tile_id} at offset {}", entry.offset_in_bytes))
	}

	fn find_entry(&self, tile_id: i32) -> Option<&TileHeaderEntry> {
		self
			.sorted
			.binary_search_by_key(&tile_id, |entry| entry.id)
			.ok()
			.map(|index| &self.sorted[index])
	}
}
