use super::TileBuilder;
use crate::{
	Blob,
	format::{FileHeader, Record, TileHeaderEntry},
	io::{ValueWriter, ValueWriterBlob},
};
use anyhow::{Context, Result, ensure};
use log::debug;
use std::collections::HashSet;

/// Serialises tiles into a complete tile file.
///
/// Tiles are written in the order they were added, directly after the tile index.
#[derive(Debug, Default)]
pub struct TileFileWriter {
	tiles: Vec<TileBuilder>,
	ids: HashSet<i32>,
}

impl TileFileWriter {
	pub fn new() -> TileFileWriter {
		TileFileWriter::default()
	}

	/// Adds a tile. Fails if a tile with the same identifier was already added.
	pub fn add_tile(&mut self, tile: TileBuilder) -> Result<()> {
		ensure!(self.ids.insert(tile.id()), "tile {} was already added", tile.id());
		self.tiles.push(tile);
		Ok(())
	}

	pub fn tile_count(&self) -> usize {
		self.tiles.len()
	}

	pub fn into_blob(self) -> Result<Blob> {
		let tile_count = i32::try_from(self.tiles.len()).context("too many tiles for one file")?;

		let mut offset = TileHeaderEntry::position_in_file(self.tiles.len() as u64);
		let mut index = Vec::with_capacity(self.tiles.len());
		let mut blocks = Vec::with_capacity(self.tiles.len());
		for tile in &self.tiles {
			let block = tile
				.encode(offset)
				.with_context(|| format!("failed to encode tile {}", tile.id()))?;
			index.push(TileHeaderEntry::new(tile.id(), offset));
			offset += block.len();
			blocks.push(block);
		}

		let mut writer = ValueWriterBlob::new_le();
		FileHeader::new(tile_count).write(&mut writer)?;
		for entry in &index {
			entry.write(&mut writer)?;
		}
		for block in &blocks {
			writer.write_blob(block)?;
		}

		debug!("wrote tile file with {tile_count} tiles ({offset} bytes)");
		Ok(writer.into_blob())
	}
}
