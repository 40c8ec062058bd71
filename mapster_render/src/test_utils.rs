use anyhow::Result;
use mapster_core::{Blob, FeatureRecord, MapFeatureData, TileBuilder, TileFile, TileFileWriter};

/// Tile identifier used by [`encode`].
pub const TILE_ID: i32 = 0;

/// An encoded single-tile file.
pub struct Encoded {
	pub blob: Blob,
}

impl Encoded {
	pub fn features(&self) -> Vec<MapFeatureData<'_>> {
		TileFile::new(self.blob.as_slice())
			.unwrap()
			.locate(TILE_ID)
			.unwrap()
			.features()
			.collect::<Result<Vec<_>>>()
			.unwrap()
	}

	pub fn feature(&self) -> MapFeatureData<'_> {
		self.features().remove(0)
	}
}

pub fn encode(records: &[FeatureRecord]) -> Encoded {
	let mut tile = TileBuilder::new(TILE_ID);
	for record in records {
		tile.add_feature(record.clone());
	}
	let mut writer = TileFileWriter::new();
	writer.add_tile(tile).unwrap();
	Encoded {
		blob: writer.into_blob().unwrap(),
	}
}

pub fn decode_single(record: &FeatureRecord) -> Encoded {
	encode(std::slice::from_ref(record))
}
