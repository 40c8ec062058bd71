//! Integration tests for writing tile files and decoding them again.
//!
//! These tests verify that every feature field survives the binary layout and that tiles can be
//! located in any index order.

use anyhow::Result;
use mapster_core::*;
use pretty_assertions::assert_eq;

fn road() -> FeatureRecord {
	FeatureRecord::new(1001, GeometryType::Polyline)
		.with_label("Unter den Linden")
		.with_coordinates([(52.5163, 13.3777), (52.5170, 13.3888), (52.5175, 13.3990)])
		.with_property(TerrainKey::Highway, "primary")
		.with_property(TerrainKey::Name, "Unter den Linden")
}

fn park() -> FeatureRecord {
	FeatureRecord::new(-7, GeometryType::Polygon)
		.with_coordinates([(52.51, 13.35), (52.52, 13.35), (52.52, 13.37), (52.51, 13.35)])
		.with_property(TerrainKey::Landuse, "forest")
		.with_property(TerrainKey::Unrecognized(99), "ignored")
}

fn town() -> FeatureRecord {
	FeatureRecord::new(i64::MAX, GeometryType::Point)
		.with_label("Köpenick")
		.with_coordinates([(52.4455, 13.5746)])
		.with_property(TerrainKey::Place, "town")
}

fn write(tiles: Vec<TileBuilder>) -> Result<Blob> {
	let mut writer = TileFileWriter::new();
	for tile in tiles {
		writer.add_tile(tile)?;
	}
	writer.into_blob()
}

fn assert_feature(decoded: &MapFeatureData<'_>, expected: &FeatureRecord) {
	assert_eq!(decoded.id(), expected.id);
	assert_eq!(decoded.geometry_type(), expected.geometry_type);
	assert_eq!(decoded.label(), expected.label.as_deref());
	assert_eq!(decoded.coordinates().to_vec(), expected.coordinates);
	let properties = decoded
		.properties()
		.iter()
		.map(|p| (p.key, p.value.to_string()))
		.collect::<Vec<_>>();
	assert_eq!(properties, expected.properties);
}

#[test]
fn features_survive_round_trip() -> Result<()> {
	let expected = vec![road(), park(), town()];
	let mut tile = TileBuilder::new(12);
	for feature in &expected {
		tile.add_feature(feature.clone());
	}
	let blob = write(vec![tile])?;

	let file = TileFile::new(blob.as_slice())?;
	assert_eq!(file.tile_ids().collect::<Vec<_>>(), vec![12]);

	let block = file.locate(12)?;
	assert_eq!(block.id(), 12);
	assert_eq!(block.feature_count(), 3);
	assert_eq!(block.property_count(), 5);

	let decoded = block.features().collect::<Result<Vec<_>>>()?;
	assert_eq!(decoded.len(), expected.len());
	for (decoded, expected) in decoded.iter().zip(&expected) {
		assert_feature(decoded, expected);
	}
	Ok(())
}

#[test]
fn property_helpers() -> Result<()> {
	let mut tile = TileBuilder::new(0);
	tile.add_feature(park());
	let blob = write(vec![tile])?;
	let file = TileFile::new(blob.as_slice())?;
	let feature = file.locate(0)?.features().next().unwrap()?;

	assert_eq!(feature.property(TerrainKey::Landuse), Some("forest"));
	assert_eq!(feature.property(TerrainKey::Highway), None);
	assert!(feature.has_property(TerrainKey::Unrecognized(99)));
	assert!(!feature.has_property(TerrainKey::Water));
	assert_eq!(feature.label(), None);
	Ok(())
}

#[test]
fn identical_strings_share_the_pool() -> Result<()> {
	let mut tile = TileBuilder::new(1);
	tile.add_feature(road());
	let blob = write(vec![tile])?;
	let file = TileFile::new(blob.as_slice())?;
	let block = file.locate(1)?;

	// "Unter den Linden" is used as label and as name, "primary" once.
	assert_eq!(block.header().string_count, 2);
	assert_eq!(block.header().characters_count, 16 + 7);

	let feature = block.feature(0)?;
	let label = feature.label().unwrap();
	let name = feature.property(TerrainKey::Name).unwrap();
	assert_eq!(label.as_ptr(), name.as_ptr());
	Ok(())
}

#[test]
fn decoded_views_borrow_the_buffer() -> Result<()> {
	let mut tile = TileBuilder::new(1);
	tile.add_feature(town());
	let blob = write(vec![tile])?;
	let data = blob.as_slice();
	let feature = TileFile::new(data)?.locate(1)?.feature(0)?;

	let label = feature.label().unwrap();
	let range = data.as_ptr_range();
	assert!(range.contains(&label.as_ptr()));
	assert_eq!(label, "Köpenick");
	Ok(())
}

#[test]
fn tiles_are_found_in_every_index_order() -> Result<()> {
	let ids = [5, -3, 17, 0];
	for order in permutations(&ids) {
		let tiles = order
			.iter()
			.map(|&id| {
				let mut tile = TileBuilder::new(id);
				tile.add_feature(FeatureRecord::new(i64::from(id) * 10, GeometryType::Point));
				tile
			})
			.collect();
		let blob = write(tiles)?;
		let file = TileFile::new(blob.as_slice())?;

		assert_eq!(file.tile_ids().collect::<Vec<_>>(), order);
		for id in ids {
			let block = file.locate(id)?;
			assert_eq!(block.id(), id);
			assert_eq!(block.feature(0)?.id(), i64::from(id) * 10, "order {order:?}");
		}
		for missing in [1, 42, i32::MIN, i32::MAX] {
			let error = file.locate(missing).unwrap_err();
			assert_eq!(find_tile_error(&error), Some(&TileError::TileNotFound(missing)));
		}
	}
	Ok(())
}

#[test]
fn missing_tile_42() -> Result<()> {
	let blob = write(vec![TileBuilder::new(1), TileBuilder::new(2), TileBuilder::new(3)])?;
	let file = TileFile::new(blob.as_slice())?;
	let error = file.locate(42).unwrap_err();
	assert_eq!(error.downcast_ref::<TileError>(), Some(&TileError::TileNotFound(42)));
	Ok(())
}

fn permutations(items: &[i32]) -> Vec<Vec<i32>> {
	if items.len() <= 1 {
		return vec![items.to_vec()];
	}
	let mut result = Vec::new();
	for (i, &first) in items.iter().enumerate() {
		let mut rest = items.to_vec();
		rest.remove(i);
		for mut tail in permutations(&rest) {
			tail.insert(0, first);
			result.push(tail);
		}
	}
	result
}
