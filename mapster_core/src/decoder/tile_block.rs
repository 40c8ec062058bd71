use super::{CoordinateView, MapFeatureData, Property};
use crate::{
	ByteRange, TileError,
	format::{Coordinate, MapFeature, PropertyEntry, Record, StringEntry, TileBlockHeader, slice_range},
	terrain::TerrainKey,
};
use anyhow::{Context, Result};
use log::{debug, trace};
use std::iter::FusedIterator;

/// The decoded header of one tile and borrowed views of its pools.
///
/// Opening a block checks that every pool lies inside the file. Individual features are only
/// decoded, and checked against these pools, when [`TileBlock::features`] reaches them.
#[derive(Clone, Copy, Debug)]
pub struct TileBlock<'a> {
	id: i32,
	header: TileBlockHeader,
	features: &'a [u8],
	properties: &'a [u8],
	coordinates: &'a [u8],
	strings: &'a [u8],
	characters: &'a [u8],
}

impl<'a> TileBlock<'a> {
	pub(crate) fn new(data: &'a [u8], id: i32, offset: u64) -> Result<TileBlock<'a>> {
		let header = TileBlockHeader::read_at(data, offset)?;
		trace!("tile {id}: {header:?}");

		let features_start = offset + TileBlockHeader::LENGTH;
		let features = pool(data, "feature", features_start, header.features_count, MapFeature::LENGTH)?;
		let coordinates = pool(
			data,
			"coordinate",
			header.coordinates_offset_in_bytes,
			header.coordinates_count,
			Coordinate::LENGTH,
		)?;
		let strings = pool(
			data,
			"string",
			header.strings_offset_in_bytes,
			header.string_count,
			StringEntry::LENGTH,
		)?;
		let characters = pool(
			data,
			"character",
			header.characters_offset_in_bytes,
			header.characters_count,
			1,
		)?;

		// The property pool follows the feature records and runs up to the next pool of this block.
		let properties_start = features_start + features.len() as u64;
		let properties_end = [
			header.coordinates_offset_in_bytes,
			header.strings_offset_in_bytes,
			header.characters_offset_in_bytes,
		]
		.into_iter()
		.filter(|&offset| offset >= properties_start)
		.min()
		.unwrap_or(data.len() as u64);
		let property_count = (properties_end - properties_start) / PropertyEntry::LENGTH;
		let properties = slice_range(
			data,
			&ByteRange::new(properties_start, property_count * PropertyEntry::LENGTH),
		)
		.ok_or_else(|| TileError::corrupt(format!("property pool of tile {id} exceeds the file")))?;

		debug!(
			"tile {id}: {} features, {} coordinates, {} strings, {} properties",
			header.features_count, header.coordinates_count, header.string_count, property_count
		);

		Ok(TileBlock {
			id,
			header,
			features,
			properties,
			coordinates,
			strings,
			characters,
		})
	}

	pub fn id(&self) -> i32 {
		self.id
	}

	pub fn header(&self) -> &TileBlockHeader {
		&self.header
	}

	pub fn feature_count(&self) -> usize {
		self.features.len() / MapFeature::LENGTH as usize
	}

	/// Number of key/value pairs in the property pool.
	pub fn property_count(&self) -> usize {
		self.properties.len() / PropertyEntry::LENGTH as usize
	}

	/// Iterates over the features in file order. Every call starts from the first feature.
	pub fn features(&self) -> Features<'a> {
		Features {
			block: *self,
			next: 0,
		}
	}

	/// Decodes the feature at `index`, resolving its label, coordinates and properties.
	///
	/// Fails with [`TileError::CorruptData`] if any of its references leaves the pool it points into.
	pub fn feature(&self, index: usize) -> Result<MapFeatureData<'a>> {
		let range = ByteRange::new(0, self.features.len() as u64)
			.records(index as u64, 1, MapFeature::LENGTH)
			.filter(|range| range.checked_end().is_some_and(|end| end <= self.features.len() as u64))
			.ok_or_else(|| TileError::corrupt(format!("feature {index} is outside of tile {}", self.id)))?;
		let record = MapFeature::from_bytes(&self.features[range.as_range_usize()])
			.with_context(|| format!("failed to decode feature {index} of tile {}", self.id))?;
		self
			.decode(record)
			.with_context(|| format!("failed to resolve feature {} of tile {}", record.id, self.id))
	}

	fn decode(&self, record: MapFeature) -> Result<MapFeatureData<'a>> {
		let label = if record.has_label() {
			Some(self.string(record.label_offset)?)
		} else {
			None
		};

		let coordinates = sub_pool(
			self.coordinates,
			"coordinate",
			record.coordinate_offset,
			record.coordinate_count,
			Coordinate::LENGTH,
		)?;

		let property_bytes = sub_pool(
			self.properties,
			"property",
			record.properties_offset,
			record.property_count,
			PropertyEntry::LENGTH,
		)?;
		let properties = property_bytes
			.chunks_exact(PropertyEntry::LENGTH as usize)
			.map(|bytes| -> Result<Property<'a>> {
				let entry = PropertyEntry::from_bytes(bytes)?;
				let key = TerrainKey::from_i32(entry.key);
				if !key.is_recognized() {
					trace!("feature {}: ignoring unrecognized property key {}", record.id, entry.key);
				}
				Ok(Property {
					key,
					value: self.string(entry.value)?,
				})
			})
			.collect::<Result<Vec<_>>>()?;

		Ok(MapFeatureData::new(
			record,
			label,
			CoordinateView::new(coordinates),
			properties,
		))
	}

	/// Resolves the string entry at `index` against the character pool.
	pub fn string(&self, index: i32) -> Result<&'a str> {
		let entry_bytes = sub_pool(self.strings, "string", index, 1, StringEntry::LENGTH)?;
		let entry = StringEntry::from_bytes(entry_bytes)?;
		let bytes = sub_pool(self.characters, "character", entry.offset, entry.length, 1)?;
		std::str::from_utf8(bytes)
			.map_err(|e| TileError::corrupt(format!("string {index} is not valid UTF-8: {e}")).into())
	}
}

/// Iterator over the features of a [`TileBlock`], in file order.
///
/// Stops after the first feature that fails to decode.
#[derive(Clone, Debug)]
pub struct Features<'a> {
	block: TileBlock<'a>,
	next: usize,
}

impl<'a> Iterator for Features<'a> {
	type Item = Result<MapFeatureData<'a>>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.next >= self.block.feature_count() {
			return None;
		}
		let feature = self.block.feature(self.next);
		self.next = if feature.is_ok() {
			self.next + 1
		} else {
			self.block.feature_count()
		};
		Some(feature)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.block.feature_count().saturating_sub(self.next);
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for Features<'_> {}

impl FusedIterator for Features<'_> {}

/// Returns the `count` records of `record_length` bytes at the absolute `offset` of `data`.
fn pool<'a>(data: &'a [u8], name: &str, offset: u64, count: i32, record_length: u64) -> Result<&'a [u8]> {
	let count = u64::try_from(count).map_err(|_| TileError::corrupt(format!("negative {name} count {count}")))?;
	ByteRange::new(offset, 0)
		.records(0, count, record_length)
		.and_then(|range| slice_range(data, &range))
		.ok_or_else(|| {
			TileError::corrupt(format!(
				"{name} pool of {count} records at offset {offset} exceeds file of {} bytes",
				data.len()
			))
			.into()
		})
}

/// Returns `count` records of `record_length` bytes starting at record `index` of `pool`.
fn sub_pool<'a>(pool: &'a [u8], name: &str, index: i32, count: i32, record_length: u64) -> Result<&'a [u8]> {
	let corrupt = || {
		TileError::corrupt(format!(
			"{name} range {index}+{count} exceeds pool of {} records",
			pool.len() as u64 / record_length
		))
	};
	let (Ok(start), Ok(length)) = (u64::try_from(index), u64::try_from(count)) else {
		return Err(corrupt().into());
	};
	ByteRange::new(0, 0)
		.records(start, length, record_length)
		.and_then(|range| slice_range(pool, &range))
		.ok_or_else(|| corrupt().into())
}
