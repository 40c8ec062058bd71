use crate::{
	Blob,
	format::{Coordinate, GeometryType, MapFeature, PropertyEntry, Record, StringEntry, TileBlockHeader},
	io::{ValueWriter, ValueWriterBlob},
	terrain::TerrainKey,
};
use anyhow::{Context, Result, ensure};
use log::trace;
use std::collections::HashMap;

/// An owned feature waiting to be written into a tile.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureRecord {
	pub id: i64,
	pub geometry_type: GeometryType,
	pub label: Option<String>,
	pub coordinates: Vec<Coordinate>,
	pub properties: Vec<(TerrainKey, String)>,
}

impl FeatureRecord {
	pub fn new(id: i64, geometry_type: GeometryType) -> FeatureRecord {
		FeatureRecord {
			id,
			geometry_type,
			label: None,
			coordinates: Vec::new(),
			properties: Vec::new(),
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Appends coordinates given as `(latitude, longitude)` pairs.
	pub fn with_coordinates(mut self, coordinates: impl IntoIterator<Item = (f64, f64)>) -> Self {
		self
			.coordinates
			.extend(coordinates.into_iter().map(|(lat, lon)| Coordinate::new(lat, lon)));
		self
	}

	pub fn with_property(mut self, key: TerrainKey, value: impl Into<String>) -> Self {
		self.properties.push((key, value.into()));
		self
	}
}

/// Collects the features of one tile and encodes them as a tile block.
///
/// Identical strings (labels and property values) share one entry of the string pool.
#[derive(Clone, Debug)]
pub struct TileBuilder {
	id: i32,
	features: Vec<FeatureRecord>,
}

impl TileBuilder {
	pub fn new(id: i32) -> TileBuilder {
		TileBuilder {
			id,
			features: Vec::new(),
		}
	}

	pub fn id(&self) -> i32 {
		self.id
	}

	pub fn feature_count(&self) -> usize {
		self.features.len()
	}

	pub fn add_feature(&mut self, feature: FeatureRecord) -> &mut Self {
		self.features.push(feature);
		self
	}

	/// Encodes the block as it will be placed at the absolute file `offset`.
	///
	/// The block header is followed by the feature records, the property pool, the coordinate pool,
	/// the string pool and the character pool, in that order.
	pub fn encode(&self, offset: u64) -> Result<Blob> {
		let mut strings = StringPool::default();
		let mut features = Vec::with_capacity(self.features.len());
		let mut properties = Vec::new();
		let mut coordinates = Vec::new();

		for feature in &self.features {
			let label_offset = match &feature.label {
				Some(label) => strings.intern(label)?,
				None => MapFeature::NO_LABEL,
			};
			let properties_offset = count_i32(properties.len(), "properties")?;
			for (key, value) in &feature.properties {
				properties.push(PropertyEntry::new(key.as_i32(), strings.intern(value)?));
			}
			let coordinate_offset = count_i32(coordinates.len(), "coordinates")?;
			coordinates.extend_from_slice(&feature.coordinates);

			features.push(MapFeature {
				id: feature.id,
				label_offset,
				geometry_type: feature.geometry_type,
				coordinate_offset,
				coordinate_count: count_i32(feature.coordinates.len(), "coordinates")?,
				properties_offset,
				property_count: count_i32(feature.properties.len(), "properties")?,
			});
		}

		let features_start = offset + TileBlockHeader::LENGTH;
		let properties_start = features_start + features.len() as u64 * MapFeature::LENGTH;
		let coordinates_start = properties_start + properties.len() as u64 * PropertyEntry::LENGTH;
		let strings_start = coordinates_start + coordinates.len() as u64 * Coordinate::LENGTH;
		let characters_start = strings_start + strings.entries.len() as u64 * StringEntry::LENGTH;

		let header = TileBlockHeader {
			features_count: count_i32(features.len(), "features")?,
			coordinates_count: count_i32(coordinates.len(), "coordinates")?,
			string_count: count_i32(strings.entries.len(), "strings")?,
			characters_count: count_i32(strings.characters.len(), "characters")?,
			coordinates_offset_in_bytes: coordinates_start,
			strings_offset_in_bytes: strings_start,
			characters_offset_in_bytes: characters_start,
		};
		trace!("encoding tile {} at offset {offset}: {header:?}", self.id);

		let mut writer = ValueWriterBlob::new_le();
		header.write(&mut writer)?;
		for feature in &features {
			feature.write(&mut writer)?;
		}
		for property in &properties {
			property.write(&mut writer)?;
		}
		for coordinate in &coordinates {
			coordinate.write(&mut writer)?;
		}
		for entry in &strings.entries {
			entry.write(&mut writer)?;
		}
		writer.write_slice(&strings.characters)?;

		let length = writer.position()?;
		ensure!(
			offset + length == characters_start + strings.characters.len() as u64,
			"tile {} encoded to {length} bytes, which does not match its pool layout",
			self.id
		);
		Ok(writer.into_blob())
	}
}

fn count_i32(count: usize, what: &str) -> Result<i32> {
	i32::try_from(count).with_context(|| format!("too many {what} in one tile: {count}"))
}

#[derive(Default)]
struct StringPool {
	lookup: HashMap<String, i32>,
	entries: Vec<StringEntry>,
	characters: Vec<u8>,
}

impl StringPool {
	/// Returns the index of `value` in the pool, appending it if it is new.
	fn intern(&mut self, value: &str) -> Result<i32> {
		if let Some(index) = self.lookup.get(value) {
			return Ok(*index);
		}
		let index = count_i32(self.entries.len(), "strings")?;
		self.entries.push(StringEntry::new(
			count_i32(self.characters.len(), "characters")?,
			count_i32(value.len(), "characters")?,
		));
		self.characters.extend_from_slice(value.as_bytes());
		self.lookup.insert(value.to_string(), index);
		Ok(index)
	}
}
