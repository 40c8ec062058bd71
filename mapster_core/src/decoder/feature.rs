use crate::{
	format::{Coordinate, GeometryType, MapFeature, Record},
	terrain::TerrainKey,
};
use std::{fmt, iter::Map, slice::ChunksExact};

/// A decoded feature. Label, coordinates and property values borrow the file buffer.
#[derive(Clone, Debug)]
pub struct MapFeatureData<'a> {
	record: MapFeature,
	label: Option<&'a str>,
	coordinates: CoordinateView<'a>,
	properties: Vec<Property<'a>>,
}

impl<'a> MapFeatureData<'a> {
	pub(crate) fn new(
		record: MapFeature,
		label: Option<&'a str>,
		coordinates: CoordinateView<'a>,
		properties: Vec<Property<'a>>,
	) -> Self {
		MapFeatureData {
			record,
			label,
			coordinates,
			properties,
		}
	}

	pub fn id(&self) -> i64 {
		self.record.id
	}

	pub fn geometry_type(&self) -> GeometryType {
		self.record.geometry_type
	}

	pub fn label(&self) -> Option<&'a str> {
		self.label
	}

	pub fn coordinates(&self) -> CoordinateView<'a> {
		self.coordinates
	}

	/// All properties in file order, including unrecognized keys.
	pub fn properties(&self) -> &[Property<'a>] {
		&self.properties
	}

	/// Value of the first property with `key`.
	pub fn property(&self, key: TerrainKey) -> Option<&'a str> {
		self
			.properties
			.iter()
			.find(|property| property.key == key)
			.map(|property| property.value)
	}

	pub fn has_property(&self, key: TerrainKey) -> bool {
		self.properties.iter().any(|property| property.key == key)
	}

	/// The raw on-disk record.
	pub fn record(&self) -> &MapFeature {
		&self.record
	}
}

/// One key/value pair of a feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Property<'a> {
	pub key: TerrainKey,
	pub value: &'a str,
}

/// The coordinates of a feature, decoded on access from the borrowed coordinate pool.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct CoordinateView<'a> {
	bytes: &'a [u8],
}

impl<'a> CoordinateView<'a> {
	const STRIDE: usize = Coordinate::LENGTH as usize;

	/// Wraps a run of encoded coordinates. Trailing bytes that do not form a full coordinate are ignored.
	pub fn new(bytes: &'a [u8]) -> Self {
		let whole = bytes.len() - bytes.len() % Self::STRIDE;
		CoordinateView { bytes: &bytes[..whole] }
	}

	pub fn len(&self) -> usize {
		self.bytes.len() / Self::STRIDE
	}

	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<Coordinate> {
		let start = index.checked_mul(Self::STRIDE)?;
		let bytes = self.bytes.get(start..start.checked_add(Self::STRIDE)?)?;
		Coordinate::from_bytes(bytes).ok()
	}

	pub fn first(&self) -> Option<Coordinate> {
		self.get(0)
	}

	pub fn iter(&self) -> CoordinateIter<'a> {
		self
			.bytes
			.chunks_exact(Self::STRIDE)
			.map(decode_coordinate as fn(&[u8]) -> Coordinate)
	}

	pub fn to_vec(&self) -> Vec<Coordinate> {
		self.iter().collect()
	}
}

/// Iterator over the coordinates of a [`CoordinateView`].
pub type CoordinateIter<'a> = Map<ChunksExact<'a, u8>, fn(&[u8]) -> Coordinate>;

impl<'a> IntoIterator for CoordinateView<'a> {
	type Item = Coordinate;
	type IntoIter = CoordinateIter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'a> IntoIterator for &CoordinateView<'a> {
	type Item = Coordinate;
	type IntoIter = CoordinateIter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

fn decode_coordinate(bytes: &[u8]) -> Coordinate {
	let (latitude, longitude) = bytes.split_at(8);
	let read = |half: &[u8]| half.try_into().map(f64::from_le_bytes).unwrap_or(f64::NAN);
	Coordinate::new(read(latitude), read(longitude))
}

impl fmt::Debug for CoordinateView<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Blob;

	fn encoded(coordinates: &[Coordinate]) -> Blob {
		let mut bytes = Vec::new();
		for coordinate in coordinates {
			bytes.extend(coordinate.to_blob().unwrap().into_vec());
		}
		Blob::from(bytes)
	}

	#[test]
	fn coordinate_access() {
		let coordinates = [Coordinate::new(1.0, 2.0), Coordinate::new(3.5, -4.25)];
		let blob = encoded(&coordinates);
		let view = CoordinateView::new(blob.as_slice());
		assert_eq!(view.len(), 2);
		assert!(!view.is_empty());
		assert_eq!(view.get(1), Some(coordinates[1]));
		assert_eq!(view.get(2), None);
		assert_eq!(view.first(), Some(coordinates[0]));
		assert_eq!(view.to_vec(), coordinates.to_vec());
		assert_eq!(view.iter().len(), 2);
		assert_eq!(view.into_iter().map(|c| c.latitude).collect::<Vec<_>>(), vec![1.0, 3.5]);
	}

	#[test]
	fn trailing_bytes_are_ignored() {
		let mut bytes = encoded(&[Coordinate::new(1.0, 1.0)]).into_vec();
		bytes.extend([0, 0, 0]);
		assert_eq!(CoordinateView::new(&bytes).len(), 1);
	}

	#[test]
	fn empty_view() {
		let view = CoordinateView::default();
		assert!(view.is_empty());
		assert_eq!(view.first(), None);
		assert_eq!(format!("{view:?}"), "[]");
	}
}
