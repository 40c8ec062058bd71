use crate::{
	Blob, ByteRange, TileError,
	io::{ValueReader, ValueReaderSlice, ValueWriter, ValueWriterBlob},
};
use anyhow::{Result, ensure};
use byteorder::LE;

/// A fixed-length, padding-free record of the tile format.
///
/// Implementors read and write their fields in declaration order, which places every field at its
/// documented byte offset. The total must always be exactly [`Record::LENGTH`] bytes.
pub trait Record: Sized {
	/// Encoded size in bytes.
	const LENGTH: u64;

	/// Human readable name used in error messages.
	const NAME: &'static str;

	/// Reads the fields of one record from the current reader position.
	fn read(reader: &mut dyn ValueReader<'_, LE>) -> Result<Self>;

	/// Writes the fields of one record at the current writer position.
	fn write(&self, writer: &mut dyn ValueWriter<LE>) -> Result<()>;

	/// Decodes a record from the first [`Record::LENGTH`] bytes of `bytes`.
	fn from_bytes(bytes: &[u8]) -> Result<Self> {
		let mut reader = ValueReaderSlice::new_le(bytes);
		reader.ensure_remaining(Self::LENGTH)?;
		Self::read(&mut reader)
	}

	/// Decodes the record stored at the absolute byte `offset` of a file buffer.
	///
	/// Fails with [`TileError::CorruptData`] if the record does not fit into the buffer.
	fn read_at(data: &[u8], offset: u64) -> Result<Self> {
		let range = ByteRange::new(offset, Self::LENGTH);
		let bytes = slice_range(data, &range)
			.ok_or_else(|| TileError::corrupt(format!("{} at {range:?} exceeds file of {} bytes", Self::NAME, data.len())))?;
		Self::from_bytes(bytes)
	}

	/// Encodes the record into a new [`Blob`] of exactly [`Record::LENGTH`] bytes.
	fn to_blob(&self) -> Result<Blob> {
		let mut writer = ValueWriterBlob::new_le();
		self.write(&mut writer)?;
		let position = writer.position()?;
		ensure!(
			position == Self::LENGTH,
			"{} should be {} bytes long, but is {position} bytes long",
			Self::NAME,
			Self::LENGTH
		);
		Ok(writer.into_blob())
	}
}

/// Returns the bytes of `data` covered by `range`, or `None` if it reaches past the end.
pub fn slice_range<'a>(data: &'a [u8], range: &ByteRange) -> Option<&'a [u8]> {
	let end = range.checked_end()?;
	if end > data.len() as u64 {
		return None;
	}
	data.get(range.as_range_usize())
}
