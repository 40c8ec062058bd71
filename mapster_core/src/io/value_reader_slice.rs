use super::ValueReader;
use byteorder::{ByteOrder, LittleEndian};
use std::{
	io::{Cursor, Read},
	marker::PhantomData,
};

/// Reads values from a borrowed record slice without copying it.
pub struct ValueReaderSlice<'a, E: ByteOrder> {
	_phantom: PhantomData<E>,
	cursor: Cursor<&'a [u8]>,
}

impl<'a, E: ByteOrder> ValueReaderSlice<'a, E> {
	#[must_use]
	pub fn new(slice: &'a [u8]) -> ValueReaderSlice<'a, E> {
		ValueReaderSlice {
			_phantom: PhantomData,
			cursor: Cursor::new(slice),
		}
	}
}

impl<'a> ValueReaderSlice<'a, LittleEndian> {
	/// The byte order of every tile file.
	#[must_use]
	pub fn new_le(slice: &'a [u8]) -> ValueReaderSlice<'a, LittleEndian> {
		ValueReaderSlice::new(slice)
	}
}

impl<'a, E: ByteOrder + 'a> ValueReader<'a, E> for ValueReaderSlice<'a, E> {
	fn get_reader(&mut self) -> &mut dyn Read {
		&mut self.cursor
	}

	fn len(&self) -> u64 {
		self.cursor.get_ref().len() as u64
	}

	fn position(&mut self) -> u64 {
		self.cursor.position()
	}
}
