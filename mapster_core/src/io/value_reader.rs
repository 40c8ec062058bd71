//! The `ValueReader` trait for the fixed-width fields of the tile format.
//!
//! Records are decoded field by field. The reader tracks its position so a record decoder ends up
//! exactly at the record length it declares.
//!
//! ```rust
//! use mapster_core::io::{ValueReader, ValueReaderSlice};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut reader = ValueReaderSlice::new_le(&[0x2A, 0, 0, 0, 0xFF]);
//!     assert_eq!(reader.read_i32()?, 42);
//!     assert_eq!(reader.read_u8()?, 255);
//!     assert_eq!(reader.remaining(), 0);
//!     Ok(())
//! }
//! ```

use anyhow::{Result, ensure};
use byteorder::{ByteOrder, ReadBytesExt};
use std::io::Read;

/// Reads fixed-width values in the byte order `E`.
pub trait ValueReader<'a, E: ByteOrder + 'a> {
	fn get_reader(&mut self) -> &mut dyn Read;

	/// Total number of readable bytes.
	fn len(&self) -> u64;

	fn position(&mut self) -> u64;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn remaining(&mut self) -> u64 {
		self.len() - self.position()
	}

	/// Fails unless at least `length` more bytes can be read.
	fn ensure_remaining(&mut self, length: u64) -> Result<()> {
		let remaining = self.remaining();
		ensure!(
			remaining >= length,
			"need {length} bytes but only {remaining} bytes remain"
		);
		Ok(())
	}

	fn read_u8(&mut self) -> Result<u8> {
		Ok(self.get_reader().read_u8()?)
	}

	fn read_i32(&mut self) -> Result<i32> {
		Ok(self.get_reader().read_i32::<E>()?)
	}

	fn read_i64(&mut self) -> Result<i64> {
		Ok(self.get_reader().read_i64::<E>()?)
	}

	fn read_u64(&mut self) -> Result<u64> {
		Ok(self.get_reader().read_u64::<E>()?)
	}

	fn read_f64(&mut self) -> Result<f64> {
		Ok(self.get_reader().read_f64::<E>()?)
	}
}
