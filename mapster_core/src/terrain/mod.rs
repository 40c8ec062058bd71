//! Property keys and value enumerations used instead of free text.

mod terrain_key;
mod values;

pub use terrain_key::*;
pub use values::*;
