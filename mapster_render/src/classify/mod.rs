//! Turning decoded features into shape categories.

mod category;
mod classifier;
mod predicates;
mod rules;

pub use category::*;
pub use classifier::*;
pub use predicates::*;
pub use rules::*;
