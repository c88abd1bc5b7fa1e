pub mod error;
pub mod sequence;
pub mod primality;
pub mod enumerator;
pub mod format;
pub mod tokenize;
pub mod names;
pub mod input;

pub use enumerator::{enumerate, enumerate_range};
pub use error::{Error, Result};
pub use sequence::{Mode, PrimeSequence};
