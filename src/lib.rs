pub mod bandname;
pub mod cli;
pub mod error;

pub use bandname::{Corpus, GenerationResult, Generator, KnownBandSet};
pub use error::{BandsmithError, Result};
