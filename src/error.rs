//! Error taxonomy for the generation pipeline.
//!
//! Corpus and registry load failures are fatal at startup: without the
//! source text there is nothing to extract from, and without the registry
//! duplicate checking is impossible (the explicit degraded mode is
//! [`KnownBandSet::empty`](crate::bandname::KnownBandSet::empty), chosen by
//! the host, never an automatic fallback). `Exhausted` is recoverable at
//! the call site: the caller may retry the whole `generate()` call or
//! surface a "try again" response.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BandsmithError {
    #[error("failed to load corpus from {}: {source}", .path.display())]
    CorpusLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus directory {} contains no text files", .path.display())]
    CorpusEmpty { path: PathBuf },

    #[error("failed to load band registry from {}: {source}", .path.display())]
    RegistryLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no acceptable band name found after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

pub type Result<T> = std::result::Result<T, BandsmithError>;
