//! Corpus loading.
//!
//! The corpus is the concatenation of every `*.txt` file in a designated
//! directory, joined in lexicographic filename order so repeated loads of
//! the same file set produce identical text. Original casing and interior
//! whitespace are preserved; the only repair applied is rejoining words the
//! source texts hyphenate across line breaks.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BandsmithError, Result};

/// Words split across lines appear as `"word- \ncontinued"` in the source
/// texts; deleting this sequence rejoins the halves.
const HYPHEN_LINE_BREAK: &str = "- \n";

/// The immutable, in-memory source text. Built once by the hosting process
/// and shared by reference; never mutated after construction.
#[derive(Debug, Clone)]
pub struct Corpus {
    text: String,
}

impl Corpus {
    /// Load the corpus from a directory of `*.txt` files.
    ///
    /// File contents are joined with a single space in lexicographic
    /// filename order. Fails if the directory is missing or unreadable, or
    /// if it contains no text files; no generation is possible without a
    /// corpus, so these are fatal.
    pub fn load(dir: &Path) -> Result<Corpus> {
        let read_err = |source| BandsmithError::CorpusLoad {
            path: dir.to_path_buf(),
            source,
        };

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(dir).map_err(read_err)? {
            let path = entry.map_err(read_err)?.path();
            if path.extension().is_some_and(|ext| ext == "txt") {
                files.push(path);
            }
        }
        files.sort();

        if files.is_empty() {
            return Err(BandsmithError::CorpusEmpty {
                path: dir.to_path_buf(),
            });
        }

        let mut parts = Vec::with_capacity(files.len());
        for file in &files {
            parts.push(fs::read_to_string(file).map_err(read_err)?);
        }

        Ok(Corpus::from_text(parts.join(" ")))
    }

    /// Build a corpus directly from text (test fixtures use this).
    pub fn from_text(text: impl Into<String>) -> Corpus {
        let text = text.into().replace(HYPHEN_LINE_BREAK, "");
        Corpus { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
