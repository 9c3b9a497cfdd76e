//! The known-band registry and duplicate lookup.
//!
//! The registry file is produced from Wikidata: one `identifier<TAB>label`
//! record per line. Rows whose identifier is not a real entity id (local
//! placeholder rows like `t93120` that lack external backing) are excluded
//! while loading, not at query time. Labels are stored lower-cased so
//! lookup is case-insensitive and O(1) expected.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use crate::error::{BandsmithError, Result};

/// Real registry identifiers are Wikidata entity ids: `Q` plus digits.
static ENTITY_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Q[0-9]+$").unwrap());

/// A placeholder identifier lacks real external backing and its row is
/// dropped at load time.
fn is_placeholder_id(id: &str) -> bool {
    !ENTITY_ID_RE.is_match(id)
}

/// Normalized lookup set of known band names. Loaded once, immutable, safe
/// for unsynchronized concurrent reads.
#[derive(Debug, Clone, Default)]
pub struct KnownBandSet {
    names: HashSet<String>,
}

impl KnownBandSet {
    /// Load the registry from a tab-delimited `identifier\tlabel` file.
    ///
    /// Blank lines are skipped; lines without a tab separator are skipped
    /// with a warning; placeholder-identifier rows are excluded.
    pub fn load(path: &Path) -> Result<KnownBandSet> {
        let content = fs::read_to_string(path).map_err(|source| BandsmithError::RegistryLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let mut names = HashSet::new();
        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some((id, label)) = line.split_once('\t') else {
                warn!(
                    "skipping malformed registry line {}: no identifier/label separator",
                    index + 1
                );
                continue;
            };
            if is_placeholder_id(id.trim()) {
                continue;
            }
            let label = label.trim();
            if !label.is_empty() {
                names.insert(label.to_lowercase());
            }
        }

        Ok(KnownBandSet { names })
    }

    /// The explicit degraded mode: every lookup answers false. Hosts choose
    /// this deliberately when no registry is available.
    pub fn empty() -> KnownBandSet {
        KnownBandSet::default()
    }

    /// Build a set directly from labels (test fixtures use this).
    pub fn from_names<I, S>(labels: I) -> KnownBandSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        KnownBandSet {
            names: labels
                .into_iter()
                .map(|label| label.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
