//! Natural typo table: attested human misspellings per word.

use std::io::BufRead;
use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::LoadError;

/// Maps a word to the ordered list of misspellings observed for it.
///
/// # Format
///
/// ```text
/// because becuase beacuse becasue
/// their thier
/// ```
///
/// Keys are matched exactly as written; `Their` and `their` are distinct
/// entries.
#[derive(Debug, Clone, Default)]
pub struct NaturalTypoTable {
    typos: FxHashMap<String, Vec<String>>,
}

impl NaturalTypoTable {
    /// Load the table from a file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read and
    /// [`LoadError::Malformed`] for blank lines.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let mut table = Self::default();
        super::load_entries(path, |_, word, variants| {
            table.insert(word, variants);
            Ok(())
        })?;
        debug!(path = %path.display(), words = table.len(), "loaded natural typo table");
        Ok(table)
    }

    /// Parse the table from any buffered reader; `source` labels errors.
    pub fn from_reader<R: BufRead, S: AsRef<Path>>(reader: R, source: S) -> Result<Self, LoadError> {
        let source = source.as_ref();
        let mut table = Self::default();
        super::read_entries(reader, source, |_, word, variants| {
            table.insert(word, variants);
            Ok(())
        })?;
        debug!(source = %source.display(), words = table.len(), "parsed natural typo table");
        Ok(table)
    }

    /// Build a table from in-memory pairs.
    pub fn from_pairs<I, W, V, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (W, V)>,
        W: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let typos = pairs
            .into_iter()
            .map(|(word, variants)| (word.into(), variants.into_iter().map(Into::into).collect()))
            .collect();
        Self { typos }
    }

    fn insert<'a>(&mut self, word: &str, variants: impl Iterator<Item = &'a str>) {
        self.typos
            .insert(word.to_string(), variants.map(str::to_string).collect());
    }

    /// Attested misspellings of `word` (exact match).
    pub fn variants(&self, word: &str) -> Option<&[String]> {
        self.typos.get(word).map(|v| v.as_slice())
    }

    /// Number of words with recorded typos.
    #[inline]
    pub fn len(&self) -> usize {
        self.typos.len()
    }

    /// Whether the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.typos.is_empty()
    }
}
