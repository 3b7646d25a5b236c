//! Keyboard neighbor table.

use std::io::BufRead;
use std::path::Path;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::error::LoadError;

/// Neighbor list; a key on a standard layout has at most eight neighbors.
pub type Neighbors = SmallVec<[char; 8]>;

/// Maps a lowercase character to the ordered list of keys adjacent to it.
///
/// # Format
///
/// ```text
/// q w a s
/// w q e a s d
/// ```
///
/// The first token of each line is the key, the remaining tokens are its
/// neighbors. Every token must be a single character. Keys are stored
/// lowercase unless their lowercase form spans several characters (`İ`), in
/// which case they are kept as written; a repeated key replaces the earlier
/// line.
#[derive(Debug, Clone, Default)]
pub struct KeyboardTable {
    neighbors: FxHashMap<char, Neighbors>,
}

impl KeyboardTable {
    /// Load the table from a file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read and
    /// [`LoadError::Malformed`] for blank lines or multi-character tokens.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let mut table = Self::default();
        super::load_entries(path, |line, key, rest| table.insert_line(path, line, key, rest))?;
        debug!(path = %path.display(), keys = table.len(), "loaded keyboard table");
        Ok(table)
    }

    /// Parse the table from any buffered reader; `source` labels errors.
    pub fn from_reader<R: BufRead, S: AsRef<Path>>(reader: R, source: S) -> Result<Self, LoadError> {
        let source = source.as_ref();
        let mut table = Self::default();
        super::read_entries(reader, source, |line, key, rest| {
            table.insert_line(source, line, key, rest)
        })?;
        debug!(source = %source.display(), keys = table.len(), "parsed keyboard table");
        Ok(table)
    }

    /// Build a table from in-memory pairs.
    pub fn from_pairs<I, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, N)>,
        N: IntoIterator<Item = char>,
    {
        let neighbors = pairs
            .into_iter()
            .map(|(key, ns)| (fold_key(key), ns.into_iter().collect()))
            .collect();
        Self { neighbors }
    }

    fn insert_line(
        &mut self,
        source: &Path,
        line: usize,
        key: &str,
        rest: std::str::SplitWhitespace<'_>,
    ) -> Result<(), LoadError> {
        let key = single_char(key)
            .ok_or_else(|| LoadError::malformed(source, line, format!("key `{key}` is not a single character")))?;

        let mut neighbors = Neighbors::new();
        for token in rest {
            let neighbor = single_char(token).ok_or_else(|| {
                LoadError::malformed(source, line, format!("neighbor `{token}` is not a single character"))
            })?;
            neighbors.push(neighbor);
        }

        self.neighbors.insert(fold_key(key), neighbors);
        Ok(())
    }

    /// Neighbors of `c`, looked up case-insensitively.
    ///
    /// Returns `None` when the character is not in the table.
    pub fn neighbors(&self, c: char) -> Option<&[char]> {
        self.neighbors.get(&fold_key(c)).map(|n| n.as_slice())
    }

    /// Number of keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether the table has no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

// Lowercase form of `c` when that is a single char, `c` itself otherwise.
fn fold_key(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(k), None) => k,
        _ => c,
    }
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
