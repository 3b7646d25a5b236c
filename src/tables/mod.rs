//! Lookup tables backing the keyboard and natural typo attacks.
//!
//! Both resources share one line-oriented format: whitespace-separated
//! tokens, the first being the key and the rest its ordered candidates.
//!
//! ```text
//! q w a s
//! e w r s d
//! ```
//!
//! Tables are loaded once, fully buffered, and never mutated afterwards, so
//! a single [`LookupTables`] can be shared across threads by reference or
//! through an `Arc`.

pub mod keyboard;
pub mod natural;

pub use keyboard::KeyboardTable;
pub use natural::NaturalTypoTable;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::error::LoadError;

/// File name of the keyboard neighbor resource inside a tables directory.
pub const KEYBOARD_FILE: &str = "en.key";
/// File name of the natural typo resource inside a tables directory.
pub const NATURAL_FILE: &str = "en.natural";

/// Label used in load errors for the bundled resources.
pub(crate) const BUILTIN_SOURCE: &str = "<builtin>";

const BUILTIN_KEYBOARD: &str = include_str!("../../data/attacks/en.key");
const BUILTIN_NATURAL: &str = include_str!("../../data/attacks/en.natural");

/// The two read-only tables consulted by word transforms.
#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    /// Keyboard neighbor table.
    pub keyboard: KeyboardTable,
    /// Natural typo table.
    pub natural: NaturalTypoTable,
}

impl LookupTables {
    /// Bundle two already loaded tables.
    pub fn new(keyboard: KeyboardTable, natural: NaturalTypoTable) -> Self {
        Self { keyboard, natural }
    }

    /// Load both tables from explicit paths.
    ///
    /// # Errors
    ///
    /// Fails on the first unreadable file or malformed line; no partially
    /// loaded tables are returned.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        keyboard_path: P,
        natural_path: Q,
    ) -> Result<Self, LoadError> {
        Ok(Self {
            keyboard: KeyboardTable::load(keyboard_path)?,
            natural: NaturalTypoTable::load(natural_path)?,
        })
    }

    /// Load `en.key` and `en.natural` from a directory.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, LoadError> {
        let dir = dir.as_ref();
        Self::load(dir.join(KEYBOARD_FILE), dir.join(NATURAL_FILE))
    }

    /// Process-wide tables parsed from the bundled English resources.
    ///
    /// Parsed on first use; later calls hand out the same `Arc`.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled resources are malformed; the failure is
    /// reported again on every call.
    pub fn builtin() -> Result<Arc<LookupTables>, LoadError> {
        static BUILTIN: OnceLock<Result<Arc<LookupTables>, String>> = OnceLock::new();

        let loaded = BUILTIN.get_or_init(|| {
            let keyboard = KeyboardTable::from_reader(BUILTIN_KEYBOARD.as_bytes(), BUILTIN_SOURCE);
            let natural = NaturalTypoTable::from_reader(BUILTIN_NATURAL.as_bytes(), BUILTIN_SOURCE);
            match (keyboard, natural) {
                (Ok(keyboard), Ok(natural)) => Ok(Arc::new(LookupTables { keyboard, natural })),
                (Err(e), _) | (_, Err(e)) => Err(e.to_string()),
            }
        });

        loaded
            .clone()
            .map_err(|reason| LoadError::malformed(BUILTIN_SOURCE, 0, reason))
    }
}

/// Open `path` and feed every entry to `on_entry`.
pub(crate) fn load_entries<F>(path: &Path, on_entry: F) -> Result<(), LoadError>
where
    F: FnMut(usize, &str, std::str::SplitWhitespace<'_>) -> Result<(), LoadError>,
{
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_entries(BufReader::new(file), path, on_entry)
}

/// Read whitespace-separated entries line by line.
///
/// `on_entry` receives the 1-based line number, the key token and the
/// remaining tokens. A line without any token is malformed.
pub(crate) fn read_entries<R, F>(reader: R, source: &Path, mut on_entry: F) -> Result<(), LoadError>
where
    R: BufRead,
    F: FnMut(usize, &str, std::str::SplitWhitespace<'_>) -> Result<(), LoadError>,
{
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|err| LoadError::Io {
            path: source.to_path_buf(),
            source: err,
        })?;

        let mut tokens = line.split_whitespace();
        let Some(key) = tokens.next() else {
            return Err(LoadError::malformed(source, line_no, "expected at least one token"));
        };
        on_entry(line_no, key, tokens)?;
    }

    Ok(())
}
