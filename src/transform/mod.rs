//! Single-word mutations, one per word-level attack.
//!
//! Every function takes the word by reference and returns the perturbed
//! word; randomness comes exclusively from the `rng` handle passed in, so a
//! seeded generator reproduces the same output. A transform that cannot
//! apply (word too short, character not on the keyboard, word without
//! attested typos) returns its input unchanged instead of failing.

pub mod intrude;
pub mod reduce;
pub mod swap;
pub mod typo;

pub use intrude::{intrude, is_punctuation, PUNCTUATION};
pub use reduce::{disemvowel, is_vowel, truncate};
pub use swap::{swap_full, swap_inner};
pub use typo::{keyboard_typo, natural_typo};

use rand::Rng;

use crate::attack::{AttackKind, Level};
use crate::tables::LookupTables;

/// Tunable constants of the word transforms.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TransformConfig {
    /// Shortest word [`truncate`] may produce.
    pub truncate_min_len: usize,
    /// Most characters [`truncate`] removes.
    pub truncate_cutoff: usize,
    /// Retry cap for the shuffle and intrude attacks.
    pub max_attempts: usize,
    /// Application probability of [`keyboard_typo`].
    pub keyboard_probability: f64,
    /// Application probability of [`natural_typo`].
    pub natural_probability: f64,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            truncate_min_len: 3,
            truncate_cutoff: 1,
            max_attempts: 10,
            keyboard_probability: 1.0,
            natural_probability: 1.0,
        }
    }
}

/// A word transform bound to its parameters and tables.
#[derive(Debug, Clone, Copy)]
pub enum Transform<'t> {
    /// [`swap_full`]
    SwapFull {
        /// Retry cap.
        max_attempts: usize,
    },
    /// [`swap_inner`]
    SwapInner {
        /// Retry cap.
        max_attempts: usize,
    },
    /// [`intrude`]
    Intrude {
        /// Per-gap insertion probability.
        probability: f64,
        /// Retry cap.
        max_attempts: usize,
    },
    /// [`disemvowel`]
    Disemvowel,
    /// [`truncate`]
    Truncate {
        /// Shortest result.
        min_len: usize,
        /// Most characters removed.
        cutoff: usize,
    },
    /// [`keyboard_typo`]
    KeyboardTypo {
        /// Neighbor table.
        table: &'t crate::tables::KeyboardTable,
        /// Application probability.
        probability: f64,
    },
    /// [`natural_typo`]
    NaturalTypo {
        /// Typo table.
        table: &'t crate::tables::NaturalTypoTable,
        /// Application probability.
        probability: f64,
    },
}

impl<'t> Transform<'t> {
    /// The transform implementing a word-level attack.
    ///
    /// Returns `None` for [`AttackKind::Segment`], which rewrites token
    /// boundaries instead of words.
    pub fn for_attack(
        kind: AttackKind,
        level: Level,
        tables: &'t LookupTables,
        config: &TransformConfig,
    ) -> Option<Self> {
        let transform = match kind {
            AttackKind::SwapFull => Transform::SwapFull {
                max_attempts: config.max_attempts,
            },
            AttackKind::SwapInner => Transform::SwapInner {
                max_attempts: config.max_attempts,
            },
            AttackKind::Intrude => Transform::Intrude {
                probability: level.value(),
                max_attempts: config.max_attempts,
            },
            AttackKind::Disemvowel => Transform::Disemvowel,
            AttackKind::Truncate => Transform::Truncate {
                min_len: config.truncate_min_len,
                cutoff: config.truncate_cutoff,
            },
            AttackKind::KeyboardTypo => Transform::KeyboardTypo {
                table: &tables.keyboard,
                probability: config.keyboard_probability,
            },
            AttackKind::NaturalTypo => Transform::NaturalTypo {
                table: &tables.natural,
                probability: config.natural_probability,
            },
            AttackKind::Segment => return None,
        };
        Some(transform)
    }

    /// Apply the transform to one word.
    pub fn apply<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> String {
        match *self {
            Transform::SwapFull { max_attempts } => swap_full(word, max_attempts, rng),
            Transform::SwapInner { max_attempts } => swap_inner(word, max_attempts, rng),
            Transform::Intrude {
                probability,
                max_attempts,
            } => intrude(word, probability, max_attempts, rng),
            Transform::Disemvowel => disemvowel(word),
            Transform::Truncate { min_len, cutoff } => truncate(word, min_len, cutoff),
            Transform::KeyboardTypo { table, probability } => {
                keyboard_typo(word, table, probability, rng)
            }
            Transform::NaturalTypo { table, probability } => {
                natural_typo(word, table, probability, rng)
            }
        }
    }
}
