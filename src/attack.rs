//! Attack methods and perturbation levels.

use crate::error::{PerturbError, Result};

/// Kind of noise applied to a sentence.
///
/// Every variant except [`AttackKind::Segment`] is a word-level attack that
/// runs through the budgeted selector; `Segment` rewrites token boundaries
/// across the whole sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum AttackKind {
    /// Shuffle every character of a word.
    #[cfg_attr(feature = "serialization", serde(rename = "full-swap"))]
    SwapFull,
    /// Shuffle the interior of a word, keeping first and last characters.
    #[cfg_attr(feature = "serialization", serde(rename = "inner-swap"))]
    SwapInner,
    /// Insert punctuation between the characters of a word.
    Intrude,
    /// Remove vowels.
    Disemvowel,
    /// Drop trailing characters.
    Truncate,
    /// Replace one character by a keyboard neighbor.
    KeyboardTypo,
    /// Replace a word by an attested human misspelling.
    NaturalTypo,
    /// Fuse adjacent tokens by deleting the boundary between them.
    Segment,
}

impl AttackKind {
    /// All attacks, in canonical order.
    pub const ALL: [AttackKind; 8] = [
        AttackKind::SwapFull,
        AttackKind::SwapInner,
        AttackKind::Intrude,
        AttackKind::Disemvowel,
        AttackKind::Truncate,
        AttackKind::KeyboardTypo,
        AttackKind::NaturalTypo,
        AttackKind::Segment,
    ];

    /// Canonical string identifier.
    pub fn name(&self) -> &'static str {
        match self {
            AttackKind::SwapFull => "full-swap",
            AttackKind::SwapInner => "inner-swap",
            AttackKind::Intrude => "intrude",
            AttackKind::Disemvowel => "disemvowel",
            AttackKind::Truncate => "truncate",
            AttackKind::KeyboardTypo => "keyboard-typo",
            AttackKind::NaturalTypo => "natural-typo",
            AttackKind::Segment => "segment",
        }
    }

    /// One-line description, used by the CLI listing.
    pub fn description(&self) -> &'static str {
        match self {
            AttackKind::SwapFull => "Shuffle all letters of a word",
            AttackKind::SwapInner => "Shuffle inner letters, keep first and last",
            AttackKind::Intrude => "Insert a punctuation character between letters",
            AttackKind::Disemvowel => "Remove vowels",
            AttackKind::Truncate => "Cut off the last letter",
            AttackKind::KeyboardTypo => "Replace a letter with a neighboring key",
            AttackKind::NaturalTypo => "Replace a word with a real human misspelling",
            AttackKind::Segment => "Merge adjacent words by dropping spaces",
        }
    }

    /// Whether the attack mutates individual words through the budgeted selector.
    pub fn is_word_level(&self) -> bool {
        !matches!(self, AttackKind::Segment)
    }
}

impl std::fmt::Display for AttackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for AttackKind {
    type Err = PerturbError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "full-swap" => Ok(AttackKind::SwapFull),
            "inner-swap" => Ok(AttackKind::SwapInner),
            "intrude" => Ok(AttackKind::Intrude),
            "disemvowel" => Ok(AttackKind::Disemvowel),
            "truncate" => Ok(AttackKind::Truncate),
            "keyboard-typo" => Ok(AttackKind::KeyboardTypo),
            "natural-typo" => Ok(AttackKind::NaturalTypo),
            "segment" => Ok(AttackKind::Segment),
            _ => Err(PerturbError::UnknownAttack(s.to_string())),
        }
    }
}

/// Anything that names an attack: an [`AttackKind`] or its string identifier.
pub trait IntoAttackKind {
    /// Resolve to an attack, failing with
    /// [`PerturbError::UnknownAttack`] for unrecognized identifiers.
    fn into_attack_kind(self) -> Result<AttackKind>;
}

impl IntoAttackKind for AttackKind {
    fn into_attack_kind(self) -> Result<AttackKind> {
        Ok(self)
    }
}

impl IntoAttackKind for &str {
    fn into_attack_kind(self) -> Result<AttackKind> {
        self.parse()
    }
}

impl IntoAttackKind for &String {
    fn into_attack_kind(self) -> Result<AttackKind> {
        self.parse()
    }
}

impl IntoAttackKind for String {
    fn into_attack_kind(self) -> Result<AttackKind> {
        self.parse()
    }
}

/// A validated perturbation level in `[0, 1]`.
///
/// For word-level attacks this is the fraction of tokens to perturb; for
/// [`AttackKind::Intrude`] and [`AttackKind::Segment`] it is also the
/// per-gap insertion and per-token merge probability.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Level(f64);

impl Level {
    /// No perturbation.
    pub const ZERO: Level = Level(0.0);
    /// Perturb everything possible.
    pub const FULL: Level = Level(1.0);

    /// Validate a raw level.
    ///
    /// # Errors
    ///
    /// Returns [`PerturbError::InvalidLevel`] for values outside `[0, 1]`
    /// and for NaN.
    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Level(value))
        } else {
            Err(PerturbError::InvalidLevel(value))
        }
    }

    /// Raw value.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Level {
    type Error = PerturbError;

    fn try_from(value: f64) -> Result<Self> {
        Level::new(value)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
