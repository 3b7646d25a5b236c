//! # libperturb
//!
//! Controllable character- and word-level noise for robustness testing of
//! NLP models.
//!
//! Given a sentence, an attack and a perturbation level, the engine produces
//! a variant whose noise approximates a class of human or adversarial typing
//! errors:
//!
//! | Attack | Identifier | Example |
//! |--------|------------|---------|
//! | [`AttackKind::SwapFull`] | `full-swap` | apples → pelpas |
//! | [`AttackKind::SwapInner`] | `inner-swap` | apples → alppes |
//! | [`AttackKind::Intrude`] | `intrude` | apples → a.pp.les |
//! | [`AttackKind::Disemvowel`] | `disemvowel` | apples → ppls |
//! | [`AttackKind::Truncate`] | `truncate` | apples → apple |
//! | [`AttackKind::KeyboardTypo`] | `keyboard-typo` | apples → applew |
//! | [`AttackKind::NaturalTypo`] | `natural-typo` | apples → appels |
//! | [`AttackKind::Segment`] | `segment` | very much → verymuch |
//!
//! For word-level attacks the level is the fraction of tokens to perturb;
//! for `intrude` and `segment` it is also the per-gap insertion and per-token
//! merge probability.
//!
//! ## Example
//!
//! ```rust
//! use libperturb::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let perturber = Perturber::builtin()?;
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let noisy = perturber.perturb("I like apples very much.", "segment", 0.5, &mut rng)?;
//! assert_eq!(noisy.replace(' ', ""), "Ilikeapplesverymuch.");
//! # Ok::<(), libperturb::PerturbError>(())
//! ```
//!
//! Randomness is always passed in explicitly, so a seeded generator yields
//! reproducible datasets.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attack;
pub mod engine;
pub mod error;
pub mod segment;
pub mod selector;
pub mod tables;
pub mod tokenize;
pub mod transform;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

pub use attack::{AttackKind, IntoAttackKind, Level};
pub use engine::{Perturbation, Perturber};
pub use error::{LoadError, PerturbError, Result};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::attack::{AttackKind, IntoAttackKind, Level};
    pub use crate::engine::{Perturbation, Perturber};
    pub use crate::error::{LoadError, PerturbError};
    pub use crate::selector::SelectionReport;
    pub use crate::tables::{KeyboardTable, LookupTables, NaturalTypoTable};
    pub use crate::tokenize::{SimpleTokenizer, Tokenizer, WhitespaceTokenizer};
    pub use crate::transform::{Transform, TransformConfig};
}
