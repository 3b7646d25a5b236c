//! The perturbation facade.
//!
//! [`Perturber`] ties everything together: it resolves the attack, checks
//! the level, tokenizes the text, runs either the segmenter or the budgeted
//! selector with the matching word transform, and detokenizes the result.
//!
//! ```rust
//! use libperturb::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let perturber = Perturber::builtin()?;
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let noisy = perturber.perturb("I like apples very much.", "disemvowel", 1.0, &mut rng)?;
//! assert_eq!(noisy, "I lk ppls vry mch.");
//! # Ok::<(), libperturb::PerturbError>(())
//! ```

use std::path::Path;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::attack::{AttackKind, IntoAttackKind, Level};
use crate::error::Result;
use crate::segment::segment;
use crate::selector::{select_and_apply, SelectionReport};
use crate::tables::LookupTables;
use crate::tokenize::{SimpleTokenizer, Tokenizer};
use crate::transform::{Transform, TransformConfig};

/// Result of a perturbation with its bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Perturbation {
    /// Perturbed text.
    pub text: String,
    /// Attack that produced it.
    pub attack: AttackKind,
    /// Tokens in the input.
    pub tokens_in: usize,
    /// Tokens in the output (differs from the input only for segmentation).
    pub tokens_out: usize,
    /// Selector statistics; `None` for segmentation.
    pub selection: Option<SelectionReport>,
}

/// Generates adversarial variants of text.
///
/// Holds the read-only lookup tables, the transform constants and a
/// tokenizer; nothing is mutated by [`perturb`](Perturber::perturb), so one
/// instance can serve many threads when its tokenizer is `Sync`.
#[derive(Debug, Clone)]
pub struct Perturber<T = SimpleTokenizer> {
    tables: Arc<LookupTables>,
    config: TransformConfig,
    tokenizer: T,
}

impl Perturber<SimpleTokenizer> {
    /// Create a perturber over `tables` with default settings.
    pub fn new(tables: impl Into<Arc<LookupTables>>) -> Self {
        Self {
            tables: tables.into(),
            config: TransformConfig::default(),
            tokenizer: SimpleTokenizer,
        }
    }

    /// Create a perturber over the bundled English tables.
    ///
    /// # Errors
    ///
    /// Fails with [`PerturbError::ResourceLoad`](crate::PerturbError::ResourceLoad)
    /// if the bundled resources are malformed.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(LookupTables::builtin()?))
    }

    /// Create a perturber from `en.key` and `en.natural` in `dir`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Ok(Self::new(LookupTables::from_dir(dir)?))
    }
}

impl<T: Tokenizer> Perturber<T> {
    /// Replace the transform constants.
    pub fn with_config(mut self, config: TransformConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the tokenizer.
    pub fn with_tokenizer<U: Tokenizer>(self, tokenizer: U) -> Perturber<U> {
        Perturber {
            tables: self.tables,
            config: self.config,
            tokenizer,
        }
    }

    /// Lookup tables in use.
    pub fn tables(&self) -> &LookupTables {
        &self.tables
    }

    /// Transform constants in use.
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Tokenizer in use.
    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    /// Perturb `text` with `method` at `level`.
    ///
    /// `method` is an [`AttackKind`] or its identifier (`"full-swap"`,
    /// `"intrude"`, ...).
    ///
    /// # Errors
    ///
    /// - [`PerturbError::UnknownAttack`](crate::PerturbError::UnknownAttack)
    ///   for an unrecognized identifier
    /// - [`PerturbError::InvalidLevel`](crate::PerturbError::InvalidLevel)
    ///   when `level` is outside `[0, 1]`
    pub fn perturb<M, R>(&self, text: &str, method: M, level: f64, rng: &mut R) -> Result<String>
    where
        M: IntoAttackKind,
        R: Rng + ?Sized,
    {
        self.perturb_detailed(text, method, level, rng)
            .map(|p| p.text)
    }

    /// Like [`perturb`](Perturber::perturb), seeding a fresh generator.
    pub fn perturb_seeded<M: IntoAttackKind>(
        &self,
        text: &str,
        method: M,
        level: f64,
        seed: u64,
    ) -> Result<String> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.perturb(text, method, level, &mut rng)
    }

    /// Perturb `text` and report what happened.
    pub fn perturb_detailed<M, R>(
        &self,
        text: &str,
        method: M,
        level: f64,
        rng: &mut R,
    ) -> Result<Perturbation>
    where
        M: IntoAttackKind,
        R: Rng + ?Sized,
    {
        let attack = method.into_attack_kind()?;
        let level = Level::new(level)?;
        let mut tokens = self.tokenizer.tokenize(text);
        let tokens_in = tokens.len();

        let selection = match Transform::for_attack(attack, level, &self.tables, &self.config) {
            Some(transform) => Some(select_and_apply(&mut tokens, level, rng, |word, rng| {
                transform.apply(word, rng)
            })),
            None => {
                tokens = segment(&tokens, level.value(), rng);
                None
            }
        };

        debug!(
            %attack,
            %level,
            tokens_in,
            tokens_out = tokens.len(),
            perturbed = ?selection.map(|s| s.perturbed),
            "perturbed text"
        );

        Ok(Perturbation {
            text: self.tokenizer.detokenize(&tokens),
            attack,
            tokens_in,
            tokens_out: tokens.len(),
            selection,
        })
    }

    /// Perturb every text of a batch with one generator.
    ///
    /// The attack and level are validated once, before any text is touched.
    pub fn perturb_batch<'a, I, M, R>(
        &self,
        texts: I,
        method: M,
        level: f64,
        rng: &mut R,
    ) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = &'a str>,
        M: IntoAttackKind,
        R: Rng + ?Sized,
    {
        let attack = method.into_attack_kind()?;
        Level::new(level)?;
        texts
            .into_iter()
            .map(|text| self.perturb(text, attack, level, &mut *rng))
            .collect()
    }
}
