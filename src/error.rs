//! Error types for perturbation and table loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while perturbing text.
#[derive(Debug, Error)]
pub enum PerturbError {
    /// The method identifier does not name any attack.
    ///
    /// Valid identifiers are listed by [`AttackKind::ALL`](crate::AttackKind::ALL).
    #[error("Unknown attack method: {0}")]
    UnknownAttack(String),

    /// The perturbation level lies outside `[0, 1]` (or is NaN).
    #[error("Invalid perturbation level {0}: must lie within [0, 1]")]
    InvalidLevel(f64),

    /// A lookup resource could not be loaded.
    ///
    /// Raised while building a [`Perturber`](crate::Perturber); no engine
    /// is constructed from a partially loaded table.
    #[error(transparent)]
    ResourceLoad(#[from] LoadError),
}

/// Errors raised while reading a lookup table resource.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The resource could not be opened or read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Resource that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line of the resource does not follow the expected format.
    #[error("{}:{line}: {reason}", .path.display())]
    Malformed {
        /// Resource containing the line (`<builtin>` for bundled tables).
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What is wrong with the line.
        reason: String,
    },
}

impl LoadError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        LoadError::Malformed {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }
}

/// A specialized `Result` type for perturbation operations.
pub type Result<T> = std::result::Result<T, PerturbError>;
