//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::attack::AttackKind;

#[derive(Parser)]
#[command(name = "libperturb")]
#[command(about = "Adversarial typos and noise for NLP robustness testing")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Perturb text given as arguments, or every line of stdin
    Apply {
        /// Attack method (see `libperturb methods`)
        #[arg(short, long)]
        method: AttackKind,

        /// Perturbation level in [0, 1]
        #[arg(short, long, conflicts_with = "tier")]
        level: Option<f64>,

        /// Named level tier, mapped to a level by the configuration
        #[arg(short, long)]
        tier: Option<LevelTier>,

        /// Random seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Directory containing en.key and en.natural
        #[arg(long)]
        tables_dir: Option<PathBuf>,

        /// Print perturbation statistics to stderr
        #[arg(long)]
        stats: bool,

        /// Text to perturb (reads stdin line by line when omitted)
        text: Vec<String>,
    },

    /// List available attack methods
    Methods,

    /// Show table entries for a word
    Lookup {
        /// Word to look up
        word: String,

        /// Directory containing en.key and en.natural
        #[arg(long)]
        tables_dir: Option<PathBuf>,
    },

    /// Manage persistent configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as JSON
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

/// Named perturbation intensity used when preparing evaluation datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelTier {
    /// Light noise
    Low,
    /// Moderate noise
    Mid,
    /// Heavy noise
    High,
}

impl std::fmt::Display for LevelTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Mid => write!(f, "mid"),
            Self::High => write!(f, "high"),
        }
    }
}
