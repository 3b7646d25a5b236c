//! CLI interface for libperturb
//!
//! Provides command-line utilities for generating perturbed datasets.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::{Cli, Commands, ConfigAction, LevelTier};
pub use paths::{config_dir, LevelTiers, PersistentConfig};
