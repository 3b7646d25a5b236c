//! Configuration directory and persistent settings

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::args::LevelTier;
use crate::transform::TransformConfig;

/// Get the configuration directory for libperturb
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine configuration directory")?;
    Ok(base.join("libperturb"))
}

/// Get the default config file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Get the config file path with optional override
pub fn config_file_path_with_override(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => {
            validate_config_path(path)?;
            Ok(path.to_path_buf())
        }
        None => default_config_path(),
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// Numeric levels behind the named tiers
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LevelTiers {
    /// Level used for `--tier low`
    pub low: f64,
    /// Level used for `--tier mid`
    pub mid: f64,
    /// Level used for `--tier high`
    pub high: f64,
}

impl LevelTiers {
    /// Level for a tier
    pub fn level(&self, tier: LevelTier) -> f64 {
        match tier {
            LevelTier::Low => self.low,
            LevelTier::Mid => self.mid,
            LevelTier::High => self.high,
        }
    }
}

impl Default for LevelTiers {
    fn default() -> Self {
        Self {
            low: 0.1,
            mid: 0.4,
            high: 0.7,
        }
    }
}

/// User configuration stored in config file
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PersistentConfig {
    /// Directory holding en.key and en.natural (bundled tables when unset)
    pub tables_dir: Option<PathBuf>,
    /// Default random seed
    pub seed: Option<u64>,
    /// Word transform constants
    pub transforms: TransformConfig,
    /// Tier to level mapping
    pub tiers: LevelTiers,
}

impl PersistentConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from custom path; a missing file yields defaults
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path_with_override(custom_path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to custom path
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<PathBuf> {
        let path = config_file_path_with_override(custom_path)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(path)
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(&self, tables_dir: Option<PathBuf>, seed: Option<u64>) -> Self {
        Self {
            tables_dir: tables_dir.or_else(|| self.tables_dir.clone()),
            seed: seed.or(self.seed),
            transforms: self.transforms.clone(),
            tiers: self.tiers,
        }
    }
}
