//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::attack::{AttackKind, Level};
use crate::engine::Perturber;
use crate::tables::LookupTables;
use crate::tokenize::Tokenizer;

use super::args::{Cli, Commands, ConfigAction, LevelTier};
use super::paths::{config_file_path_with_override, PersistentConfig};

/// Totals collected while perturbing a stream of lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    /// Lines read
    pub lines: usize,
    /// Tokens across all lines
    pub tokens: usize,
    /// Tokens changed by word-level attacks
    pub perturbed: usize,
    /// Lines whose text changed
    pub changed_lines: usize,
}

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = cli.config;
    match cli.command {
        Commands::Apply {
            method,
            level,
            tier,
            seed,
            tables_dir,
            stats,
            text,
        } => {
            let config = PersistentConfig::load_from(config_path.as_deref())?
                .merge_with_cli(tables_dir, seed);
            cmd_apply(&config, method, level, tier, stats, &text)
        }
        Commands::Methods => cmd_methods(),
        Commands::Lookup { word, tables_dir } => {
            let config = PersistentConfig::load_from(config_path.as_deref())?
                .merge_with_cli(tables_dir, None);
            cmd_lookup(&config, &word)
        }
        Commands::Config { action } => cmd_config(action, config_path.as_deref()),
    }
}

/// Resolve the numeric level from `--level` or `--tier`, rejecting values outside `[0, 1]`
pub fn resolve_level(
    config: &PersistentConfig,
    level: Option<f64>,
    tier: Option<LevelTier>,
) -> Result<f64> {
    let level = match (level, tier) {
        (Some(level), _) => level,
        (None, Some(tier)) => config.tiers.level(tier),
        (None, None) => bail!("Either --level or --tier must be given"),
    };
    Ok(Level::new(level)?.value())
}

/// Build a perturber from the configured tables directory, or the bundled tables
pub fn build_perturber(config: &PersistentConfig) -> Result<Perturber> {
    let perturber = match &config.tables_dir {
        Some(dir) => Perturber::from_dir(dir)
            .with_context(|| format!("Failed to load tables from {}", dir.display()))?,
        None => Perturber::builtin().context("Failed to load bundled tables")?,
    };
    Ok(perturber.with_config(config.transforms.clone()))
}

/// Perturb every line of `input`, writing one output line per input line
pub fn perturb_lines<T, I, W, R>(
    perturber: &Perturber<T>,
    input: I,
    mut output: W,
    method: AttackKind,
    level: f64,
    rng: &mut R,
) -> Result<LineStats>
where
    T: Tokenizer,
    I: BufRead,
    W: Write,
    R: Rng + ?Sized,
{
    let mut stats = LineStats::default();

    for line in input.lines() {
        let line = line.context("Failed to read input line")?;
        let result = perturber.perturb_detailed(&line, method, level, &mut *rng)?;

        stats.lines += 1;
        stats.tokens += result.tokens_in;
        stats.perturbed += result.selection.map_or(0, |s| s.perturbed);
        if result.text != line {
            stats.changed_lines += 1;
        }

        writeln!(output, "{}", result.text).context("Failed to write output")?;
    }

    output.flush().context("Failed to flush output")?;
    Ok(stats)
}

/// Apply command
fn cmd_apply(
    config: &PersistentConfig,
    method: AttackKind,
    level: Option<f64>,
    tier: Option<LevelTier>,
    show_stats: bool,
    text: &[String],
) -> Result<()> {
    let level = resolve_level(config, level, tier)?;
    let perturber = build_perturber(config)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(%method, level, seed = ?config.seed, "applying attack");

    let stdout = std::io::stdout();
    let stats = if text.is_empty() {
        let stdin = std::io::stdin();
        perturb_lines(
            &perturber,
            stdin.lock(),
            BufWriter::new(stdout.lock()),
            method,
            level,
            &mut rng,
        )?
    } else {
        let joined = text.join(" ");
        perturb_lines(
            &perturber,
            joined.as_bytes(),
            BufWriter::new(stdout.lock()),
            method,
            level,
            &mut rng,
        )?
    };

    if show_stats {
        eprintln!(
            "{} {} lines, {} tokens, {} perturbed, {} changed lines ({} @ {})",
            "✓".green(),
            stats.lines,
            stats.tokens,
            stats.perturbed.to_string().green(),
            stats.changed_lines.to_string().green(),
            method.to_string().cyan(),
            level
        );
    }

    Ok(())
}

/// Methods command
fn cmd_methods() -> Result<()> {
    println!("{}", "Attack Methods".bold().underline());
    println!();
    for kind in AttackKind::ALL {
        let scope = if kind.is_word_level() { "word" } else { "sentence" };
        println!(
            "  {:<15} {:<9} {}",
            kind.name().green(),
            scope.yellow(),
            kind.description()
        );
    }
    println!();
    Ok(())
}

/// Lookup command
fn cmd_lookup(config: &PersistentConfig, word: &str) -> Result<()> {
    let tables = load_tables(config.tables_dir.as_deref())?;

    println!("{}", format!("Lookup: {}", word).bold().underline());
    println!();

    println!("  {}", "Keyboard neighbors".cyan());
    for c in word.chars() {
        match tables.keyboard.neighbors(c) {
            Some(neighbors) if !neighbors.is_empty() => {
                let list: Vec<String> = neighbors.iter().map(char::to_string).collect();
                println!("    {}  {}", c.to_string().green(), list.join(" "));
            }
            _ => println!("    {}  {}", c.to_string().yellow(), "(none)".dimmed()),
        }
    }

    println!();
    println!("  {}", "Natural typos".cyan());
    match tables.natural.variants(word) {
        Some(variants) if !variants.is_empty() => {
            for variant in variants {
                println!("    {}", variant.green());
            }
        }
        _ => println!("    {}", "(none)".dimmed()),
    }
    println!();

    Ok(())
}

fn load_tables(dir: Option<&Path>) -> Result<std::sync::Arc<LookupTables>> {
    match dir {
        Some(dir) => Ok(std::sync::Arc::new(
            LookupTables::from_dir(dir)
                .with_context(|| format!("Failed to load tables from {}", dir.display()))?,
        )),
        None => LookupTables::builtin().context("Failed to load bundled tables"),
    }
}

/// Config command
fn cmd_config(action: ConfigAction, config_path: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = PersistentConfig::load_from(config_path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Init { force } => {
            let path: PathBuf = config_file_path_with_override(config_path)?;
            if path.exists() && !force {
                bail!(
                    "Config file already exists: {} (use --force to overwrite)",
                    path.display()
                );
            }
            let path = PersistentConfig::default().save_to(Some(path.as_path()))?;
            println!(
                "{} Wrote default configuration to {}",
                "✓".green(),
                path.display().to_string().cyan()
            );
        }
        ConfigAction::Path => {
            let path = config_file_path_with_override(config_path)?;
            println!("{}", path.display());
        }
    }
    Ok(())
}
