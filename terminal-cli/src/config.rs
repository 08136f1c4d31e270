use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use quarks_types::GameKind;
use serde::Deserialize;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_REVEAL_DELAY_MS: u64 = 800;
const DEFAULT_ROUNDS: u32 = 1;

/// CLI flags (override values from `--config`)
#[derive(Parser, Debug)]
#[command(name = "quarks", about = "Quarks Casino dice table")]
pub struct Args {
    /// Display name for the greeting
    #[arg(long)]
    pub name: String,

    /// Credits to stake; must be a number greater than 0
    #[arg(long, allow_hyphen_values = true)]
    pub wager: String,

    /// Table variant: craps (two dice) or threshold (three dice)
    #[arg(long)]
    pub game: Option<GameKind>,

    /// Seed for reproducible dice
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay before each result is revealed
    #[arg(long)]
    pub reveal_delay_ms: Option<u64>,

    /// Rounds to play with the same name and wager
    #[arg(long)]
    pub rounds: Option<u32>,

    /// Render an HTML fragment instead of plain text
    #[arg(long)]
    pub html: bool,

    /// Print each round report as JSON
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// YAML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Optional YAML configuration.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub log_level: Option<String>,
    pub reveal_delay_ms: Option<u64>,
    pub seed: Option<u64>,
    pub game: Option<GameKind>,
    pub rounds: Option<u32>,
    pub html: Option<bool>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("could not parse config file {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }
}

/// Effective settings after merging flags over the config file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub log_level: String,
    pub reveal_delay: Duration,
    pub seed: Option<u64>,
    pub game: GameKind,
    pub rounds: u32,
    pub html: bool,
    pub json: bool,
}

impl Settings {
    pub fn resolve(args: &Args, cfg: Config) -> Self {
        Self {
            log_level: args
                .log_level
                .clone()
                .or(cfg.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            reveal_delay: Duration::from_millis(
                args.reveal_delay_ms
                    .or(cfg.reveal_delay_ms)
                    .unwrap_or(DEFAULT_REVEAL_DELAY_MS),
            ),
            seed: args.seed.or(cfg.seed),
            game: args.game.or(cfg.game).unwrap_or_default(),
            rounds: args.rounds.or(cfg.rounds).unwrap_or(DEFAULT_ROUNDS),
            html: args.html || cfg.html.unwrap_or(false),
            json: args.json,
        }
    }
}
