//! Configuration types for prop-ev

use crate::market::{SharpBooks, StatMarketMap};
use crate::payout::BreakEvenTable;
use crate::telemetry::LogFormat;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::collections::HashMap;

/// Root configuration structure
///
/// Every section has defaults, so an empty file is a valid config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub ev: EvConfig,
    #[serde(default)]
    pub middle: MiddleConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub sharp_books: SharpBooks,
    /// Extra stat label → market entries, layered over the built-in table
    #[serde(default)]
    pub markets: HashMap<String, String>,
    /// Replaces the built-in break-even table when present
    #[serde(default)]
    pub break_even: Option<BreakEvenTable>,
}

/// Player matching configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    /// Minimum fuzzy score (0-100) to accept a player match
    #[serde(default = "default_threshold")]
    pub threshold: u8,

    /// Maximum distance between platform and sportsbook lines
    #[serde(default = "default_line_tolerance")]
    pub line_tolerance: Decimal,
}

fn default_threshold() -> u8 {
    80
}
fn default_line_tolerance() -> Decimal {
    dec!(0.5)
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            line_tolerance: default_line_tolerance(),
        }
    }
}

/// EV analysis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EvConfig {
    /// Minimum win probability, percent
    #[serde(default = "default_min_win")]
    pub min_win: Decimal,

    /// Minimum EV percentage
    #[serde(default)]
    pub min_ev: Decimal,

    /// Cap on distinct markets requested per sport
    #[serde(default)]
    pub max_markets_per_sport: Option<usize>,
}

fn default_min_win() -> Decimal {
    dec!(54)
}

impl Default for EvConfig {
    fn default() -> Self {
        Self {
            min_win: default_min_win(),
            min_ev: Decimal::ZERO,
            max_markets_per_sport: None,
        }
    }
}

/// Middle detection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MiddleConfig {
    /// Minimum line gap
    #[serde(default = "default_min_spread")]
    pub min_spread: Decimal,
}

fn default_min_spread() -> Decimal {
    dec!(0.5)
}

impl Default for MiddleConfig {
    fn default() -> Self {
        Self {
            min_spread: default_min_spread(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Built-in stat table with `[markets]` overrides applied
    pub fn stat_markets(&self) -> StatMarketMap {
        StatMarketMap::default().with_overrides(&self.markets)
    }

    /// Configured break-even table, or the built-in one
    pub fn break_even_table(&self) -> BreakEvenTable {
        self.break_even.clone().unwrap_or_default()
    }
}
