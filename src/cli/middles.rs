//! Middles command implementation

use super::{print_json, OutputFormat};
use crate::config::Config;
use crate::signal::{MiddleDetector, MiddleOpportunity};
use crate::source::{PropSource, SnapshotPropSource};
use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct MiddlesArgs {
    /// First platform's prop snapshot
    #[arg(long)]
    pub a: PathBuf,

    /// Second platform's prop snapshot
    #[arg(long)]
    pub b: PathBuf,

    /// Sport code
    #[arg(long, default_value = "NBA")]
    pub sport: String,

    /// Minimum line gap (overrides config)
    #[arg(long)]
    pub min_spread: Option<Decimal>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl MiddlesArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let source_a = SnapshotPropSource::new("a", self.a.clone());
        let source_b = SnapshotPropSource::new("b", self.b.clone());
        let (props_a, props_b) = tokio::try_join!(
            source_a.fetch_props(&self.sport),
            source_b.fetch_props(&self.sport)
        )?;

        let detector = MiddleDetector::new(self.min_spread.unwrap_or(config.middle.min_spread));
        let middles = detector.find(&props_a, &props_b);

        tracing::info!(
            sport = %self.sport,
            min_spread = %detector.min_spread(),
            props_a = props_a.len(),
            props_b = props_b.len(),
            middles = middles.len(),
            "Middle scan finished"
        );

        match self.format {
            OutputFormat::Json => print_json(&middles)?,
            OutputFormat::Table => print_table(&middles),
        }
        Ok(())
    }
}

fn print_table(middles: &[MiddleOpportunity]) {
    if middles.is_empty() {
        println!("No middles found");
        return;
    }

    println!(
        "{:<24} {:<16} {:>7}  {:<24} {:<24} {}",
        "PLAYER", "STAT", "SPREAD", "UNDER", "OVER", "ZONE"
    );
    for middle in middles {
        let zone: Vec<String> = middle.middle_zone.iter().map(|v| v.to_string()).collect();
        println!(
            "{:<24} {:<16} {:>7}  {:<24} {:<24} {}",
            middle.player_name,
            middle.stat_type,
            middle.spread,
            format!("{} {}", middle.platform_a.name, middle.platform_a.line),
            format!("{} {}", middle.platform_b.name, middle.platform_b.line),
            zone.join(", ")
        );
    }
}
