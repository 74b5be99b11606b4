//! EV command implementation

use super::{load_props, print_json, OutputFormat};
use crate::config::Config;
use crate::market::StatMarketMap;
use crate::signal::{EvAnalyzer, EvEvaluator, EvQuery, EvReport};
use crate::source::{collect_lines, OddsSource, SnapshotOddsSource};
use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct EvArgs {
    /// Prop snapshot files (JSON arrays), one per platform
    #[arg(long, required = true, num_args = 1..)]
    pub props: Vec<PathBuf>,

    /// Sportsbook line snapshot file (JSON array)
    #[arg(long)]
    pub odds: PathBuf,

    /// Sport code
    #[arg(long, default_value = "NBA")]
    pub sport: String,

    /// Only analyze this platform
    #[arg(long)]
    pub platform: Option<String>,

    /// Minimum win probability, percent (overrides config)
    #[arg(long)]
    pub min_win: Option<Decimal>,

    /// Minimum EV percentage (overrides config)
    #[arg(long)]
    pub min_ev: Option<Decimal>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl EvArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let props = load_props(&self.props, &self.sport).await;

        let markets: StatMarketMap = config.stat_markets();
        let by_sport = markets.markets_by_sport(&props, config.ev.max_markets_per_sport);
        let wanted = by_sport
            .get(&self.sport.to_uppercase())
            .cloned()
            .unwrap_or_default();

        let odds: Vec<Arc<dyn OddsSource>> = vec![Arc::new(SnapshotOddsSource::new(
            self.odds.clone(),
            config.sharp_books.clone(),
        ))];
        let lines = collect_lines(&odds, &self.sport, &wanted).await;

        let mut query = EvQuery::new(
            self.min_win.unwrap_or(config.ev.min_win),
            self.min_ev.unwrap_or(config.ev.min_ev),
        );
        if let Some(platform) = &self.platform {
            query = query.with_platform(platform.clone());
        }

        let analyzer = EvAnalyzer::new(EvEvaluator::from_config(config));
        let report = analyzer.analyze(&props, &lines, &query);

        tracing::info!(
            sport = %self.sport,
            props = props.len(),
            lines = lines.len(),
            plays = report.count(),
            "EV scan finished"
        );

        match self.format {
            OutputFormat::Json => print_json(&report)?,
            OutputFormat::Table => print_table(&report),
        }
        Ok(())
    }
}

fn print_table(report: &EvReport) {
    if report.plays.is_empty() {
        println!("No +EV plays found");
    } else {
        println!(
            "{:<24} {:<16} {:<11} {:>7} {:<6} {:>7} {:>7}  {:<11} {}",
            "PLAYER", "STAT", "PLATFORM", "LINE", "PLAY", "WIN%", "EV%", "BOOK", "BEST FOR"
        );
        for play in &report.plays {
            println!(
                "{:<24} {:<16} {:<11} {:>7} {:<6} {:>7} {:>7}  {:<11} {}",
                play.prop.player_name,
                play.prop.stat_type,
                play.prop.platform,
                play.prop.line,
                play.recommended_play.as_str(),
                play.win_probability,
                play.ev_percentage,
                play.sharp_odds.bookmaker,
                play.best_for.join(", ")
            );
        }
    }

    if !report.skipped.is_empty() {
        println!();
        println!("Skipped:");
        for (reason, count) in &report.skipped {
            println!("  {reason:<26} {count}");
        }
    }
}
