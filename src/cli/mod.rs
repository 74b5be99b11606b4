//! CLI interface for prop-ev
//!
//! Provides subcommands for:
//! - `calc`: No-vig probabilities and slip break-evens for one quote
//! - `ev`: +EV plays from prop and odds snapshots
//! - `middles`: Line gaps between two platforms
//! - `props`: Filter and list props
//! - `compare`: One player's lines across platforms
//! - `games`: Teams and prop counts on the slate
//! - `config`: Show effective configuration

mod calc;
mod compare;
mod ev;
mod games;
mod middles;
mod props;

pub use calc::CalcArgs;
pub use compare::CompareArgs;
pub use ev::EvArgs;
pub use games::GamesArgs;
pub use middles::MiddlesArgs;
pub use props::PropsArgs;

use crate::props::Prop;
use crate::source::{collect_props, PropSource, SnapshotPropSource};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "prop-ev")]
#[command(about = "+EV and middle finder for DFS pick'em player props")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove the vig from one over/under quote
    Calc(CalcArgs),
    /// Find +EV plays
    Ev(EvArgs),
    /// Find middles between two platforms
    Middles(MiddlesArgs),
    /// List props
    Props(PropsArgs),
    /// Compare one player across platforms
    Compare(CompareArgs),
    /// Summarize teams and prop counts
    Games(GamesArgs),
    /// Show configuration
    Config,
}

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// One prop source per snapshot file, named after the file stem
fn prop_sources(paths: &[PathBuf]) -> Vec<Arc<dyn PropSource>> {
    paths
        .iter()
        .map(|path| {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Arc::new(SnapshotPropSource::new(name, path.clone())) as Arc<dyn PropSource>
        })
        .collect()
}

async fn load_props(paths: &[PathBuf], sport: &str) -> Vec<Prop> {
    collect_props(&prop_sources(paths), sport).await
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
