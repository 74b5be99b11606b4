//! Games command implementation

use super::{load_props, print_json, OutputFormat};
use crate::props::slate_summary;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct GamesArgs {
    /// Prop snapshot files (JSON arrays), one per platform
    #[arg(long, required = true, num_args = 1..)]
    pub props: Vec<PathBuf>,

    /// Sport codes; more than one tags each team with its sport
    #[arg(long = "sport", default_value = "NBA", num_args = 1..)]
    pub sports: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl GamesArgs {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let mut props = Vec::new();
        for sport in &self.sports {
            props.extend(load_props(&self.props, sport).await);
        }
        let summary = slate_summary(&props);

        match self.format {
            OutputFormat::Json => print_json(&summary)?,
            OutputFormat::Table => {
                println!("{}: {} props", summary.sport, summary.total_props);
                for (platform, count) in &summary.platforms {
                    println!("  {:<12} {:>5}", platform, count);
                }
                println!("Teams with props ({}):", summary.teams_with_props.len());
                for team in &summary.teams_with_props {
                    println!("  {team}");
                }
            }
        }
        Ok(())
    }
}
