//! Compare command implementation

use super::{load_props, print_json, OutputFormat};
use crate::props::compare_player;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Player name (partial matches accepted)
    #[arg(long)]
    pub player: String,

    /// Prop snapshot files (JSON arrays), one per platform
    #[arg(long, required = true, num_args = 1..)]
    pub props: Vec<PathBuf>,

    /// Sport code
    #[arg(long, default_value = "NBA")]
    pub sport: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl CompareArgs {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let props = load_props(&self.props, &self.sport).await;
        let Some(comparison) = compare_player(&self.player, &props) else {
            anyhow::bail!("No props found for player {:?}", self.player);
        };

        match self.format {
            OutputFormat::Json => print_json(&comparison)?,
            OutputFormat::Table => {
                println!("{} ({})", comparison.player, comparison.team);
                for (stat, platforms) in &comparison.by_stat {
                    let lines: Vec<String> = platforms
                        .iter()
                        .map(|(platform, line)| format!("{platform} {line}"))
                        .collect();
                    println!("  {:<16} {}", stat, lines.join(" | "));
                }
            }
        }
        Ok(())
    }
}
