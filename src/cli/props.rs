//! Props command implementation

use super::{load_props, print_json, OutputFormat};
use crate::props::{Prop, PropFilter};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct PropsArgs {
    /// Prop snapshot files (JSON arrays), one per platform
    #[arg(long, required = true, num_args = 1..)]
    pub props: Vec<PathBuf>,

    /// Sport code
    #[arg(long, default_value = "NBA")]
    pub sport: String,

    /// Platform to keep
    #[arg(long)]
    pub platform: Option<String>,

    /// Stat label substring
    #[arg(long)]
    pub stat: Option<String>,

    /// Player name search
    #[arg(long)]
    pub player: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl PropsArgs {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let props = load_props(&self.props, &self.sport).await;
        let filter = PropFilter {
            platform: self.platform.clone(),
            stat: self.stat.clone(),
            player: self.player.clone(),
        };
        let selected = filter.apply(&props);

        match self.format {
            OutputFormat::Json => print_json(&selected)?,
            OutputFormat::Table => print_table(&selected),
        }
        Ok(())
    }
}

fn print_table(props: &[&Prop]) {
    println!(
        "{:<24} {:<6} {:<16} {:<11} {:>7}",
        "PLAYER", "TEAM", "STAT", "PLATFORM", "LINE"
    );
    for prop in props {
        println!(
            "{:<24} {:<6} {:<16} {:<11} {:>7}",
            prop.player_name, prop.team, prop.stat_type, prop.platform, prop.line
        );
    }
    println!("{} props", props.len());
}
