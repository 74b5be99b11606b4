//! Calc command implementation

use super::{print_json, OutputFormat};
use crate::config::Config;
use crate::odds::remove_vig;
use crate::signal::REPORT_DP;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct CalcArgs {
    /// American odds for the over
    #[arg(long)]
    pub over: i32,

    /// American odds for the under
    #[arg(long)]
    pub under: i32,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct CalcReport {
    over_odds: i32,
    under_odds: i32,
    over_probability: Decimal,
    under_probability: Decimal,
    vig: Decimal,
    slips: BTreeMap<String, BTreeMap<String, bool>>,
}

impl CalcArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let no_vig = remove_vig(self.over, self.under)?;
        let table = config.break_even_table();
        let slips = table.slip_report(&no_vig);

        match self.format {
            OutputFormat::Json => print_json(&CalcReport {
                over_odds: self.over,
                under_odds: self.under,
                over_probability: no_vig.over.round_dp(REPORT_DP),
                under_probability: no_vig.under.round_dp(REPORT_DP),
                vig: no_vig.overround.round_dp(REPORT_DP),
                slips: slips
                    .into_iter()
                    .map(|(platform, s)| (platform, s.into_iter().collect()))
                    .collect(),
            })?,
            OutputFormat::Table => {
                println!("Over  {:>6}  {:>6}%", self.over, no_vig.over.round_dp(REPORT_DP));
                println!("Under {:>6}  {:>6}%", self.under, no_vig.under.round_dp(REPORT_DP));
                println!("Vig           {:>6}%", no_vig.overround.round_dp(REPORT_DP));
                println!("Favored: {}", no_vig.favored());
                for (platform, slips) in &slips {
                    println!();
                    println!("{platform}");
                    for (slip, clears) in slips {
                        println!("  {:<10} {}", slip, if *clears { "+EV" } else { "-" });
                    }
                }
            }
        }
        Ok(())
    }
}
