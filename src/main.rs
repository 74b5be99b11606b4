use clap::Parser;
use prop_ev::cli::{Cli, Commands};
use prop_ev::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            toml::from_str(include_str!("../config.toml.example"))?
        }
    };

    // Initialize telemetry
    prop_ev::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Calc(args) => args.execute(&config).await?,
        Commands::Ev(args) => {
            tracing::info!("Starting EV scan");
            args.execute(&config).await?;
        }
        Commands::Middles(args) => {
            tracing::info!("Starting middle scan");
            args.execute(&config).await?;
        }
        Commands::Props(args) => args.execute().await?,
        Commands::Compare(args) => args.execute().await?,
        Commands::Games(args) => args.execute().await?,
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Matching: threshold={}, line_tolerance={}",
                config.matching.threshold, config.matching.line_tolerance
            );
            println!(
                "  EV: min_win={}%, min_ev={}%, max_markets_per_sport={}",
                config.ev.min_win,
                config.ev.min_ev,
                config
                    .ev
                    .max_markets_per_sport
                    .map_or_else(|| "none".to_string(), |n| n.to_string())
            );
            println!("  Middles: min_spread={}", config.middle.min_spread);
            println!(
                "  Sharp books: {} (top {} sharp)",
                config.sharp_books.priority.join(", "),
                config.sharp_books.sharp_count
            );
            println!("  Stat markets: {}", config.stat_markets().len());
            for platform in config.break_even_table().platforms() {
                println!("  Break-even {}: {}%", platform.platform, platform.default);
            }
        }
    }

    Ok(())
}
