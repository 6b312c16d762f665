//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use sv13_stats::{
    cli::{Commands, Sv13Stats},
    commands::stats::{handle_stats, StatsParams},
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Sv13Stats::parse();

    match app.command {
        Commands::Stats {
            token,
            id,
            api,
            json,
        } => {
            handle_stats(StatsParams {
                token,
                id,
                api,
                as_json: json,
            })
            .await?
        }
    }

    Ok(())
}
