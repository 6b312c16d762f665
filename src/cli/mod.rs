//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::{LegacyUserId, PlayerToken};

#[derive(Debug, Parser)]
#[clap(name = "sv13-stats", about = "Survivor player stats CLI")]
pub struct Sv13Stats {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch and render the player stats summary.
    ///
    /// Resolves a token (`--token`, then the saved token, then
    /// `SV13_TOKEN`) and queries `/me/{token}/stats` plus
    /// `/me/{token}/collection`; with only a legacy `--id` it queries
    /// `/user/{id}` instead.
    Stats {
        /// Player token (or reuse the saved one, or set `SV13_TOKEN`).
        #[clap(long, short)]
        token: Option<PlayerToken>,

        /// Legacy user id, used only when no token is available.
        #[clap(long, short)]
        id: Option<LegacyUserId>,

        /// API base URL; trailing slashes are stripped. `SV13_API_BASE`
        /// overrides this.
        #[clap(long, short)]
        api: Option<String>,

        /// Output the rendered model as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
