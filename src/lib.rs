//! Survivor Player Stats Client
//!
//! A small Rust client for the Survivor card-game backend: it resolves a
//! player identity (token or legacy user id), fetches the player's stats
//! and owned-card ledger, normalizes the backend's loose response shapes
//! into a fixed five-field summary, and renders it into named page
//! regions.
//!
//! ## Features
//!
//! - **Identity Resolution**: query token → persisted token → configured
//!   override, with a legacy user-id fallback
//! - **Shape-tolerant Normalization**: stats fields win over the ledger;
//!   the ledger is accepted as a record list or an id→quantity map;
//!   anything non-numeric renders as 0, never blank
//! - **Terminal Rendering**: every load ends with text in all five
//!   regions, success or failure
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sv13_stats::{
//!     config::Config,
//!     controller::{StatsPageController, StatsQuery},
//!     render::Page,
//!     token_store::TokenStore,
//! };
//!
//! # async fn example() {
//! let controller = StatsPageController::new(Config::default(), TokenStore::new());
//! let query = StatsQuery {
//!     token: Some("my-token".parse().unwrap()),
//!     api: Some("https://sv13.example/api".to_string()),
//!     ..StatsQuery::default()
//! };
//!
//! let mut page = Page::new();
//! let model = controller.run(&query, &mut page).await;
//! println!("{}", model.name);
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export SV13_API_BASE=https://sv13.example/api
//! export SV13_TOKEN=my-token
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod render;
pub mod token_store;

// Re-export commonly used types
pub use cli::types::{Identity, LegacyUserId, PlayerToken};
pub use config::Config;
pub use controller::{StatsPageController, StatsQuery};
pub use error::{Result, StatsError};
pub use model::DisplayModel;

pub const TOKEN_ENV_VAR: &str = "SV13_TOKEN";
pub const API_BASE_ENV_VAR: &str = "SV13_API_BASE";
