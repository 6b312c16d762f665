//! Explicit client configuration.
//!
//! The page this client replaces read its overrides from ambient globals.
//! Here they are plain optional fields supplied by the caller at
//! construction; the CLI boundary may fill them from `SV13_API_BASE` and
//! `SV13_TOKEN`.

use crate::{API_BASE_ENV_VAR, TOKEN_ENV_VAR};

/// Default API base when no override or `--api` argument is given.
pub const DEFAULT_API_BASE: &str = "/api";

/// Recognized configuration overrides, each optional.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Overrides the API base regardless of the `--api` argument.
    pub api_base_override: Option<String>,
    /// Token of last resort, consulted after the query args and the
    /// persisted store.
    pub token_override: Option<String>,
}

impl Config {
    /// Read overrides from the environment (the CLI entry point does this
    /// once; library callers construct `Config` directly).
    pub fn from_env() -> Self {
        Self {
            api_base_override: std::env::var(API_BASE_ENV_VAR).ok(),
            token_override: std::env::var(TOKEN_ENV_VAR).ok(),
        }
    }

    /// Resolve the API base for one load: override, else the explicit
    /// `--api` argument, else the literal default. Trailing slashes are
    /// stripped from the winner.
    pub fn resolve_api_base(&self, api_arg: Option<&str>) -> String {
        let base = self
            .api_base_override
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(api_arg.filter(|s| !s.is_empty()))
            .unwrap_or(DEFAULT_API_BASE);
        base.trim_end_matches('/').to_string()
    }
}
