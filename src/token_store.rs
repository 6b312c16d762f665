//! Persisted player token.
//!
//! A token learned from the query args is written to a small cache file so
//! later loads without the arg can reuse it. Saving is best-effort: the
//! caller logs a failed save and moves on.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::cli::types::PlayerToken;

/// Storage key shared with the other Survivor front-ends.
pub const TOKEN_STORE_KEY: &str = "sv13.token";

/// File-backed token store.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store at the default path: `~/.cache/sv13-stats/sv13.token`.
    pub fn new() -> Self {
        let base = dirs::cache_dir().unwrap_or_else(|| {
            let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.push(".cache");
            home
        });
        Self {
            path: base.join("sv13-stats").join(TOKEN_STORE_KEY),
        }
    }

    /// Store at an explicit path (tests, alternate profiles).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved token, if any. An unreadable or empty file is
    /// treated as no token.
    pub fn load(&self) -> Option<PlayerToken> {
        let mut f = fs::File::open(&self.path).ok()?;
        let mut s = String::new();
        f.read_to_string(&mut s).ok()?;
        s.trim().parse().ok()
    }

    /// Save a token, creating parent directories as needed.
    pub fn save(&self, token: &PlayerToken) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut f = fs::File::create(&self.path)?;
        f.write_all(token.as_str().as_bytes())
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}
