//! Identity types for the Survivor stats backend.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a player token.
///
/// Tokens are opaque strings issued by the backend and address the
/// `/me/{token}/...` endpoints.
///
/// # Examples
///
/// ```rust
/// use sv13_stats::PlayerToken;
///
/// let token: PlayerToken = "abc123".parse().unwrap();
/// assert_eq!(token.as_str(), "abc123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerToken(String);

impl PlayerToken {
    /// Get the underlying token string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerToken {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(StatsError::EmptyToken);
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Type-safe wrapper for a legacy numeric-or-string user id.
///
/// Addresses the older `/user/{id}` endpoint that predates tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegacyUserId(String);

impl LegacyUserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LegacyUserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LegacyUserId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(StatsError::EmptyUserId);
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Resolved identity for one page load: token-based or legacy-id-based,
/// never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Token(PlayerToken),
    Legacy(LegacyUserId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_token_parse() {
        let token: PlayerToken = " tok-1 ".parse().unwrap();
        assert_eq!(token.as_str(), "tok-1");
        assert_eq!(token.to_string(), "tok-1");
    }

    #[test]
    fn test_player_token_rejects_empty() {
        let err = "   ".parse::<PlayerToken>().unwrap_err();
        assert!(matches!(err, StatsError::EmptyToken));
    }

    #[test]
    fn test_legacy_user_id_parse() {
        let id: LegacyUserId = "42".parse().unwrap();
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn test_legacy_user_id_rejects_empty() {
        let err = "".parse::<LegacyUserId>().unwrap_err();
        assert!(matches!(err, StatsError::EmptyUserId));
    }
}
