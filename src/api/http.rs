//! HTTP calls against the Survivor backend.

use reqwest::header::{HeaderValue, ACCEPT, CACHE_CONTROL};
use reqwest::Client;
use serde_json::Value;

use crate::api::types::{Collection, LegacyProfile, PlayerStats};
use crate::cli::types::{LegacyUserId, PlayerToken};
use crate::error::{Result, StatsError};

/// GET a URL and parse the body as JSON.
///
/// The body is read as text first: an empty body yields `None`, and a body
/// that fails to parse is treated as absent rather than an error. A non-2xx
/// status is an `Api` error whose message prefers the payload's `error`
/// field over the bare status line.
pub async fn fetch_json(client: &Client, url: &str) -> Result<Option<Value>> {
    let res = client
        .get(url)
        .header(ACCEPT, HeaderValue::from_static("application/json"))
        .header(CACHE_CONTROL, HeaderValue::from_static("no-store"))
        .send()
        .await?;

    let status = res.status();
    let text = res.text().await.unwrap_or_default();
    let data: Option<Value> = if text.is_empty() {
        None
    } else {
        serde_json::from_str(&text).ok()
    };

    if !status.is_success() {
        let message = data
            .as_ref()
            .and_then(|d| d.get("error"))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| {
                format!(
                    "{} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or_default()
                )
                .trim_end()
                .to_string()
            });
        return Err(StatsError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(data)
}

/// GET `/me/{token}/stats`. A payload that is missing or does not parse as
/// a stats object comes back as `None`.
pub async fn get_player_stats(
    client: &Client,
    base: &str,
    token: &PlayerToken,
) -> Result<Option<PlayerStats>> {
    let url = format!("{base}/me/{token}/stats");
    let data = fetch_json(client, &url).await?;
    Ok(data.and_then(|v| serde_json::from_value(v).ok()))
}

/// GET `/me/{token}/collection`. Accepts both ledger shapes; anything else
/// comes back as `None`.
pub async fn get_collection(
    client: &Client,
    base: &str,
    token: &PlayerToken,
) -> Result<Option<Collection>> {
    let url = format!("{base}/me/{token}/collection");
    let data = fetch_json(client, &url).await?;
    Ok(data.and_then(|v| serde_json::from_value(v).ok()))
}

/// GET the legacy `/user/{id}` profile. Unlike the token endpoints, a
/// missing or unparseable payload here is an error: the legacy path has
/// nothing to fall back on.
pub async fn get_legacy_profile(
    client: &Client,
    base: &str,
    id: &LegacyUserId,
) -> Result<LegacyProfile> {
    let url = format!("{base}/user/{id}");
    let data = fetch_json(client, &url).await?.ok_or(StatsError::NoData)?;
    serde_json::from_value(data).map_err(StatsError::from)
}
