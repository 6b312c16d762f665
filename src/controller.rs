//! The stats page controller.
//!
//! One pass per load: resolve an identity, fetch, normalize, render. Both
//! success and failure end with text in every region; there are no retries
//! and no re-renders.

use reqwest::Client;

use crate::api::http;
use crate::cli::types::{Identity, LegacyUserId, PlayerToken};
use crate::config::Config;
use crate::error::{Result, StatsError};
use crate::model::{
    normalize, normalize_legacy, DisplayModel, MSG_LOAD_FAILED, MSG_NO_IDENTITY,
};
use crate::render::{render, Renderer};
use crate::token_store::TokenStore;

/// Per-load inputs, the analog of the original page's query string.
#[derive(Debug, Clone, Default)]
pub struct StatsQuery {
    pub token: Option<PlayerToken>,
    pub id: Option<LegacyUserId>,
    pub api: Option<String>,
}

pub struct StatsPageController {
    client: Client,
    config: Config,
    store: TokenStore,
}

impl StatsPageController {
    pub fn new(config: Config, store: TokenStore) -> Self {
        Self {
            client: Client::new(),
            config,
            store,
        }
    }

    /// Resolve the identity for this load: query token, then the persisted
    /// token, then the configured override; the legacy id only applies
    /// when no token is found anywhere.
    pub fn resolve_identity(&self, query: &StatsQuery) -> Result<Identity> {
        let token = query
            .token
            .clone()
            .or_else(|| self.store.load())
            .or_else(|| {
                self.config
                    .token_override
                    .as_deref()
                    .and_then(|s| s.parse().ok())
            });
        if let Some(token) = token {
            return Ok(Identity::Token(token));
        }
        query
            .id
            .clone()
            .map(Identity::Legacy)
            .ok_or(StatsError::IdentityMissing)
    }

    /// Run one load against the given page. Always leaves the page in a
    /// terminal rendered state and returns the model that was rendered.
    pub async fn run(&self, query: &StatsQuery, page: &mut dyn Renderer) -> DisplayModel {
        render(&DisplayModel::loading(), page);

        let base = self.config.resolve_api_base(query.api.as_deref());

        let model = match self.resolve_identity(query) {
            Err(_) => DisplayModel::failed(MSG_NO_IDENTITY),
            Ok(Identity::Token(token)) => {
                // Remember a token learned from the query so later loads
                // can omit it. Storage may be unavailable; not fatal.
                if query.token.is_some() {
                    if let Err(e) = self.store.save(&token) {
                        eprintln!("⚠ could not persist token: {e}");
                    }
                }
                self.load_via_token(&base, &token).await
            }
            Ok(Identity::Legacy(id)) => self.load_via_legacy_id(&base, &id).await,
        };

        render(&model, page);
        model
    }

    /// Token path: stats and collection are independent requests; either
    /// one failing just means absent data.
    async fn load_via_token(&self, base: &str, token: &PlayerToken) -> DisplayModel {
        let (stats, collection) = tokio::join!(
            http::get_player_stats(&self.client, base, token),
            http::get_collection(&self.client, base, token),
        );

        let stats = stats.unwrap_or_else(|e| {
            eprintln!("⚠ /me/<token>/stats request failed: {e}");
            None
        });
        let collection = collection.unwrap_or_else(|e| {
            eprintln!("⚠ /me/<token>/collection request failed: {e}");
            None
        });

        normalize(stats.as_ref(), collection.as_ref())
    }

    /// Legacy path: the single `/user/{id}` request is all we have, so a
    /// failure here is terminal for the load.
    async fn load_via_legacy_id(&self, base: &str, id: &LegacyUserId) -> DisplayModel {
        match http::get_legacy_profile(&self.client, base, id).await {
            Ok(profile) => normalize_legacy(&profile),
            Err(e) => {
                eprintln!("❌ failed to load legacy user data: {e}");
                DisplayModel::failed(MSG_LOAD_FAILED)
            }
        }
    }
}
