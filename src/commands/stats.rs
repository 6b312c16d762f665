//! Stats command implementation

use crate::cli::types::{LegacyUserId, PlayerToken};
use crate::config::Config;
use crate::controller::{StatsPageController, StatsQuery};
use crate::render::{Page, REGION_IDS};
use crate::token_store::TokenStore;
use crate::Result;

/// Parameters for the stats command.
#[derive(Debug, Default)]
pub struct StatsParams {
    pub token: Option<PlayerToken>,
    pub id: Option<LegacyUserId>,
    pub api: Option<String>,
    pub as_json: bool,
}

/// Handle the stats command: run one page load and print the regions.
pub async fn handle_stats(params: StatsParams) -> Result<()> {
    let controller = StatsPageController::new(Config::from_env(), TokenStore::new());
    let query = StatsQuery {
        token: params.token,
        id: params.id,
        api: params.api,
    };

    let mut page = Page::new();
    let model = controller.run(&query, &mut page).await;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&model)?);
    } else {
        for region_id in REGION_IDS {
            if let Some(text) = page.text(region_id) {
                println!("{region_id}: {text}");
            }
        }
    }

    Ok(())
}
