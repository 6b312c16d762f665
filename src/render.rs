//! Rendering: named page regions and the writer trait.
//!
//! The page holds five text regions addressed by id. Writers address
//! regions by id only; writing to an id the page does not know is silently
//! skipped, matching a lookup miss on the original page.

use std::collections::BTreeMap;

use crate::model::DisplayModel;

pub const REGION_PLAYER_NAME: &str = "player-name";
pub const REGION_PLAYER_COINS: &str = "player-coins";
pub const REGION_CARDS_COLLECTED: &str = "cards-collected";
pub const REGION_CARDS_OWNED: &str = "cards-owned";
pub const REGION_WIN_LOSS: &str = "win-loss";

/// All region ids, in display order.
pub const REGION_IDS: [&str; 5] = [
    REGION_PLAYER_NAME,
    REGION_PLAYER_COINS,
    REGION_CARDS_COLLECTED,
    REGION_CARDS_OWNED,
    REGION_WIN_LOSS,
];

/// Sink for rendered text, one slot per region id.
pub trait Renderer {
    /// Set a region's text. Unknown region ids must be ignored.
    fn set_text(&mut self, region_id: &str, value: &str);
}

/// In-memory page with the five stats regions.
#[derive(Debug, Clone)]
pub struct Page {
    regions: BTreeMap<&'static str, String>,
}

impl Page {
    pub fn new() -> Self {
        Self {
            regions: REGION_IDS.iter().map(|id| (*id, String::new())).collect(),
        }
    }

    /// Current text of a region, if the page has it.
    pub fn text(&self, region_id: &str) -> Option<&str> {
        self.regions.get(region_id).map(String::as_str)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for Page {
    fn set_text(&mut self, region_id: &str, value: &str) {
        if let Some(slot) = self.regions.get_mut(region_id) {
            *slot = value.to_string();
        }
    }
}

/// Write a display model into its regions.
pub fn render(model: &DisplayModel, out: &mut dyn Renderer) {
    out.set_text(REGION_PLAYER_NAME, &model.name);
    out.set_text(REGION_PLAYER_COINS, &model.coins);
    out.set_text(REGION_CARDS_COLLECTED, &model.cards_collected);
    out.set_text(REGION_CARDS_OWNED, &model.cards_owned);
    out.set_text(REGION_WIN_LOSS, &model.win_loss);
}

#[cfg(test)]
mod tests;
