//! Unit tests for page rendering

use super::*;
use crate::model::DisplayModel;

#[test]
fn test_render_writes_all_regions() {
    let model = DisplayModel {
        name: "Kira".to_string(),
        coins: "150".to_string(),
        cards_collected: "2 / 127".to_string(),
        cards_owned: "7 / 250".to_string(),
        win_loss: "3 / 1".to_string(),
    };

    let mut page = Page::new();
    render(&model, &mut page);

    assert_eq!(page.text(REGION_PLAYER_NAME), Some("Kira"));
    assert_eq!(page.text(REGION_PLAYER_COINS), Some("150"));
    assert_eq!(page.text(REGION_CARDS_COLLECTED), Some("2 / 127"));
    assert_eq!(page.text(REGION_CARDS_OWNED), Some("7 / 250"));
    assert_eq!(page.text(REGION_WIN_LOSS), Some("3 / 1"));
}

#[test]
fn test_unknown_region_silently_skipped() {
    let mut page = Page::new();
    page.set_text("player-avatar", "ignored");
    assert_eq!(page.text("player-avatar"), None);

    // Known regions are untouched by the stray write.
    assert_eq!(page.text(REGION_PLAYER_NAME), Some(""));
}

#[test]
fn test_render_overwrites_loading_placeholders() {
    let mut page = Page::new();
    render(&DisplayModel::loading(), &mut page);
    assert_eq!(page.text(REGION_PLAYER_NAME), Some("Loading..."));
    assert_eq!(page.text(REGION_WIN_LOSS), Some("–"));

    render(&DisplayModel::failed("⚠️ Failed to load."), &mut page);
    assert_eq!(page.text(REGION_PLAYER_NAME), Some("⚠️ Failed to load."));
    assert_eq!(page.text(REGION_WIN_LOSS), Some("–"));
}
