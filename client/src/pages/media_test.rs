use super::*;

#[test]
fn loading_text_uses_ellipsis_character() {
    assert_eq!(LOADING_TEXT, "Loading media\u{2026}");
    assert!(!LOADING_TEXT.contains("..."));
}

#[test]
fn fresh_media_state_renders_loading_text() {
    assert!(MediaState::default().loading);
}
