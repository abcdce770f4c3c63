use super::*;

#[test]
fn menu_toggle_icon_shows_chevron_when_open() {
    assert_eq!(menu_toggle_icon(true), "‹");
}

#[test]
fn menu_toggle_icon_shows_hamburger_when_closed() {
    assert_eq!(menu_toggle_icon(false), "☰");
}
