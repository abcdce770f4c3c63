use super::*;

#[test]
fn item_count_label_singular() {
    assert_eq!(item_count_label(1), "1 item");
}

#[test]
fn item_count_label_plural_and_zero() {
    assert_eq!(item_count_label(0), "0 items");
    assert_eq!(item_count_label(12), "12 items");
}

#[test]
fn state_class_is_kebab_case() {
    assert_eq!(state_class(ItemState::LibraryMetadata), "media-card--library-metadata");
    assert_eq!(state_class(ItemState::Error), "media-card--error");
}
