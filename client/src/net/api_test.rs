use super::*;

#[test]
fn check_status_accepts_success_range() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(204), Ok(()));
}

#[test]
fn check_status_rejects_non_success() {
    assert_eq!(check_status(404), Err(FetchError::Status(404)));
    assert_eq!(check_status(500), Err(FetchError::Status(500)));
    assert_eq!(check_status(302), Err(FetchError::Status(302)));
}

#[test]
fn status_error_message_includes_code() {
    assert_eq!(FetchError::Status(503).to_string(), "items request failed: 503");
}

#[test]
fn decode_items_reads_array() {
    let items = decode_items(r#"[{"title":"Dune","state":"LIBRARY"},{"title":"Heat","state":"SCRAPED"}]"#).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].title.as_deref(), Some("Heat"));
    assert_eq!(items[1].state, "SCRAPED");
}

#[test]
fn decode_items_accepts_empty_array() {
    assert!(decode_items("[]").unwrap().is_empty());
}

// =============================================================
// One odd item does not sink the response
// =============================================================

fn decode_pair(second: &str) -> Vec<MediaItem> {
    let body = format!(r#"[{{"title":"Dune","state":"LIBRARY","release_year":2021}},{second}]"#);
    let items = decode_items(&body).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].display_title(), Some("Dune"));
    assert_eq!(items[0].state, "LIBRARY");
    assert_eq!(items[0].release_year(), Some(2021));
    items
}

#[test]
fn decode_items_accepts_string_year() {
    let items = decode_pair(r#"{"title":"Heat","state":"CONTENT","year":"1995"}"#);
    assert_eq!(items[1].release_year(), Some(1995));
}

#[test]
fn decode_items_maps_null_state_to_unknown() {
    let items = decode_pair(r#"{"title":"Heat","state":null}"#);
    assert_eq!(items[1].state, "UNKNOWN");
}

#[test]
fn decode_items_accepts_both_year_keys() {
    let items = decode_pair(r#"{"title":"Heat","state":"CONTENT","year":1994,"release_year":1995}"#);
    assert_eq!(items[1].release_year(), Some(1995));
}

#[test]
fn decode_items_accepts_numeric_imdb_id() {
    let items = decode_pair(r#"{"title":"Heat","state":"CONTENT","imdb_id":1160419}"#);
    assert_eq!(items[1].text_field("imdb_id"), None);
}

#[test]
fn decode_items_accepts_non_string_title() {
    let items = decode_pair(r#"{"title":["Heat"],"state":"SCRAPED"}"#);
    assert_eq!(items[1].title, None);
    assert_eq!(items[1].state, "SCRAPED");
}

#[test]
fn decode_items_rejects_object_body() {
    let err = decode_items(r#"{"items":[]}"#).unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[test]
fn decode_items_rejects_garbage() {
    assert!(matches!(decode_items("not json"), Err(FetchError::Decode(_))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_items_is_unavailable_outside_browser() {
    let result = futures::executor::block_on(fetch_items(DEFAULT_ITEMS_ENDPOINT));
    assert_eq!(result, Err(FetchError::Unavailable));
}
