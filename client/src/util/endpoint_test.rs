use super::*;

#[test]
fn normalize_endpoint_trims_whitespace() {
    assert_eq!(
        normalize_endpoint("  http://media.lan:8080/items \n").as_deref(),
        Some("http://media.lan:8080/items")
    );
}

#[test]
fn normalize_endpoint_rejects_blank() {
    assert_eq!(normalize_endpoint(""), None);
    assert_eq!(normalize_endpoint("   "), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn items_endpoint_defaults_outside_browser() {
    assert_eq!(items_endpoint(), "http://localhost:8080/items");
}
