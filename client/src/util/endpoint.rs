//! Resolution of the items API endpoint.
//!
//! The server writes its configured endpoint into the HTML shell as
//! `<meta name="items-endpoint">`; the browser reads it back at fetch time.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use crate::net::api::DEFAULT_ITEMS_ENDPOINT;

/// `name` of the meta tag carrying the endpoint.
pub const ENDPOINT_META_NAME: &str = "items-endpoint";

/// Trim a configured endpoint, treating blank values as unset.
pub fn normalize_endpoint(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Endpoint advertised by the page, or the default when none is present.
pub fn items_endpoint() -> String {
    read_meta_endpoint()
        .and_then(|raw| normalize_endpoint(&raw))
        .unwrap_or_else(|| DEFAULT_ITEMS_ENDPOINT.to_owned())
}

fn read_meta_endpoint() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{ENDPOINT_META_NAME}\"]");
        let meta = document.query_selector(&selector).ok().flatten()?;
        meta.get_attribute("content")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
