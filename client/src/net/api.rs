//! HTTP access to the external media items API.
//!
//! Client-side (hydrate): a single unauthenticated `GET` via `gloo-net`.
//! Server-side (SSR): returns `FetchError::Unavailable`; the page fetches
//! only after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `FetchError` so the media page can surface them
//! inline instead of leaving the cards in a silent loading state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::MediaItem;

/// Items endpoint used when the server does not advertise one.
pub const DEFAULT_ITEMS_ENDPOINT: &str = "http://localhost:8080/items";

/// Reasons a fetch of the items list can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("items request failed: {0}")]
    Request(String),
    #[error("items request failed: {0}")]
    Status(u16),
    #[error("items response could not be decoded: {0}")]
    Decode(String),
    #[error("items are only fetched in the browser")]
    Unavailable,
}

/// Map a response status to a result, treating any non-2xx as an error.
#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(FetchError::Status(status)) }
}

/// Decode the items array from a raw response body.
///
/// # Errors
///
/// Returns `FetchError::Decode` if the body is not a JSON array of items.
pub fn decode_items(body: &str) -> Result<Vec<MediaItem>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetch all media items from `endpoint`.
///
/// # Errors
///
/// Returns a `FetchError` if the request cannot be sent, the server answers
/// with a non-OK status, or the body is not a JSON array of items.
pub async fn fetch_items(endpoint: &str) -> Result<Vec<MediaItem>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        check_status(resp.status())?;
        let body = resp.text().await.map_err(|e| FetchError::Decode(e.to_string()))?;
        decode_items(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err(FetchError::Unavailable)
    }
}
