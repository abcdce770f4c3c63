//! Wire types for the media items API.
//!
//! DESIGN
//! ======
//! The items API is an external collaborator. Only `title` and `state` carry
//! meaning for the dashboard, and both decode leniently: a value of the wrong
//! type is treated as absent rather than failing the whole response. Every
//! other key is kept untouched in `extra` and read on demand for display.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Label used when an item arrives without a usable `state` field.
pub const UNKNOWN_STATE_LABEL: &str = "UNKNOWN";

fn unknown_state() -> String {
    UNKNOWN_STATE_LABEL.to_owned()
}

/// Decode any JSON value, keeping it only when it is a string.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// State label; `null` or a non-string decodes as `UNKNOWN`.
fn lenient_state<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.unwrap_or_else(unknown_state))
}

/// A single media item as returned by `GET /items`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default = "unknown_state", deserialize_with = "lenient_state")]
    pub state: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl MediaItem {
    /// Title suitable for display, `None` when missing or empty.
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// A string-valued extra field, ignoring other JSON types.
    pub fn text_field(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }

    /// The backend's `type` field, e.g. `"movie"`.
    pub fn item_type(&self) -> Option<&str> {
        self.text_field("type").filter(|t| !t.is_empty())
    }

    /// Release year from `release_year` or `year`, as a number or numeric string.
    pub fn release_year(&self) -> Option<i64> {
        ["release_year", "year"]
            .into_iter()
            .filter_map(|key| self.extra.get(key))
            .find_map(|value| match value {
                Value::Number(n) => n.as_i64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            })
    }

    /// Secondary line shown under the title, e.g. `"2019 · movie"`.
    pub fn subtitle(&self) -> Option<String> {
        let year = self.release_year().map(|y| y.to_string());
        let parts: Vec<String> = year
            .into_iter()
            .chain(self.item_type().map(str::to_owned))
            .collect();
        if parts.is_empty() { None } else { Some(parts.join(" · ")) }
    }
}

/// Processing states the dashboard renders a card for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemState {
    Error,
    Unknown,
    Library,
    LibraryMetadata,
    Content,
    Scraped,
    Downloading,
}

impl ItemState {
    /// Known states in display order.
    pub const ALL: [ItemState; 7] = [
        ItemState::Error,
        ItemState::Unknown,
        ItemState::Library,
        ItemState::LibraryMetadata,
        ItemState::Content,
        ItemState::Scraped,
        ItemState::Downloading,
    ];

    /// Wire label as sent by the items API.
    pub fn label(self) -> &'static str {
        match self {
            ItemState::Error => "ERROR",
            ItemState::Unknown => UNKNOWN_STATE_LABEL,
            ItemState::Library => "LIBRARY",
            ItemState::LibraryMetadata => "LIBRARY_METADATA",
            ItemState::Content => "CONTENT",
            ItemState::Scraped => "SCRAPED",
            ItemState::Downloading => "DOWNLOADING",
        }
    }

    /// Parse a wire label. Matching is exact.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.label() == label)
    }
}

impl std::fmt::Display for ItemState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
