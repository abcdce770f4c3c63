//! Persisted light/dark theme for the dashboard shell.
//!
//! The chosen theme lives in `localStorage` under [`STORAGE_KEY`] as
//! `"true"`/`"false"`. With nothing stored (or an unreadable value) the
//! system `prefers-color-scheme` decides. Outside the browser every read
//! resolves to light and every write is dropped, so SSR output is stable.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::ui::Theme;

/// `localStorage` key holding the dashboard's dark-mode flag.
pub const STORAGE_KEY: &str = "plex_debrid_dark";

const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Parse a stored flag. Anything but `"true"`/`"false"` counts as unset.
pub fn parse_stored(value: Option<&str>) -> Option<bool> {
    match value?.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Serialized form written back to storage.
pub fn stored_value(dark: bool) -> &'static str {
    if dark { "true" } else { "false" }
}

/// A stored choice wins; otherwise follow the system setting.
pub fn resolve_preference(stored: Option<&str>, system_prefers_dark: bool) -> bool {
    parse_stored(stored).unwrap_or(system_prefers_dark)
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn stored_flag() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = PREFERS_DARK_QUERY;
        false
    }
}

fn persist(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            if storage.set_item(STORAGE_KEY, stored_value(dark)).is_err() {
                log::warn!("could not persist theme preference");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = stored_value(dark);
    }
}

/// Whether the dashboard should start in dark mode.
pub fn read_preference() -> bool {
    resolve_preference(stored_flag().as_deref(), system_prefers_dark())
}

/// Set `data-theme` on `<html>` to the theme for `dark`.
pub fn apply(dark: bool) -> Theme {
    let theme = Theme::from_dark_mode(dark);
    #[cfg(feature = "hydrate")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = root.set_attribute("data-theme", theme.attr());
        }
    }
    theme
}

/// Flip the theme, apply it and remember the choice.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    persist(next);
    next
}
