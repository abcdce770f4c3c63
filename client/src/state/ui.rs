//! Local UI chrome state (theme, side drawer).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of media state so the shell can
//! evolve independently of the data it frames.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Drawer width in pixels when expanded.
pub const DRAWER_WIDTH_OPEN: u32 = 240;
/// Drawer width in pixels when collapsed to an icon rail.
pub const DRAWER_WIDTH_CLOSED: u32 = 72;

/// Width of the side drawer for the given open state.
pub fn drawer_width(open: bool) -> u32 {
    if open { DRAWER_WIDTH_OPEN } else { DRAWER_WIDTH_CLOSED }
}

/// Color scheme of the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Theme::Dark } else { Theme::Light }
    }

    /// Value of the `data-theme` attribute on `<html>`.
    pub fn attr(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Glyph for the button that switches to the other theme.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }
}

/// UI state for the dashboard chrome.
#[derive(Clone, Debug)]
pub struct UiState {
    pub dark_mode: bool,
    pub drawer_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { dark_mode: false, drawer_open: true }
    }
}

impl UiState {
    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }

    pub fn drawer_width(&self) -> u32 {
        drawer_width(self.drawer_open)
    }
}
