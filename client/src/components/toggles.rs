//! Shell toggle buttons: drawer collapse and light/dark theme.

#[cfg(test)]
#[path = "toggles_test.rs"]
mod toggles_test;

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Glyph for the drawer toggle: a chevron to collapse, a hamburger to expand.
pub fn menu_toggle_icon(open: bool) -> &'static str {
    if open { "‹" } else { "☰" }
}

/// Button at the top of the drawer that opens or collapses it.
#[component]
pub fn MenuToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="menu-toggle"
            on:click=move |_| ui.update(|u| u.drawer_open = !u.drawer_open)
            title=move || if ui.get().drawer_open { "Collapse menu" } else { "Expand menu" }
            aria-expanded=move || ui.get().drawer_open.to_string()
        >
            {move || menu_toggle_icon(ui.get().drawer_open)}
        </button>
    }
}

/// Top-bar button switching between light and dark themes.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| {
                let current = ui.get().dark_mode;
                let next = crate::util::dark_mode::toggle(current);
                ui.update(|u| u.dark_mode = next);
            }
            title="Toggle dark mode"
        >
            {move || ui.get().theme().toggle_icon()}
        </button>
    }
}
