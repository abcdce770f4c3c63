//! Dashboard shell wrapping every routed page.
//!
//! ARCHITECTURE
//! ============
//! The shell owns app-wide chrome (top bar, collapsible drawer, theme) and
//! renders the active child route through `Outlet` inside a themed container.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::nav_list::NavList;
use crate::components::toggles::{MenuToggle, ThemeToggle};
use crate::state::ui::UiState;

/// Application name shown in the top bar.
pub const APP_TITLE: &str = "Plex Debrid";

/// Top bar, side drawer, and page container.
#[component]
pub fn DashboardShell() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Restore the stored theme once the app is live in the browser.
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let dark = crate::util::dark_mode::read_preference();
            crate::util::dark_mode::apply(dark);
            ui.update(|u| u.dark_mode = dark);
        });
    }

    let drawer_width = move || format!("{}px", ui.get().drawer_width());

    view! {
        <div class="dashboard" class:dashboard--drawer-closed=move || !ui.get().drawer_open>
            <header class="dashboard__top-bar">
                <h1 class="dashboard__title">{APP_TITLE}</h1>
                <span class="dashboard__spacer"></span>
                <ThemeToggle/>
            </header>
            <nav
                class="dashboard__drawer"
                class:dashboard__drawer--closed=move || !ui.get().drawer_open
                style:width=drawer_width
            >
                <MenuToggle/>
                <hr class="dashboard__divider"/>
                <NavList/>
            </nav>
            <main class="dashboard__main" style:margin-left=drawer_width>
                <div class="dashboard__container">
                    <div class="dashboard__paper">
                        <Outlet/>
                    </div>
                    <Footer/>
                </div>
            </main>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <p class="dashboard__footer">
            "Powered by "
            <a href="https://leptos.dev/" target="_blank" rel="noopener">
                "Leptos"
            </a>
            "."
        </p>
    }
}
