//! Drawer navigation entries.
//!
//! Only entries with a route render as links; the rest stay visible but
//! disabled until their pages exist.

#[cfg(test)]
#[path = "nav_list_test.rs"]
mod nav_list_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;

/// A single navigation entry in the drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: Option<&'static str>,
}

const NAV_ENTRIES: [NavEntry; 3] = [
    NavEntry { label: "Console", icon: "⌨", href: None },
    NavEntry { label: "Settings", icon: "⚙", href: None },
    NavEntry { label: "Media", icon: "🎬", href: Some("/media") },
];

/// Navigation entries in drawer order.
pub fn nav_entries() -> &'static [NavEntry] {
    &NAV_ENTRIES
}

/// Vertical list of drawer navigation entries.
#[component]
pub fn NavList() -> impl IntoView {
    view! {
        <ul class="nav-list">
            {nav_entries()
                .iter()
                .map(|entry| {
                    let inner = view! {
                        <span class="nav-list__icon" aria-hidden="true">{entry.icon}</span>
                        <span class="nav-list__label">{entry.label}</span>
                    };
                    match entry.href {
                        Some(href) => view! {
                            <li class="nav-list__item">
                                <A href=href attr:class="nav-list__link" attr:title=entry.label>
                                    {inner}
                                </A>
                            </li>
                        }
                        .into_any(),
                        None => view! {
                            <li class="nav-list__item nav-list__item--disabled" title=entry.label aria-disabled="true">
                                {inner}
                            </li>
                        }
                        .into_any(),
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}
