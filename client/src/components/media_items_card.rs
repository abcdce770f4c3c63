//! Card listing the media items in one processing state.
//!
//! DESIGN
//! ======
//! Cards are purely presentational: the page hands each one an already
//! filtered item list, so an empty list simply renders the empty hint.

#[cfg(test)]
#[path = "media_items_card_test.rs"]
mod media_items_card_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::{ItemState, MediaItem};

/// Count badge text, e.g. `"1 item"` or `"3 items"`.
pub fn item_count_label(count: usize) -> String {
    if count == 1 { "1 item".to_owned() } else { format!("{count} items") }
}

/// CSS modifier for a state's accent color.
pub fn state_class(state: ItemState) -> String {
    format!("media-card--{}", state.label().to_ascii_lowercase().replace('_', "-"))
}

/// A titled card for `state` listing `items`.
#[component]
pub fn MediaItemsCard(state: ItemState, items: Vec<MediaItem>) -> impl IntoView {
    let count = item_count_label(items.len());
    let body = if items.is_empty() {
        view! { <p class="media-card__empty">"No items"</p> }.into_any()
    } else {
        view! { <ul class="media-card__list">{item_rows(items)}</ul> }.into_any()
    };

    view! {
        <section class=format!("media-card {}", state_class(state))>
            <header class="media-card__header">
                <h2 class="media-card__state">{state.label()}</h2>
                <span class="media-card__count">{count}</span>
            </header>
            {body}
        </section>
    }
}

fn item_rows(items: Vec<MediaItem>) -> impl IntoView {
    items
        .into_iter()
        .map(|item| {
            let title = item.display_title().unwrap_or_default().to_owned();
            let subtitle = item.subtitle();
            view! {
                <li class="media-card__item">
                    <span class="media-card__title">{title}</span>
                    {subtitle.map(|s| view! { <span class="media-card__subtitle">{s}</span> })}
                </li>
            }
        })
        .collect::<Vec<_>>()
}
