//! Media browser page: fetch, group by state, filter by title.
//!
//! SYSTEM CONTEXT
//! ==============
//! Items are requested when the page mounts in the browser. Each request
//! carries a generation so a slower, older response never overwrites a newer
//! one. Grouping is recomputed on arrival; the search term only re-filters the
//! cached groups.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use leptos::prelude::*;

use crate::components::media_items_card::MediaItemsCard;
use crate::components::search_bar::SearchBar;
use crate::state::media::MediaState;

/// Shown in place of the cards until the current fetch settles.
pub const LOADING_TEXT: &str = "Loading media…";

#[component]
pub fn MediaPage() -> impl IntoView {
    let media = expect_context::<RwSignal<MediaState>>();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let generation = media.try_update(MediaState::begin_fetch).unwrap_or_default();
            let endpoint = crate::util::endpoint::items_endpoint();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_items(&endpoint).await {
                    Ok(items) => {
                        log::debug!("fetched {} media items from {endpoint}", items.len());
                        media.update(|m| {
                            if !m.apply_items(generation, items) {
                                log::debug!("dropped stale media items for fetch {generation}");
                            }
                        });
                    }
                    Err(e) => {
                        log::warn!("media items fetch failed: {e}");
                        media.update(|m| {
                            m.apply_error(generation, e.to_string());
                        });
                    }
                }
            });
        });
    }

    let on_search = Callback::new(move |term: String| media.update(|m| m.search_term = term));
    let search_value = Signal::derive(move || media.with(|m| m.search_term.clone()));

    view! {
        <div class="media-page">
            <div class="media-page__search">
                <SearchBar on_search=on_search value=search_value/>
            </div>
            <Show when=move || media.with(|m| m.error.is_some())>
                <p class="media-page__error">
                    {move || media.with(|m| m.error.clone().unwrap_or_default())}
                </p>
            </Show>
            <Show
                when=move || !media.with(|m| m.loading)
                fallback=|| view! { <p class="media-page__loading">{LOADING_TEXT}</p> }
            >
                <div class="media-page__cards">
                    {move || {
                        media
                            .with(MediaState::cards)
                            .into_iter()
                            .map(|(state, items)| view! { <MediaItemsCard state=state items=items/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
