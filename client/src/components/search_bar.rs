//! Search box above the media cards.

use leptos::prelude::*;

/// Text input that reports its full value on every keystroke.
#[component]
pub fn SearchBar(
    on_search: Callback<String>,
    #[prop(into, default = Signal::stored(String::new()))] value: Signal<String>,
    #[prop(default = "Search media...")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                class="search-bar__input"
                type="search"
                placeholder=placeholder
                aria-label="Search media by title"
                prop:value=move || value.get()
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />
        </div>
    }
}
