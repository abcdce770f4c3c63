//! Landing content rendered at `/`.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h2>"Welcome"</h2>
            <p>
                "Track what Plex Debrid is doing with your media. Open "
                <A href="/media">"Media"</A>
                " to browse items by processing state."
            </p>
        </div>
    }
}
