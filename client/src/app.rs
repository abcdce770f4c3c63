//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Link, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::pages::{dashboard::APP_TITLE, dashboard::DashboardShell, home::HomePage, media::MediaPage};
use crate::state::{media::MediaState, ui::UiState};
use crate::util::endpoint::ENDPOINT_META_NAME;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `items_endpoint` is advertised to the browser through a meta tag so the
/// media page fetches from the endpoint the server was configured with.
pub fn shell(options: LeptosOptions, items_endpoint: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=ENDPOINT_META_NAME content=items_endpoint/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let media = RwSignal::new(MediaState::default());

    provide_context(ui);
    provide_context(media);

    view! {
        <Stylesheet id="leptos" href="/pkg/plex-debrid-ui.css"/>
        <Link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Poppins:wght@400;500;600&display=swap"/>
        <Title text=APP_TITLE/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <ParentRoute path=StaticSegment("") view=DashboardShell>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("media") view=MediaPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
