//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the health check, the compiled WASM/CSS bundle, and
//! Leptos SSR rendering under a single Axum router. Media items are not served
//! here; the browser fetches them from the configured items endpoint.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

/// Routes that do not depend on Leptos configuration.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full dashboard router: health check, SSR pages, and `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `LEPTOS_*` environment or `[[workspace.metadata.leptos]]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "registered leptos routes");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            let items_endpoint = config.items_endpoint.clone();
            move || client::app::shell(opts.clone(), items_endpoint.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(with_layers(
        base_routes()
            .merge(leptos_router)
            .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))),
    ))
}

fn with_layers(router: Router) -> Router {
    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
