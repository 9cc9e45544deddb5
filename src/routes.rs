//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches Leptos SSR rendering of every app page with the hydrate bundle
//! under `/pkg` and a liveness probe. There are no API routes: all auth is
//! simulated in the browser.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;

fn health_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Leptos SSR frontend: app pages + static assets + health probe.
///
/// # Errors
///
/// Returns [`ConfigError::Leptos`] if the Leptos configuration cannot be
/// loaded (missing or malformed `[package.metadata.leptos]`).
pub fn leptos_app() -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(with_layers(
        health_routes()
            .merge(leptos_router)
            .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))),
    ))
}

fn with_layers(router: Router) -> Router {
    router.layer(CompressionLayer::new()).layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
