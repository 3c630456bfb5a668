//! Router assembly.

mod common;
mod resources;

pub use common::common_routes;
pub use resources::resource_routes;

use crate::config::ServerConfig;
use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application: common routes at root, resource routes under the configured prefix.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    let resources = resource_routes(state.clone());
    let api = if config.api_prefix == "/" {
        resources
    } else {
        Router::new().nest(&config.api_prefix, resources)
    };
    Router::new()
        .merge(common_routes(state))
        .merge(api)
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
