// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and router assembly.

use axum::routing::{get, post};
use axum::Router;
use unitsearch_server_config::ServerConfig;
use unitsearch_server_meili::MeiliClient;

use crate::routes;

/// Application state shared across handlers.
///
/// Read-only after startup; handlers never mutate it.
#[derive(Clone)]
pub struct AppState {
	pub meili: MeiliClient,
}

/// Creates the application state from resolved configuration.
pub fn create_app_state(config: &ServerConfig) -> AppState {
	AppState {
		meili: MeiliClient::new(&config.engine.url, &config.engine.api_key),
	}
}

/// Builds the gateway router.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(routes::health::health_check))
		.route("/api/search/{collection}", post(routes::search::search_handler))
		.route("/file/{collection}/{id}", get(routes::file::file_handler))
		.with_state(state)
}
