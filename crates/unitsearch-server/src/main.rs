// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! unitsearch edge gateway server binary.

use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use unitsearch_server::{create_app_state, create_router};

/// unitsearch-server - edge gateways between search clients and the engine.
#[derive(Parser, Debug)]
#[command(
	name = "unitsearch-server",
	about = "Credential-injecting gateways for package and unit-file search",
	version
)]
struct Args {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let _args = Args::parse();

	// Load .env file if present
	dotenvy::dotenv().ok();

	// Load configuration; the engine URL and credential are required.
	let config = unitsearch_server_config::load_config()?;

	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.logging.level.clone().into()),
		)
		.with(tracing_subscriber::fmt::layer())
		.init();

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		engine = %config.engine.url,
		"starting unitsearch-server"
	);

	let state = create_app_state(&config);
	let app = create_router(state)
		.layer(TraceLayer::new_for_http())
		.layer(
			CorsLayer::new()
				.allow_origin(Any)
				.allow_methods(Any)
				.allow_headers(Any),
		);

	let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
	tracing::info!(addr = %listener.local_addr()?, "listening");
	axum::serve(listener, app).await?;

	Ok(())
}
