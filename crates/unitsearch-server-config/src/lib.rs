// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Centralized configuration management for the unitsearch server.
//!
//! Configuration is resolved once at startup and read-only afterwards.
//! Precedence (highest to lowest):
//!
//! 1. Environment variables (`MEILI_URL`, `MEILI_KEY`, `UNITSEARCH_*`)
//! 2. Optional TOML file named by `UNITSEARCH_CONFIG`
//! 3. Built-in defaults
//!
//! The engine URL and credential have no defaults; their absence is a fatal
//! [`ConfigError`].

pub mod error;
pub mod sections;

pub use error::ConfigError;
pub use sections::{EngineConfig, HttpConfig, LoggingConfig};

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use sections::{EngineConfigLayer, HttpConfigLayer, LoggingConfigLayer};

/// Fully resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub engine: EngineConfig,
	pub logging: LoggingConfig,
}

impl ServerConfig {
	/// The socket address string for binding.
	#[must_use]
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Partial configuration as read from one source.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub http: HttpConfigLayer,
	#[serde(default)]
	pub engine: EngineConfigLayer,
	#[serde(default)]
	pub logging: LoggingConfigLayer,
}

impl ServerConfigLayer {
	pub fn merge(&mut self, other: Self) {
		self.http.merge(other.http);
		self.engine.merge(other.engine);
		self.logging.merge(other.logging);
	}
}

/// Load configuration from all sources with standard precedence.
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	let mut merged = ServerConfigLayer::default();

	if let Ok(path) = std::env::var("UNITSEARCH_CONFIG") {
		debug!(path = %path, "loading configuration file");
		merged.merge(load_toml(Path::new(&path))?);
	}

	merged.merge(env_layer()?);
	finalize(merged)
}

/// Load configuration from environment only (for testing or simple
/// deployments).
pub fn load_config_from_env() -> Result<ServerConfig, ConfigError> {
	let mut merged = ServerConfigLayer::default();
	merged.merge(env_layer()?);
	finalize(merged)
}

fn load_toml(path: &Path) -> Result<ServerConfigLayer, ConfigError> {
	let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	toml::from_str(&raw).map_err(|source| ConfigError::Parse {
		path: path.to_path_buf(),
		source,
	})
}

fn env_layer() -> Result<ServerConfigLayer, ConfigError> {
	let port = match std::env::var("UNITSEARCH_HTTP_PORT") {
		Ok(raw) => Some(raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
			key: "UNITSEARCH_HTTP_PORT",
			value: raw.clone(),
		})?),
		Err(_) => None,
	};

	Ok(ServerConfigLayer {
		http: HttpConfigLayer {
			host: std::env::var("UNITSEARCH_HTTP_HOST").ok(),
			port,
		},
		engine: EngineConfigLayer {
			url: std::env::var("MEILI_URL").ok(),
			api_key: std::env::var("MEILI_KEY").ok(),
		},
		logging: LoggingConfigLayer {
			level: std::env::var("UNITSEARCH_LOG").ok(),
		},
	})
}

fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	Ok(ServerConfig {
		http: layer.http.finalize(),
		engine: layer.engine.finalize()?,
		logging: layer.logging.finalize(),
	})
}
