// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Configuration sections: partial layers that merge, then finalize into
//! resolved values.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// HTTP listener section, partial.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpConfigLayer {
	pub host: Option<String>,
	pub port: Option<u16>,
}

impl HttpConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.host.is_some() {
			self.host = other.host;
		}
		if other.port.is_some() {
			self.port = other.port;
		}
	}

	pub fn finalize(self) -> HttpConfig {
		HttpConfig {
			host: self.host.unwrap_or_else(|| "127.0.0.1".to_string()),
			port: self.port.unwrap_or(8080),
		}
	}
}

/// HTTP listener section, resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
	pub host: String,
	pub port: u16,
}

impl Default for HttpConfig {
	fn default() -> Self {
		HttpConfigLayer::default().finalize()
	}
}

/// Search engine section, partial. Both fields are required; there is no
/// usable default for a credentialed upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfigLayer {
	pub url: Option<String>,
	pub api_key: Option<String>,
}

impl EngineConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.url.is_some() {
			self.url = other.url;
		}
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
	}

	pub fn finalize(self) -> Result<EngineConfig, ConfigError> {
		Ok(EngineConfig {
			url: self.url.ok_or(ConfigError::Missing("MEILI_URL"))?,
			api_key: self.api_key.ok_or(ConfigError::Missing("MEILI_KEY"))?,
		})
	}
}

/// Search engine section, resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
	pub url: String,
	/// Engine credential. Known only to the gateways; never logged and
	/// never serialized into a response.
	pub api_key: String,
}

/// Logging section, partial.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfigLayer {
	pub level: Option<String>,
}

impl LoggingConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.level.is_some() {
			self.level = other.level;
		}
	}

	pub fn finalize(self) -> LoggingConfig {
		LoggingConfig {
			level: self.level.unwrap_or_else(|| "info".to_string()),
		}
	}
}

/// Logging section, resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
	pub level: String,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		LoggingConfigLayer::default().finalize()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn http_defaults_to_loopback() {
		let http = HttpConfigLayer::default().finalize();
		assert_eq!(http.host, "127.0.0.1");
		assert_eq!(http.port, 8080);
	}

	#[test]
	fn merge_prefers_the_overriding_layer() {
		let mut base = HttpConfigLayer {
			host: Some("0.0.0.0".to_string()),
			port: Some(3000),
		};
		base.merge(HttpConfigLayer {
			host: None,
			port: Some(9000),
		});
		let http = base.finalize();
		assert_eq!(http.host, "0.0.0.0");
		assert_eq!(http.port, 9000);
	}

	#[test]
	fn engine_section_requires_url_and_key() {
		let err = EngineConfigLayer::default().finalize().unwrap_err();
		assert!(matches!(err, ConfigError::Missing("MEILI_URL")));

		let err = EngineConfigLayer {
			url: Some("http://meili.internal:7700".to_string()),
			api_key: None,
		}
		.finalize()
		.unwrap_err();
		assert!(matches!(err, ConfigError::Missing("MEILI_KEY")));
	}
}
