// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// A required setting is absent from every source.
	#[error("missing required configuration: {0}")]
	Missing(&'static str),

	/// A setting is present but unusable.
	#[error("invalid value for {key}: {value}")]
	Invalid { key: &'static str, value: String },

	/// The config file could not be read.
	#[error("failed to read config file {path}: {source}")]
	Io {
		path: PathBuf,
		source: std::io::Error,
	},

	/// The config file could not be parsed.
	#[error("failed to parse config file {path}: {source}")]
	Parse {
		path: PathBuf,
		source: toml::de::Error,
	},
}
