// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the Meilisearch client.

use thiserror::Error;

/// Errors that can occur when talking to the search engine.
#[derive(Debug, Error)]
pub enum MeiliError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Invalid or unparseable response from the engine.
	#[error("Invalid response from engine: {0}")]
	InvalidResponse(String),
}
