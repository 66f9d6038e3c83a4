// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the gateway client.

use thiserror::Error;

/// Errors that can occur when talking to the gateways.
#[derive(Debug, Error)]
pub enum GatewayError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// The requested document does not exist.
	#[error("document not found")]
	NotFound,

	/// The gateway returned a non-success status.
	#[error("gateway returned status {0}")]
	Status(u16),

	/// Invalid or unparseable response from the gateway.
	#[error("Invalid response from gateway: {0}")]
	InvalidResponse(String),
}
