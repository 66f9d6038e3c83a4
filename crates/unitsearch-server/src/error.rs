// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;
use unitsearch_server_meili::MeiliError;

/// Generic error body. Upstream detail never leaks to the caller.
pub const GENERIC_ERROR_BODY: &str = "internal error";

/// Errors surfaced by gateway handlers.
#[derive(Debug, Error)]
pub enum ServerError {
	/// The route named a collection this system does not serve.
	#[error("unknown collection: {0}")]
	UnknownCollection(String),

	/// The outbound call to the engine failed.
	#[error("engine request failed: {0}")]
	Engine(#[from] MeiliError),

	/// An engine document could not be framed as a download response.
	#[error("document fields not representable as response headers")]
	UnframeableDocument,
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		match self {
			ServerError::UnknownCollection(_) => StatusCode::NOT_FOUND.into_response(),
			ServerError::Engine(e) => {
				error!(error = %e, "upstream engine call failed");
				(StatusCode::BAD_GATEWAY, GENERIC_ERROR_BODY).into_response()
			}
			ServerError::UnframeableDocument => {
				error!("engine document not representable as response headers");
				(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_BODY).into_response()
			}
		}
	}
}
