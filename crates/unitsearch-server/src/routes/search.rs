// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Query Gateway: credential-injecting search relay.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::debug;
use unitsearch_core::Collection;

use crate::api::AppState;
use crate::error::ServerError;

/// POST /api/search/{collection} - Relay a search body to the engine.
///
/// The body is forwarded unmodified and the engine's status, content type,
/// and body come back verbatim. The only thing added on the way out is the
/// engine credential; the only thing checked on the way in is the
/// collection name.
pub async fn search_handler(
	State(state): State<AppState>,
	Path(collection): Path<String>,
	body: Bytes,
) -> Result<Response, ServerError> {
	let collection: Collection = collection
		.parse()
		.map_err(|_| ServerError::UnknownCollection(collection))?;

	let relay = state.meili.search_raw(collection, body).await?;
	debug!(collection = %collection, status = relay.status, "search relayed");

	let status = StatusCode::from_u16(relay.status).unwrap_or(StatusCode::BAD_GATEWAY);
	let mut headers = HeaderMap::new();
	if let Some(ct) = relay
		.content_type
		.as_deref()
		.and_then(|ct| HeaderValue::from_str(ct).ok())
	{
		headers.insert(CONTENT_TYPE, ct);
	}

	Ok((status, headers, relay.body).into_response())
}
