// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Document Fetch Gateway: turns an engine document into a downloadable
//! file response.

use axum::extract::{Path, State};
use axum::http::header::{HeaderName, CONTENT_DISPOSITION};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::debug;
use unitsearch_core::UnitKind;

use crate::api::AppState;
use crate::error::{ServerError, GENERIC_ERROR_BODY};
use unitsearch_server_meili::DocumentFetch;

static X_PACKAGE_NAME: HeaderName = HeaderName::from_static("x-package-name");
static X_UNIT_TYPE: HeaderName = HeaderName::from_static("x-unit-type");

/// GET /file/{collection}/{id} - Download a unit file by document id.
///
/// This is the one place the system transforms content rather than relaying
/// it: a 200 from the engine is unwrapped from its JSON document into the
/// raw unit file body with attachment framing. 404 passes through with an
/// empty body; any other upstream status keeps its code but gets a generic
/// body so engine detail stays server-side.
pub async fn file_handler(
	State(state): State<AppState>,
	Path((collection, id)): Path<(String, String)>,
) -> Result<Response, ServerError> {
	let kind: UnitKind = collection
		.parse()
		.map_err(|_| ServerError::UnknownCollection(collection))?;

	match state.meili.get_document(kind, &id).await? {
		DocumentFetch::Found(unit) => {
			debug!(filename = %unit.filename, package = %unit.package, "serving unit file");

			let mut headers = HeaderMap::new();
			headers.insert(
				X_PACKAGE_NAME.clone(),
				HeaderValue::from_str(&unit.package)
					.map_err(|_| ServerError::UnframeableDocument)?,
			);
			headers.insert(X_UNIT_TYPE.clone(), HeaderValue::from_static(kind.tag()));
			headers.insert(
				CONTENT_DISPOSITION,
				HeaderValue::from_str(&format!("attachment; filename=\"{}\"", unit.filename))
					.map_err(|_| ServerError::UnframeableDocument)?,
			);

			Ok((StatusCode::OK, headers, unit.content).into_response())
		}
		DocumentFetch::NotFound => Ok(StatusCode::NOT_FOUND.into_response()),
		DocumentFetch::UpstreamError(status) => {
			let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
			Ok((status, GENERIC_ERROR_BODY).into_response())
		}
	}
}
