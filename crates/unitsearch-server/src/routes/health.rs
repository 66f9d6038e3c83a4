// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: &'static str,
}

/// GET /health - Liveness check.
///
/// The engine is not probed here; its credential and URL are validated at
/// startup and every gateway call reports upstream failures on its own.
pub async fn health_check() -> impl IntoResponse {
	Json(HealthResponse { status: "ok" })
}
