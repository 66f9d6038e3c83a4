// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Gateway client implementation.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use unitsearch_core::{
	Collection, FetchPlan, SearchRequest, SearchResponse, SessionEvent, UnitKind,
};

use crate::error::GatewayError;
use crate::types::UnitFile;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the unitsearch edge gateways.
#[derive(Debug, Clone)]
pub struct GatewayClient {
	http_client: Client,
	base_url: String,
}

impl GatewayClient {
	/// Creates a new client for the gateway at the given base URL.
	pub fn new(base_url: impl Into<String>) -> Self {
		let http_client = Client::builder()
			.user_agent(concat!("unitsearch/", env!("CARGO_PKG_VERSION")))
			.timeout(REQUEST_TIMEOUT)
			.build()
			.expect("Failed to create HTTP client");

		Self {
			http_client,
			base_url: base_url.into().trim_end_matches('/').to_string(),
		}
	}

	/// Issues one search against the collection's Query Gateway.
	#[instrument(skip(self, request), fields(collection = %collection, q = %request.q))]
	pub async fn search<T: DeserializeOwned>(
		&self,
		collection: Collection,
		request: &SearchRequest,
	) -> Result<SearchResponse<T>, GatewayError> {
		let url = format!("{}/api/search/{}", self.base_url, collection);
		debug!(url = %url, offset = ?request.offset, "sending search request");

		let response = self
			.http_client
			.post(&url)
			.json(request)
			.send()
			.await
			.map_err(GatewayError::Network)?;

		let status = response.status();
		if !status.is_success() {
			warn!(status = %status, "gateway returned an error status");
			return Err(GatewayError::Status(status.as_u16()));
		}

		let body = response.text().await.map_err(GatewayError::Network)?;
		serde_json::from_str(&body)
			.map_err(|e| GatewayError::InvalidResponse(format!("JSON parse error: {e}")))
	}

	/// Executes a session [`FetchPlan`] and returns the event to feed back
	/// into the session.
	///
	/// Failures are not retried; they surface as [`SessionEvent::FetchFailed`]
	/// so the session frees its in-flight slot with prior state intact.
	pub async fn run_plan<T: DeserializeOwned>(
		&self,
		collection: Collection,
		plan: &FetchPlan,
	) -> SessionEvent<T> {
		match self.search::<T>(collection, &plan.request()).await {
			Ok(response) => SessionEvent::ResponseArrived {
				tag: plan.tag.clone(),
				estimated_total: response.estimated_total_hits,
				hits: response.hits,
			},
			Err(e) => {
				warn!(error = %e, query = %plan.tag.query, "search fetch failed");
				SessionEvent::FetchFailed {
					tag: plan.tag.clone(),
				}
			}
		}
	}

	/// Downloads a unit file through the Document Fetch Gateway.
	#[instrument(skip(self), fields(collection = %kind.collection()))]
	pub async fn fetch_unit_file(&self, kind: UnitKind, id: &str) -> Result<UnitFile, GatewayError> {
		let url = format!("{}/file/{}/{}", self.base_url, kind.collection(), id);
		debug!(url = %url, "downloading unit file");

		let response = self
			.http_client
			.get(&url)
			.send()
			.await
			.map_err(GatewayError::Network)?;

		let status = response.status();
		match status.as_u16() {
			200 => {}
			404 => return Err(GatewayError::NotFound),
			other => return Err(GatewayError::Status(other)),
		}

		fn header(response: &reqwest::Response, name: &str) -> Option<String> {
			response
				.headers()
				.get(name)
				.and_then(|v| v.to_str().ok())
				.map(str::to_string)
		}

		let package = header(&response, "x-package-name")
			.ok_or_else(|| GatewayError::InvalidResponse("missing x-package-name".to_string()))?;
		let unit_type = header(&response, "x-unit-type")
			.ok_or_else(|| GatewayError::InvalidResponse("missing x-unit-type".to_string()))?;
		let filename = header(&response, "content-disposition")
			.as_deref()
			.and_then(disposition_filename)
			.ok_or_else(|| {
				GatewayError::InvalidResponse("missing attachment filename".to_string())
			})?;
		let content = response.text().await.map_err(GatewayError::Network)?;

		Ok(UnitFile {
			filename,
			package,
			unit_type,
			content,
		})
	}
}

/// Extracts the quoted filename from an `attachment; filename="…"` header.
fn disposition_filename(value: &str) -> Option<String> {
	let (_, rest) = value.split_once("filename=\"")?;
	let (filename, _) = rest.split_once('"')?;
	Some(filename.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn client_creation_normalizes_base_url() {
		let client = GatewayClient::new("http://localhost:8080/");
		assert_eq!(client.base_url, "http://localhost:8080");
	}

	#[test]
	fn disposition_filename_extracts_quoted_names() {
		assert_eq!(
			disposition_filename(r#"attachment; filename="docker.service""#),
			Some("docker.service".to_string())
		);
		assert_eq!(disposition_filename("attachment"), None);
		assert_eq!(disposition_filename(r#"attachment; filename=""#), None);
	}
}
