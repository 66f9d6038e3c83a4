// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Meilisearch client implementation.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use tracing::{debug, error, instrument};
use unitsearch_core::{Collection, UnitHit, UnitKind};

use crate::error::MeiliError;
use crate::types::{DocumentFetch, RelayResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the hosted search engine.
///
/// Holds the engine credential; both gateways share one instance. The
/// credential never appears in responses or logs.
#[derive(Debug, Clone)]
pub struct MeiliClient {
	http_client: Client,
	base_url: String,
	api_key: String,
}

impl MeiliClient {
	/// Creates a new engine client for the given base URL and API key.
	pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
		let http_client = Client::builder()
			.user_agent(user_agent())
			.timeout(REQUEST_TIMEOUT)
			.build()
			.expect("Failed to create HTTP client");

		Self {
			http_client,
			base_url: base_url.into().trim_end_matches('/').to_string(),
			api_key: api_key.into(),
		}
	}

	/// Forwards a raw search body to the collection's search endpoint and
	/// returns the engine's response untouched.
	///
	/// No validation, transformation, caching, or retry happens here; the
	/// gateway is a transparent credential-injecting relay.
	#[instrument(skip(self, body), fields(collection = %collection))]
	pub async fn search_raw(
		&self,
		collection: Collection,
		body: Bytes,
	) -> Result<RelayResponse, MeiliError> {
		let url = format!("{}/indexes/{}/search", self.base_url, collection);
		debug!(url = %url, "relaying search request to engine");

		let response = self
			.http_client
			.post(&url)
			.header(AUTHORIZATION, format!("Bearer {}", self.api_key))
			.header(CONTENT_TYPE, "application/json")
			.body(body)
			.send()
			.await
			.map_err(|e| {
				error!(error = %e, "network error relaying search to engine");
				MeiliError::Network(e)
			})?;

		let status = response.status().as_u16();
		let content_type = response
			.headers()
			.get(CONTENT_TYPE)
			.and_then(|v| v.to_str().ok())
			.map(str::to_string);
		let body = response.bytes().await.map_err(MeiliError::Network)?;

		debug!(status = status, bytes = body.len(), "engine search response relayed");

		Ok(RelayResponse {
			status,
			content_type,
			body,
		})
	}

	/// Fetches a single unit document by id, classifying the upstream
	/// status for the Document Fetch Gateway.
	#[instrument(skip(self), fields(collection = %kind.collection()))]
	pub async fn get_document(&self, kind: UnitKind, id: &str) -> Result<DocumentFetch, MeiliError> {
		let url = format!(
			"{}/indexes/{}/documents/{}",
			self.base_url,
			kind.collection(),
			id
		);
		debug!(url = %url, "fetching document from engine");

		let response = self
			.http_client
			.get(&url)
			.header(AUTHORIZATION, format!("Bearer {}", self.api_key))
			.send()
			.await
			.map_err(|e| {
				error!(error = %e, "network error fetching document from engine");
				MeiliError::Network(e)
			})?;

		let status = response.status().as_u16();
		match status {
			200 => {
				let body = response.text().await.map_err(MeiliError::Network)?;
				let unit: UnitHit = serde_json::from_str(&body).map_err(|e| {
					error!(error = %e, "failed to parse engine document");
					MeiliError::InvalidResponse(format!("JSON parse error: {e}"))
				})?;
				debug!(filename = %unit.filename, "document fetched");
				Ok(DocumentFetch::Found(unit))
			}
			404 => {
				debug!("document not found");
				Ok(DocumentFetch::NotFound)
			}
			other => {
				error!(status = other, "engine returned an error status");
				Ok(DocumentFetch::UpstreamError(other))
			}
		}
	}
}

fn user_agent() -> String {
	format!("unitsearch/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn client_creation_normalizes_base_url() {
		let client = MeiliClient::new("http://meili.internal:7700/", "test-key");
		assert_eq!(client.base_url, "http://meili.internal:7700");
		assert_eq!(client.api_key, "test-key");
	}

	#[test]
	fn user_agent_names_the_product() {
		assert!(user_agent().starts_with("unitsearch/"));
	}
}
