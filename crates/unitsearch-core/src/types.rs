// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Wire shapes exchanged with the search engine.
//!
//! Field names follow the engine's stored documents (`desc`, `c_size`,
//! `i_size`, `_formatted`, `estimatedTotalHits`), so values deserialize
//! straight out of the engine's native search response.

use serde::{Deserialize, Serialize};

/// Number of hits fetched per pagination step.
pub const PAGE_SIZE: u32 = 20;

/// One package document, as stored in the `packages` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageHit {
	pub name: String,
	pub desc: String,
	pub url: String,
	pub version: String,
	/// Compressed (download) size in bytes.
	pub c_size: u64,
	/// Installed size in bytes.
	pub i_size: u64,
}

/// One unit-file document, as stored in the `services`/`timers` collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitHit {
	pub id: String,
	pub package: String,
	pub filename: String,
	pub content: String,
}

/// A hit paired with its highlighted variant.
///
/// `formatted` carries the same data as the base fields except that string
/// fields have `<em>…</em>` emphasis markup around matched substrings. The
/// base fields never contain markup; treat `formatted` as untrusted text and
/// run it through [`crate::highlight::to_safe_html`] before structural
/// injection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formatted<T> {
	#[serde(flatten)]
	pub base: T,
	#[serde(rename = "_formatted")]
	pub formatted: T,
}

/// Search request body sent to the Query Gateway (and relayed to the engine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
	pub q: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub offset: Option<u32>,
	pub attributes_to_highlight: Vec<String>,
	pub matching_strategy: String,
}

impl SearchRequest {
	/// A fresh search for `q`, starting at the first page.
	#[must_use]
	pub fn fresh(q: impl Into<String>) -> Self {
		Self {
			q: q.into(),
			offset: None,
			attributes_to_highlight: vec!["*".to_string()],
			matching_strategy: "all".to_string(),
		}
	}

	/// A pagination fetch for `q` at the given non-zero offset.
	#[must_use]
	pub fn page(q: impl Into<String>, offset: u32) -> Self {
		Self {
			offset: Some(offset),
			..Self::fresh(q)
		}
	}
}

/// The engine's native search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse<T> {
	pub estimated_total_hits: u32,
	pub hits: Vec<Formatted<T>>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fresh_request_omits_offset() {
		let body = serde_json::to_value(SearchRequest::fresh("vim")).unwrap();
		assert_eq!(
			body,
			serde_json::json!({
				"q": "vim",
				"attributesToHighlight": ["*"],
				"matchingStrategy": "all",
			})
		);
	}

	#[test]
	fn page_request_carries_offset() {
		let body = serde_json::to_value(SearchRequest::page("vim", 20)).unwrap();
		assert_eq!(body["offset"], 20);
		assert_eq!(body["q"], "vim");
	}

	#[test]
	fn formatted_hit_deserializes_from_engine_shape() {
		let raw = serde_json::json!({
			"id": "abc",
			"package": "core/systemd",
			"filename": "docker.service",
			"content": "[Unit]\nDescription=Docker",
			"_formatted": {
				"id": "abc",
				"package": "core/systemd",
				"filename": "<em>docker</em>.service",
				"content": "[Unit]\nDescription=<em>Docker</em>",
			},
		});
		let hit: Formatted<UnitHit> = serde_json::from_value(raw).unwrap();
		assert_eq!(hit.base.filename, "docker.service");
		assert_eq!(hit.formatted.filename, "<em>docker</em>.service");
	}

	#[test]
	fn search_response_uses_engine_field_names() {
		let raw = serde_json::json!({
			"estimatedTotalHits": 42,
			"hits": [],
			"processingTimeMs": 1,
		});
		let resp: SearchResponse<PackageHit> = serde_json::from_value(raw).unwrap();
		assert_eq!(resp.estimated_total_hits, 42);
		assert!(resp.hits.is_empty());
	}
}
