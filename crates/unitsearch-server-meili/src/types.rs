// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Response shapes produced by the Meilisearch client.

use bytes::Bytes;
use unitsearch_core::UnitHit;

/// A search response relayed verbatim: upstream status, content type, and
/// body, untouched.
#[derive(Debug, Clone)]
pub struct RelayResponse {
	pub status: u16,
	pub content_type: Option<String>,
	pub body: Bytes,
}

/// Outcome of a single-document fetch, classified by upstream status.
#[derive(Debug, Clone)]
pub enum DocumentFetch {
	/// Upstream 200 with a parseable unit document.
	Found(UnitHit),
	/// Upstream 404: no document with that id.
	NotFound,
	/// Any other upstream status; the detail stays server-side.
	UpstreamError(u16),
}
