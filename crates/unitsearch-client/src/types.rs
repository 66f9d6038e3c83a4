// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Types produced by the gateway client.

/// A downloaded unit file, reassembled from the Document Fetch Gateway's
/// framed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitFile {
	/// Filename from the `content-disposition` header.
	pub filename: String,
	/// Owning package from the `x-package-name` header.
	pub package: String,
	/// Unit kind tag from the `x-unit-type` header (`service`/`timer`).
	pub unit_type: String,
	/// The unit file content, verbatim.
	pub content: String,
}
