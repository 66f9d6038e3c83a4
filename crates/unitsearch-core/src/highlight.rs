// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Rendering of engine highlight markup.
//!
//! `_formatted` fields are plain strings in which the engine wraps matched
//! substrings in `<em>…</em>`. Because the engine echoes query text back,
//! these strings are untrusted and must never be injected structurally as-is.

const EM_OPEN: &str = "<em>";
const EM_CLOSE: &str = "</em>";

/// Escapes a highlighted string for HTML injection, preserving only the
/// engine's `<em>`/`</em>` emphasis spans.
///
/// All other markup, including anything an attacker smuggles through the
/// query text, comes out entity-escaped.
#[must_use]
pub fn to_safe_html(raw: &str) -> String {
	let mut escaped = String::with_capacity(raw.len());
	for c in raw.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			c => escaped.push(c),
		}
	}

	escaped
		.replace("&lt;em&gt;", EM_OPEN)
		.replace("&lt;/em&gt;", EM_CLOSE)
}
