// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Document collections held by the search engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named document set held by the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
	Packages,
	Services,
	Timers,
}

impl Collection {
	/// The engine-side index name for this collection.
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Collection::Packages => "packages",
			Collection::Services => "services",
			Collection::Timers => "timers",
		}
	}
}

impl std::fmt::Display for Collection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for Collection {
	type Err = ParseCollectionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"packages" => Ok(Collection::Packages),
			"services" => Ok(Collection::Services),
			"timers" => Ok(Collection::Timers),
			other => Err(ParseCollectionError(other.to_string())),
		}
	}
}

/// Error returned when a string names no known collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown collection: {0}")]
pub struct ParseCollectionError(pub String);

/// The kind of systemd unit a document collection stores.
///
/// Only unit collections support document retrieval; packages are
/// search-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
	Service,
	Timer,
}

impl UnitKind {
	/// The collection that stores units of this kind.
	#[must_use]
	pub fn collection(self) -> Collection {
		match self {
			UnitKind::Service => Collection::Services,
			UnitKind::Timer => Collection::Timers,
		}
	}

	/// The `x-unit-type` header value for downloads of this kind.
	#[must_use]
	pub fn tag(self) -> &'static str {
		match self {
			UnitKind::Service => "service",
			UnitKind::Timer => "timer",
		}
	}
}

impl std::str::FromStr for UnitKind {
	type Err = ParseCollectionError;

	/// Parses the collection form (`services`/`timers`), as used in routes.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"services" => Ok(UnitKind::Service),
			"timers" => Ok(UnitKind::Timer),
			other => Err(ParseCollectionError(other.to_string())),
		}
	}
}
