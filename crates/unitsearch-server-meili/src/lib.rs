// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Meilisearch client for the unitsearch gateways.
//!
//! This is the only place the engine credential is attached to an outbound
//! request. The client exposes exactly the two operations the gateways
//! relay: a verbatim search passthrough and a single-document fetch.

pub mod client;
pub mod error;
pub mod types;

pub use client::MeiliClient;
pub use error::MeiliError;
pub use types::{DocumentFetch, RelayResponse};
