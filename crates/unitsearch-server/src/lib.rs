// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Edge gateway server for unitsearch.
//!
//! Hosts the two credential-injecting relays between untrusted clients and
//! the hosted search engine: the Query Gateway
//! (`POST /api/search/{collection}`) and the Document Fetch Gateway
//! (`GET /file/{collection}/{id}`). The engine credential lives only in this
//! process; clients never see it.

pub mod api;
pub mod error;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
pub use error::ServerError;
pub use unitsearch_server_config::ServerConfig;
