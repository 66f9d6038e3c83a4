// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Gateway client for unitsearch search views.
//!
//! This crate talks to the edge gateways, never to the engine: the gateways
//! hold the credential, so no API key is needed here. A search view owns a
//! [`unitsearch_core::SearchSession`] and uses [`GatewayClient::run_plan`]
//! to turn each emitted fetch plan into the session event it feeds back.
//!
//! # Example
//!
//! ```no_run
//! use unitsearch_client::GatewayClient;
//! use unitsearch_core::{Collection, SearchSession, SessionEvent, UnitHit};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GatewayClient::new("http://localhost:8080");
//! let mut session: SearchSession<UnitHit> = SearchSession::new();
//!
//! if let Some(plan) = session.apply(SessionEvent::QueryChanged("docker".into())) {
//! 	let event = client.run_plan(Collection::Services, &plan).await;
//! 	session.apply(event);
//! }
//! println!("{} of ~{} hits", session.hits().len(), session.estimated_total());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::GatewayClient;
pub use error::GatewayError;
pub use types::UnitFile;
