// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Core domain types and the search session state machine for unitsearch.
//!
//! This crate is deliberately free of I/O. It defines the document
//! collections, the wire shapes exchanged with the search engine, and the
//! [`SearchSession`] reducer that drives incremental search-and-paginate
//! behaviour. Drivers (the gateway client, a UI loop) feed it
//! [`SessionEvent`]s and execute the [`FetchPlan`]s it emits.

pub mod collection;
pub mod highlight;
pub mod session;
pub mod types;

pub use collection::{Collection, ParseCollectionError, UnitKind};
pub use session::{FetchPlan, FetchTag, SearchSession, SessionEvent};
pub use types::{Formatted, PackageHit, SearchRequest, SearchResponse, UnitHit, PAGE_SIZE};
