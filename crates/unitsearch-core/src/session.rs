// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The search session state machine.
//!
//! A [`SearchSession`] holds everything one mounted search view accumulates:
//! the live query, the pagination offset, the engine's total estimate, and
//! the hits received so far. It is advanced exclusively through
//! [`SearchSession::apply`], a pure reducer over [`SessionEvent`]s that
//! returns the [`FetchPlan`] (if any) the caller must execute.
//!
//! Every outbound fetch carries the [`FetchTag`] it was issued for. A
//! response is applied only when its tag still matches the session's single
//! in-flight slot, so responses belonging to a superseded query are dropped
//! instead of merged — regardless of the order in which fetches complete.

use crate::types::{Formatted, SearchRequest, PAGE_SIZE};

/// Identity of one outbound fetch: the query and offset it was issued for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchTag {
	pub query: String,
	pub offset: u32,
}

/// An instruction to the driver to issue one tagged fetch against the
/// collection's Query Gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPlan {
	pub tag: FetchTag,
}

impl FetchPlan {
	/// The request body to POST for this plan. Offset zero is the fresh
	/// search and is never sent explicitly.
	#[must_use]
	pub fn request(&self) -> SearchRequest {
		if self.tag.offset == 0 {
			SearchRequest::fresh(self.tag.query.clone())
		} else {
			SearchRequest::page(self.tag.query.clone(), self.tag.offset)
		}
	}
}

/// Events a driver feeds into the session reducer.
#[derive(Debug, Clone)]
pub enum SessionEvent<T> {
	/// The user edited the query text.
	QueryChanged(String),
	/// The user asked for the next page.
	LoadMoreRequested,
	/// A fetch completed with the engine's response.
	ResponseArrived {
		tag: FetchTag,
		estimated_total: u32,
		hits: Vec<Formatted<T>>,
	},
	/// A fetch failed at the network layer.
	FetchFailed { tag: FetchTag },
	/// The view unmounted or switched unit type.
	ViewReset,
}

/// Accumulated state for one mounted search view.
#[derive(Debug, Clone)]
pub struct SearchSession<T> {
	query: String,
	offset: u32,
	estimated_total: u32,
	hits: Vec<Formatted<T>>,
	in_flight: Option<FetchTag>,
}

impl<T> Default for SearchSession<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> SearchSession<T> {
	/// An empty session with no query and no results.
	#[must_use]
	pub fn new() -> Self {
		Self {
			query: String::new(),
			offset: 0,
			estimated_total: 0,
			hits: Vec::new(),
			in_flight: None,
		}
	}

	/// The live query text.
	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Hits accumulated for the live query, in arrival order.
	#[must_use]
	pub fn hits(&self) -> &[Formatted<T>] {
		&self.hits
	}

	/// The engine's estimate of total matches for the live query.
	#[must_use]
	pub fn estimated_total(&self) -> u32 {
		self.estimated_total
	}

	/// The current pagination offset.
	#[must_use]
	pub fn offset(&self) -> u32 {
		self.offset
	}

	/// Whether a fetch is outstanding.
	#[must_use]
	pub fn is_fetching(&self) -> bool {
		self.in_flight.is_some()
	}

	/// Whether the engine holds more matches than have been fetched.
	#[must_use]
	pub fn has_more(&self) -> bool {
		!self.query.is_empty() && self.offset < self.estimated_total
	}

	/// Advances the session by one event, returning the fetch the caller
	/// must issue, if any.
	pub fn apply(&mut self, event: SessionEvent<T>) -> Option<FetchPlan> {
		match event {
			SessionEvent::QueryChanged(text) => self.query_changed(text),
			SessionEvent::LoadMoreRequested => self.load_more(),
			SessionEvent::ResponseArrived {
				tag,
				estimated_total,
				hits,
			} => {
				self.response_arrived(tag, estimated_total, hits);
				None
			}
			SessionEvent::FetchFailed { tag } => {
				if self.in_flight.as_ref() == Some(&tag) {
					self.in_flight = None;
				}
				None
			}
			SessionEvent::ViewReset => {
				*self = Self::new();
				None
			}
		}
	}

	fn query_changed(&mut self, text: String) -> Option<FetchPlan> {
		if text.is_empty() {
			// Cleared synchronously; any in-flight response will fail the
			// tag match and be discarded on arrival.
			*self = Self::new();
			return None;
		}

		self.query = text;
		self.offset = 0;
		let tag = FetchTag {
			query: self.query.clone(),
			offset: 0,
		};
		self.in_flight = Some(tag.clone());
		Some(FetchPlan { tag })
	}

	fn load_more(&mut self) -> Option<FetchPlan> {
		// One fetch in flight at a time keeps pagination ordering
		// deterministic; a pending fresh search also blocks paging.
		if self.query.is_empty() || self.in_flight.is_some() || !self.has_more() {
			return None;
		}

		self.offset += PAGE_SIZE;
		let tag = FetchTag {
			query: self.query.clone(),
			offset: self.offset,
		};
		self.in_flight = Some(tag.clone());
		Some(FetchPlan { tag })
	}

	fn response_arrived(&mut self, tag: FetchTag, estimated_total: u32, hits: Vec<Formatted<T>>) {
		if self.in_flight.as_ref() != Some(&tag) {
			// Stale: the query changed (or the view reset) after this fetch
			// was issued. Never merged.
			return;
		}

		self.in_flight = None;
		self.estimated_total = estimated_total;
		if tag.offset == 0 {
			self.hits = hits;
		} else {
			self.hits.extend(hits);
		}
	}
}
