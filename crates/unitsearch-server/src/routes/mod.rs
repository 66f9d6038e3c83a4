// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Route handlers, one file per surface.

pub mod file;
pub mod health;
pub mod search;
