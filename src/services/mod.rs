// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - search and presence API access.

pub mod api;
pub mod report;
pub mod search;

pub use api::ApiClient;
pub use report::ReportService;
pub use search::{filter_users, filter_users_ref, normalize};
