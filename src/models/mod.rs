// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod lenient;
pub mod presence;
pub mod stats;
pub mod user;

pub use presence::{Presence, PresenceTotals};
pub use stats::{AttendanceEntry, AttendanceStats, ChartSeries, StatsSettings};
pub use user::{Role, User, UsersResponse};
