// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Screen state, updated through explicit reducer methods.

pub mod presence_list;

pub use presence_list::PresenceListState;
