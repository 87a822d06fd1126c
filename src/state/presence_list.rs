// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! State of the presence list: loaded users, search box and selection.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::AppError;
use crate::models::User;
use crate::services::search::filter_users;

/// Presence list screen state.
///
/// The visible list is always `filter_users(users, query)`; selection is
/// kept by user ID so it survives re-filtering.
#[derive(Debug, Clone, Default)]
pub struct PresenceListState {
    users: Vec<User>,
    visible: Vec<User>,
    selected: HashSet<String>,
    query: String,
    loading: bool,
}

impl PresenceListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a fetch (initial load or pull-to-refresh) as in flight.
    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    /// Replace the user list with freshly fetched users.
    ///
    /// The current query is re-applied and selections of users that are no
    /// longer listed are dropped.
    pub fn load(&mut self, users: Vec<User>, today: NaiveDate) {
        self.selected
            .retain(|id| users.iter().any(|u| &u.user_id == id));
        self.visible = filter_users(&users, &self.query, today);
        self.users = users;
        self.loading = false;
        tracing::debug!(
            users = self.users.len(),
            visible = self.visible.len(),
            "Presence list loaded"
        );
    }

    /// A fetch failed; keep whatever was shown before.
    pub fn load_failed(&mut self) {
        self.loading = false;
    }

    pub fn search(&mut self, query: &str, today: NaiveDate) {
        self.query = query.to_string();
        self.visible = filter_users(&self.users, query, today);
    }

    /// Flip the selection of one user. Returns whether it is now selected.
    pub fn toggle(&mut self, user_id: &str) -> bool {
        if self.selected.remove(user_id) {
            false
        } else {
            self.selected.insert(user_id.to_string());
            true
        }
    }

    /// Mark one user selected; selecting twice keeps it selected.
    pub fn select(&mut self, user_id: &str) {
        self.selected.insert(user_id.to_string());
    }

    pub fn is_selected(&self, user_id: &str) -> bool {
        self.selected.contains(user_id)
    }

    /// Selected users in list order (filtered-out users included).
    pub fn selected_users(&self) -> Vec<&User> {
        self.users
            .iter()
            .filter(|u| self.selected.contains(&u.user_id))
            .collect()
    }

    /// Users to send when saving the presence list.
    pub fn save_request(&self) -> Result<Vec<User>, AppError> {
        let users: Vec<User> = self.selected_users().into_iter().cloned().collect();
        if users.is_empty() {
            return Err(AppError::NoUsersSelected);
        }
        Ok(users)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn visible(&self) -> &[User] {
        &self.visible
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
