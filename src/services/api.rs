// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Presence API client.
//!
//! Handles:
//! - Listing users (with a built-in roster as fallback)
//! - Listing presence records
//! - Saving a presence list

use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::AppError;
use crate::models::{Presence, User, UsersResponse};
use crate::sample::sample_users;

/// Presence API client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured base URL and timeout.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.api_timeout)
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL for an API path such as `/users`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// List all users.
    pub async fn get_users(&self) -> Result<Vec<User>, AppError> {
        let response: UsersResponse = self.get_json("/users").await?;
        let users = response.into_users();
        tracing::debug!(count = users.len(), "Fetched users");
        Ok(users)
    }

    /// List all users, or the sample roster if the API cannot be used.
    pub async fn get_users_or_sample(&self) -> Vec<User> {
        match self.get_users().await {
            Ok(users) => users,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch users, using sample roster");
                sample_users()
            }
        }
    }

    /// List all presence records.
    pub async fn get_presence(&self) -> Result<Vec<Presence>, AppError> {
        let presences: Vec<Presence> = self.get_json("/presence").await?;
        tracing::debug!(count = presences.len(), "Fetched presence records");
        Ok(presences)
    }

    /// Save the users marked present.
    ///
    /// Returns whatever JSON the server answers with (`null` for an empty body).
    pub async fn save_presence(&self, users: &[User]) -> Result<serde_json::Value, AppError> {
        let response = self.http.post(self.url("/presence")).json(users).send().await?;
        let body = check_response(response).await?;

        let value = if body.iter().all(u8::is_ascii_whitespace) {
            serde_json::Value::Null
        } else {
            parse_json(&body)?
        };
        tracing::info!(count = users.len(), "Presence list saved");
        Ok(value)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self.http.get(self.url(path)).send().await?;
        let body = check_response(response).await?;
        parse_json(&body)
    }
}

/// Check response status and return the body if successful.
async fn check_response(response: reqwest::Response) -> Result<Vec<u8>, AppError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "Presence API request failed");
        return Err(AppError::Api(format!("HTTP {}: {}", status, body)));
    }

    Ok(response.bytes().await?.to_vec())
}

fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::Api(format!("JSON parse error: {}", e)))
}
