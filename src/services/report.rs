// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Attendance report (PDF) download.

use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::services::api::ApiClient;

/// Downloads the server-rendered attendance report.
#[derive(Clone)]
pub struct ReportService {
    api: ApiClient,
    file_name: String,
}

impl ReportService {
    pub fn new(api: ApiClient, file_name: String) -> Self {
        Self { api, file_name }
    }

    /// Download `GET /report` into `dir`, returning the saved file's path.
    ///
    /// Nothing is written when the server answers with an error status or
    /// an empty body.
    pub async fn download(&self, dir: &Path) -> Result<PathBuf, AppError> {
        let url = self.api.url("/report");
        let target = dir.join(&self.file_name);
        tracing::info!(%url, path = %target.display(), "Starting report download");

        let response = self.api.http().get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = server_message(&body);
            tracing::error!(status = status.as_u16(), %message, "Report download failed");
            return Err(AppError::Report {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            tracing::error!("Downloaded report is empty");
            return Err(AppError::EmptyReport);
        }

        tokio::fs::create_dir_all(dir).await?;
        tokio::fs::write(&target, &bytes).await?;

        tracing::info!(path = %target.display(), size = bytes.len(), "Report saved");
        Ok(target)
    }
}

/// Human-readable message from an error body.
///
/// Prefers the `message` field of a JSON body, then the JSON itself, then
/// the raw text.
fn server_message(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return "Server error".to_string();
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => match json.get("message").and_then(|m| m.as_str()) {
            Some(message) => message.to_string(),
            None => json.to_string(),
        },
        Err(_) => body.to_string(),
    }
}
