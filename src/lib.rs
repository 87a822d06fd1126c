// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Presence-Tracker: attendance tracking for classes and rooms
//!
//! This crate provides the client side of the presence API: user search,
//! attendance statistics, and the REST calls that feed them.

pub mod config;
pub mod error;
pub mod models;
pub mod sample;
pub mod services;
pub mod state;
pub mod time_utils;

use config::Config;
use services::{ApiClient, ReportService};

/// Shared client state for one CLI invocation.
pub struct AppState {
    pub config: Config,
    pub api: ApiClient,
    pub reports: ReportService,
}

impl AppState {
    /// Build the API and report clients from configuration.
    pub fn new(config: Config) -> error::Result<Self> {
        let api = ApiClient::new(&config)?;
        let reports = ReportService::new(api.clone(), config.report_file_name.clone());
        Ok(Self {
            config,
            api,
            reports,
        })
    }
}
