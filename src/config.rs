//! Client configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is read first if present.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::models::stats::StatsSettings;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Remote API ---
    /// Base URL of the presence API (no trailing slash)
    pub api_base_url: String,
    /// Per-request timeout
    pub api_timeout: Duration,

    // --- Statistics ---
    /// Classes in the reference period used for the average
    pub total_classes: u32,
    /// Classes in a month
    pub monthly_classes: u32,
    /// Classes in a year
    pub annual_classes: u32,
    /// How many top students to show
    pub top_n: usize,

    // --- Reports ---
    /// File name the PDF report is saved under
    pub report_file_name: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000/api".to_string(),
            api_timeout: Duration::from_secs(10),
            total_classes: 100,
            monthly_classes: 100,
            annual_classes: 240,
            top_n: 3,
            report_file_name: "attendance-report.pdf".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional; malformed numbers are rejected rather
    /// than silently replaced.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let total_classes = parse_var("PRESENCE_TOTAL_CLASSES", 100)?;

        Ok(Self {
            api_base_url: env::var("PRESENCE_API_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "http://localhost:3000/api".to_string()),
            api_timeout: Duration::from_secs(parse_var("PRESENCE_API_TIMEOUT_SECS", 10)?),
            total_classes,
            monthly_classes: parse_var("PRESENCE_MONTHLY_CLASSES", total_classes)?,
            annual_classes: parse_var("PRESENCE_ANNUAL_CLASSES", 240)?,
            top_n: parse_var("PRESENCE_TOP_N", 3)?,
            report_file_name: env::var("PRESENCE_REPORT_FILE")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|_| "attendance-report.pdf".to_string()),
        })
    }

    /// Aggregation settings derived from this config.
    pub fn stats_settings(&self) -> StatsSettings {
        StatsSettings {
            total_classes: self.total_classes,
            monthly_classes: self.monthly_classes,
            annual_classes: self.annual_classes,
            top_n: self.top_n,
        }
    }
}

/// Read a numeric variable, falling back to `default` when unset.
fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both cases share process-wide env vars, so they run in one test.
    #[test]
    fn test_config_from_env() {
        env::set_var("PRESENCE_API_URL", "http://10.0.0.2:3000/api/");
        env::set_var("PRESENCE_TOTAL_CLASSES", "80");
        env::remove_var("PRESENCE_MONTHLY_CLASSES");
        env::remove_var("PRESENCE_ANNUAL_CLASSES");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.api_base_url, "http://10.0.0.2:3000/api");
        assert_eq!(config.total_classes, 80);
        assert_eq!(config.monthly_classes, 80);
        assert_eq!(config.annual_classes, 240);
        assert_eq!(config.api_timeout, Duration::from_secs(10));

        env::set_var("PRESENCE_TOP_N", "three");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PRESENCE_TOP_N", .. }));

        env::remove_var("PRESENCE_TOP_N");
        env::remove_var("PRESENCE_API_URL");
        env::remove_var("PRESENCE_TOTAL_CLASSES");
    }
}
