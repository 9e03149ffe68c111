//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the API base URL is a usable http(s) URL
//! - Validate value ranges (intervals > 0, paths non-empty)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: CheckerConfig → Result<(), Vec<ValidationIssue>>

use std::fmt;

use url::Url;

use crate::config::schema::CheckerConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub fn validate_config(config: &CheckerConfig) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    match Url::parse(&config.api.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => issues.push(ValidationIssue::new(
            "api.base_url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => issues.push(ValidationIssue::new("api.base_url", e.to_string())),
    }

    if config.api.request_timeout_secs == 0 {
        issues.push(ValidationIssue::new("api.request_timeout_secs", "must be greater than 0"));
    }

    if config.scheduler.min_interval_ms == 0 {
        issues.push(ValidationIssue::new("scheduler.min_interval_ms", "must be greater than 0"));
    }

    if config.files.input_path.as_os_str().is_empty() {
        issues.push(ValidationIssue::new("files.input_path", "must not be empty"));
    }

    if config.files.output_path.as_os_str().is_empty() {
        issues.push(ValidationIssue::new("files.output_path", "must not be empty"));
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        issues.push(ValidationIssue::new(
            "observability.log_level",
            format!("unknown level '{}'", config.observability.log_level),
        ));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}
