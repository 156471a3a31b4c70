//! Configuration management for the approval console

use crate::error::{HitlError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitlConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub reviewer: ReviewerConfig,
}

/// Backend endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Reviewer identity attached to every decision
///
/// There is no authentication; this is a display label only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewerConfig {
    #[serde(default = "default_reviewer_name")]
    pub display_name: String,
}

fn default_base_url() -> String {
    "https://human-looping-backend.onrender.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_reviewer_name() -> String {
    "Human Reviewer".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ReviewerConfig {
    fn default() -> Self {
        Self {
            display_name: default_reviewer_name(),
        }
    }
}

impl Default for HitlConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            reviewer: ReviewerConfig::default(),
        }
    }
}

impl HitlConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| HitlError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_json_str(&content)
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: HitlConfig = serde_json::from_str(json)
            .map_err(|e| HitlError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.is_empty() {
            return Err(HitlError::Config("API base URL is required".to_string()));
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(HitlError::Config(format!(
                "API base URL must be an http(s) URL, got '{}'",
                self.api.base_url
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(HitlError::Config(
                "API timeout must be at least 1 second".to_string(),
            ));
        }

        if self.reviewer.display_name.trim().is_empty() {
            return Err(HitlError::Config(
                "Reviewer display name must not be blank".to_string(),
            ));
        }

        Ok(())
    }

    /// Base URL with any trailing slash stripped, ready for path joining
    pub fn api_root(&self) -> String {
        self.api.base_url.trim_end_matches('/').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HitlConfig::default();
        assert_eq!(
            config.api.base_url,
            "https://human-looping-backend.onrender.com"
        );
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.reviewer.display_name, "Human Reviewer");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_falls_back_to_defaults() {
        let config = HitlConfig::from_json_str("{}").unwrap();
        assert_eq!(config.reviewer.display_name, "Human Reviewer");
    }

    #[test]
    fn test_partial_override() {
        let config = HitlConfig::from_json_str(
            r#"{"api": {"base_url": "http://localhost:5000"}, "reviewer": {"display_name": "QA Lead"}}"#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.reviewer.display_name, "QA Lead");
    }

    #[test]
    fn test_rejects_non_http_url() {
        let result = HitlConfig::from_json_str(r#"{"api": {"base_url": "ftp://nope"}}"#);
        assert!(matches!(result, Err(HitlError::Config(_))));
    }

    #[test]
    fn test_api_root_strips_trailing_slash() {
        let config =
            HitlConfig::from_json_str(r#"{"api": {"base_url": "http://localhost:5000/"}}"#)
                .unwrap();
        assert_eq!(config.api_root(), "http://localhost:5000");
    }
}
