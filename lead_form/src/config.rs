//! Configuration for the lead-capture form.
//!
//! Loaded from TOML; every key is optional.
//!
//! ```toml
//! variant = "compact"
//! failure_notice = "hidden"
//!
//! [submission]
//! mode = "http"
//! endpoint = "https://api.gmashllc.com/leads"
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::error::ConfigError;
use crate::submit::DEFAULT_SIMULATED_DELAY;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Layout of the form card. Behavior is identical in both variants.
    pub variant: DisplayVariant,
    /// Whether a failed submission is shown to the visitor.
    pub failure_notice: FailureNotice,
    /// Which collaborator receives leads.
    pub submission: SubmissionConfig,
}

/// Visual variant supplied by the hosting page.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayVariant {
    /// Full card with a branded header.
    #[default]
    Default,
    /// Narrow card with an inline heading.
    Compact,
}

/// Visibility of submission failures.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureNotice {
    /// Transient notice above the submit button.
    #[default]
    Visible,
    /// Logged only; the visitor sees the form come back unchanged.
    Hidden,
}

/// Submission collaborator settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Collaborator kind.
    pub mode: SubmissionMode,
    /// Delay of the simulated collaborator, in milliseconds.
    pub delay_ms: u64,
    /// Backend URL, required in `http` mode.
    pub endpoint: Option<String>,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            mode: SubmissionMode::default(),
            delay_ms: DEFAULT_SIMULATED_DELAY.as_millis() as u64,
            endpoint: None,
        }
    }
}

impl SubmissionConfig {
    /// Simulated delay as a [`Duration`].
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Collaborator kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionMode {
    /// Fixed-delay placeholder, nothing leaves the browser.
    #[default]
    Simulated,
    /// POST to `endpoint`.
    Http,
}

impl FormConfig {
    /// Parse and check a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: FormConfig = toml::from_str(content)?;
        config.check()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load config from a specific path.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Whether submission failures should be shown to the visitor.
    pub fn shows_failures(&self) -> bool {
        self.failure_notice == FailureNotice::Visible
    }

    fn check(&self) -> Result<(), ConfigError> {
        let has_endpoint = self
            .submission
            .endpoint
            .as_deref()
            .is_some_and(|e| !e.trim().is_empty());
        if self.submission.mode == SubmissionMode::Http && !has_endpoint {
            return Err(ConfigError::MissingEndpoint);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.variant, DisplayVariant::Default);
        assert_eq!(config.failure_notice, FailureNotice::Visible);
        assert_eq!(config.submission.mode, SubmissionMode::Simulated);
        assert_eq!(config.submission.delay(), Duration::from_millis(1800));
        assert!(config.submission.endpoint.is_none());
        assert!(config.shows_failures());
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = FormConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = FormConfig::from_toml_str(
            r#"
variant = "compact"
failure_notice = "hidden"

[submission]
mode = "http"
delay_ms = 250
endpoint = "https://api.gmashllc.com/leads"
"#,
        )
        .expect("valid config");

        assert_eq!(config.variant, DisplayVariant::Compact);
        assert_eq!(config.failure_notice, FailureNotice::Hidden);
        assert!(!config.shows_failures());
        assert_eq!(config.submission.mode, SubmissionMode::Http);
        assert_eq!(config.submission.delay_ms, 250);
        assert_eq!(
            config.submission.endpoint.as_deref(),
            Some("https://api.gmashllc.com/leads")
        );
    }

    #[test]
    fn test_http_mode_requires_endpoint() {
        let err = FormConfig::from_toml_str("[submission]\nmode = \"http\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingEndpoint));

        let err = FormConfig::from_toml_str("[submission]\nmode = \"http\"\nendpoint = \"  \"\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingEndpoint));
    }

    #[test]
    fn test_unknown_variant_is_a_parse_error() {
        let err = FormConfig::from_toml_str("variant = \"huge\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = FormConfig::load_from_path(&temp.path().join("lead-form.toml"));
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_load_valid_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("lead-form.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(file, "variant = \"compact\"\n[submission]\ndelay_ms = 10").expect("write config");

        let config = FormConfig::load_from_path(&path);
        assert_eq!(config.variant, DisplayVariant::Compact);
        assert_eq!(config.submission.delay(), Duration::from_millis(10));
    }

    #[test]
    fn test_load_invalid_file_falls_back_to_default() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("lead-form.toml");
        std::fs::write(&path, "variant = [").expect("write config");

        let config = FormConfig::load_from_path(&path);
        assert_eq!(config, FormConfig::default());
    }
}
