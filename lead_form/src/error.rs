//! Error types for the lead-capture form.

use thiserror::Error;

use crate::schema::FieldErrors;

/// Failure reported by a submission collaborator.
///
/// Carries a diagnostic meant for logs; the page decides whether to show it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The request never reached the backend (DNS, TLS, offline, CORS...).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("backend rejected lead with status {status}: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// Anything else a collaborator wants to report.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        SubmissionError::Transport(err.to_string())
    }
}

/// Why a submit attempt did not leave the editing state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    /// One or more fields violate the schema.
    #[error("lead request is invalid: {0}")]
    Invalid(FieldErrors),

    /// A submission is already in flight.
    #[error("a submission is already in progress")]
    InFlight,

    /// The confirmation view is showing; "submit another" must come first.
    #[error("request was already submitted")]
    AlreadySubmitted,
}

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML is malformed or has unknown values.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// `mode = "http"` without an `endpoint`.
    #[error("submission mode \"http\" requires an endpoint")]
    MissingEndpoint,
}
