//! Submission collaborators.
//!
//! A collaborator receives an already validated [`LeadRequest`] and reports
//! exactly one outcome per call. Futures are not required to be `Send`: in
//! the browser they run on the single-threaded event loop.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::{SubmissionConfig, SubmissionMode};
use crate::error::{ConfigError, SubmissionError};
use crate::request::LeadRequest;

/// Latency the simulated collaborator models when none is configured.
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(1800);

/// Anything that can durably record or route a lead.
pub trait LeadSubmitter {
    /// Forward `request`; `Ok(())` once the lead is accepted.
    fn submit(&self, request: &LeadRequest) -> impl Future<Output = Result<(), SubmissionError>>;
}

/// Stand-in collaborator: waits a fixed delay, logs the lead, succeeds.
///
/// The sleep function is injected so the same type works on a browser timer
/// (`gloo_timers::future::sleep`) and under a test runtime
/// (`tokio::time::sleep`).
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter<S> {
    delay: Duration,
    sleep: S,
}

impl<S> SimulatedSubmitter<S> {
    /// Simulated collaborator with the default delay.
    pub fn new(sleep: S) -> Self {
        Self::with_delay(DEFAULT_SIMULATED_DELAY, sleep)
    }

    /// Simulated collaborator with a custom delay.
    pub fn with_delay(delay: Duration, sleep: S) -> Self {
        Self { delay, sleep }
    }

    /// Configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<S, F> LeadSubmitter for SimulatedSubmitter<S>
where
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
{
    async fn submit(&self, request: &LeadRequest) -> Result<(), SubmissionError> {
        debug!(delay_ms = self.delay.as_millis() as u64, "simulated submission started");
        (self.sleep)(self.delay).await;
        info!(lead = ?request, "consultation request received (simulated)");
        Ok(())
    }
}

/// Posts the lead as JSON to a backend endpoint.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmitter {
    /// Collaborator posting to `endpoint` with a default client.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Collaborator reusing an existing client.
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Target URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl LeadSubmitter for HttpSubmitter {
    async fn submit(&self, request: &LeadRequest) -> Result<(), SubmissionError> {
        debug!(endpoint = %self.endpoint, "posting lead");
        let response = self.client.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        if status.is_success() {
            info!(status = status.as_u16(), "lead accepted by backend");
            return Ok(());
        }
        // body is diagnostic only; a failed read leaves it empty
        let body = response.text().await.unwrap_or_default();
        Err(SubmissionError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

/// Collaborator chosen at runtime from [`SubmissionConfig`].
#[derive(Debug, Clone)]
pub enum SubmitterKind<S> {
    /// Fixed-delay placeholder.
    Simulated(SimulatedSubmitter<S>),
    /// Real backend.
    Http(HttpSubmitter),
}

impl<S> SubmitterKind<S> {
    /// Build the configured collaborator. `sleep` is only used in simulated mode.
    pub fn from_config(config: &SubmissionConfig, sleep: S) -> Result<Self, ConfigError> {
        match config.mode {
            SubmissionMode::Simulated => Ok(SubmitterKind::Simulated(
                SimulatedSubmitter::with_delay(config.delay(), sleep),
            )),
            SubmissionMode::Http => {
                let endpoint = config
                    .endpoint
                    .as_deref()
                    .filter(|e| !e.trim().is_empty())
                    .ok_or(ConfigError::MissingEndpoint)?;
                Ok(SubmitterKind::Http(HttpSubmitter::new(endpoint)))
            }
        }
    }
}

impl<S, F> LeadSubmitter for SubmitterKind<S>
where
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
{
    async fn submit(&self, request: &LeadRequest) -> Result<(), SubmissionError> {
        match self {
            SubmitterKind::Simulated(simulated) => simulated.submit(request).await,
            SubmitterKind::Http(http) => http.submit(request).await,
        }
    }
}
