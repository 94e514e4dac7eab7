//! Submission controller.
//!
//! Validates a complaint, posts it to the collector, and maps the result to
//! an [`Outcome`]. At most one request is in flight per controller: a second
//! call while the first is pending fails fast with [`SubmitError::InFlight`].
//!
//! Every request is bounded by the configured timeout and can be cancelled
//! through a `CancellationToken`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Result;
use tokio_util::sync::CancellationToken;

use crate::collector::CollectorClient;
use crate::config::CollectorConfig;
use crate::form::{Complaint, ValidationError, validate};
use crate::outcome::Outcome;

/// Reasons a submission never reached the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("a submission is already in flight")]
    InFlight,
}

/// Sends complaints to the collector, one at a time.
#[derive(Debug)]
pub struct SubmitController {
    client: CollectorClient,
    timeout: Option<Duration>,
    in_flight: AtomicBool,
}

impl SubmitController {
    pub fn new(client: CollectorClient, timeout: Option<Duration>) -> Self {
        Self {
            client,
            timeout,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Builds a controller from collector config.
    ///
    /// # Errors
    /// Returns an error if the configured URL is invalid.
    pub fn from_config(config: &CollectorConfig) -> Result<Self> {
        Ok(Self::new(
            CollectorClient::from_config(config)?,
            config.timeout(),
        ))
    }

    pub fn client(&self) -> &CollectorClient {
        &self.client
    }

    /// True while a request is pending.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submits one complaint.
    ///
    /// Transport failures, timeouts and cancellation are reported as
    /// `Ok(Outcome)`; only requests that never started are `Err`.
    ///
    /// # Errors
    /// - `SubmitError::Validation` if a field is empty (no request is sent).
    /// - `SubmitError::InFlight` if another submission is pending.
    pub async fn submit(
        &self,
        complaint: &Complaint,
        cancel: CancellationToken,
    ) -> Result<Outcome, SubmitError> {
        validate(complaint)?;
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(SubmitError::InFlight)?;

        tracing::info!(url = %self.client.url(), "submitting complaint");
        let outcome = tokio::select! {
            biased;
            () = cancel.cancelled() => Outcome::Cancelled,
            outcome = self.send_bounded(complaint) => outcome,
        };

        if outcome.is_success() {
            tracing::info!(%outcome, "submission finished");
        } else {
            tracing::warn!(%outcome, "submission failed");
        }
        Ok(outcome)
    }

    async fn send_bounded(&self, complaint: &Complaint) -> Outcome {
        let request = self.client.post(complaint);
        let result = match self.timeout {
            Some(after) => match tokio::time::timeout(after, request).await {
                Ok(result) => result,
                Err(_elapsed) => return Outcome::Timeout { after },
            },
            None => request.await,
        };

        match result {
            Ok(status) => Outcome::from_status(status.as_u16()),
            Err(err) => Outcome::NetworkError {
                detail: err.to_string(),
            },
        }
    }
}

/// Holds the in-flight flag; clears it on drop so every exit path releases it.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
