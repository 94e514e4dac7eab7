//! Submission outcomes and their user-facing messages.

use std::fmt;
use std::time::Duration;

use crate::form::Tone;

pub const SUCCESS_MESSAGE: &str = "🌈 Thought shared beautifully!";
pub const REJECTED_MESSAGE: &str = "❌ Couldn't submit, try again?";
pub const NETWORK_ERROR_MESSAGE: &str = "❌ Network error, please retry.";
pub const TIMEOUT_MESSAGE: &str = "❌ Request timed out, please retry.";
pub const CANCELLED_MESSAGE: &str = "❌ Submission cancelled.";

/// Tagged result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Collector answered with a 2xx status.
    Success { status: u16 },
    /// Collector answered, but outside the 2xx range.
    Rejected { status: u16 },
    /// No response was received.
    NetworkError { detail: String },
    /// No response within the configured bound.
    Timeout { after: Duration },
    /// The caller cancelled the request before it resolved.
    Cancelled,
}

impl Outcome {
    /// Maps an HTTP status code. The response body is never inspected.
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            Outcome::Success { status }
        } else {
            Outcome::Rejected { status }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn tone(&self) -> Tone {
        if self.is_success() {
            Tone::Success
        } else {
            Tone::Failure
        }
    }

    /// Status line text shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Success { .. } => SUCCESS_MESSAGE,
            Outcome::Rejected { .. } => REJECTED_MESSAGE,
            Outcome::NetworkError { .. } => NETWORK_ERROR_MESSAGE,
            Outcome::Timeout { .. } => TIMEOUT_MESSAGE,
            Outcome::Cancelled => CANCELLED_MESSAGE,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success { status } => write!(f, "collector accepted (HTTP {status})"),
            Outcome::Rejected { status } => write!(f, "collector rejected (HTTP {status})"),
            Outcome::NetworkError { detail } => write!(f, "network error: {detail}"),
            Outcome::Timeout { after } => {
                write!(f, "no response after {:.1}s", after.as_secs_f64())
            }
            Outcome::Cancelled => f.write_str("cancelled"),
        }
    }
}
