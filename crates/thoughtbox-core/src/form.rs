//! Form state for a single submission session.
//!
//! `FormState` is an immutable-update container: every transition consumes the
//! previous state and returns the next one. The UI reducer owns the only
//! instance and swaps it on each keystroke and each submission outcome.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// One of the three required text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Concern,
    Cause,
    Solution,
}

impl Field {
    /// All fields in display (and validation) order.
    pub const ALL: [Field; 3] = [Field::Concern, Field::Cause, Field::Solution];

    /// JSON key used in the request body.
    pub fn key(self) -> &'static str {
        match self {
            Field::Concern => "concern",
            Field::Cause => "cause",
            Field::Solution => "solution",
        }
    }

    /// Label shown above the text area.
    pub fn label(self) -> &'static str {
        match self {
            Field::Concern => "🌧️ What’s Troubling You?",
            Field::Cause => "🌊 Behind the Storm",
            Field::Solution => "🌈 A Ray of Hope",
        }
    }

    /// Placeholder shown while the field is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Concern => "Describe your concern...",
            Field::Cause => "Describe the cause...",
            Field::Solution => "Your suggested fix...",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The payload posted to the collector.
///
/// Serializes to exactly `{"concern": .., "cause": .., "solution": ..}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    pub concern: String,
    pub cause: String,
    pub solution: String,
}

impl Complaint {
    pub fn new(
        concern: impl Into<String>,
        cause: impl Into<String>,
        solution: impl Into<String>,
    ) -> Self {
        Self {
            concern: concern.into(),
            cause: cause.into(),
            solution: solution.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Concern => &self.concern,
            Field::Cause => &self.cause,
            Field::Solution => &self.solution,
        }
    }

    /// Returns a copy with one field replaced.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        let slot = match field {
            Field::Concern => &mut self.concern,
            Field::Cause => &mut self.cause,
            Field::Solution => &mut self.solution,
        };
        *slot = value.into();
        self
    }

    /// True when all three fields are empty.
    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// A required field was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("required field `{missing}` is empty")]
pub struct ValidationError {
    /// First empty field, in display order.
    pub missing: Field,
}

/// Checks that every field is non-empty.
///
/// Mirrors HTML `required`: only the empty string is missing, whitespace counts
/// as content.
///
/// # Errors
/// Returns the first empty field in display order.
pub fn validate(complaint: &Complaint) -> Result<(), ValidationError> {
    match Field::ALL
        .into_iter()
        .find(|field| complaint.get(*field).is_empty())
    {
        Some(missing) => Err(ValidationError { missing }),
        None => Ok(()),
    }
}

/// Whether a status message reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
}

/// Ephemeral feedback shown under the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub tone: Tone,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            text: text.into(),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Failure,
            text: text.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.tone == Tone::Failure
    }
}

/// The three fields plus transient `loading` and `message` status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    complaint: Complaint,
    loading: bool,
    message: Option<StatusMessage>,
}

impl FormState {
    /// Empty form, as created on mount.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn complaint(&self) -> &Complaint {
        &self.complaint
    }

    pub fn field(&self, field: Field) -> &str {
        self.complaint.get(field)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    /// Replaces one field. The current message stays visible while typing.
    #[must_use]
    pub fn with_field(self, field: Field, value: impl Into<String>) -> Self {
        Self {
            complaint: self.complaint.with(field, value),
            ..self
        }
    }

    /// Marks a submission as started and clears the previous message.
    #[must_use]
    pub fn begin_submit(self) -> Self {
        Self {
            loading: true,
            message: None,
            ..self
        }
    }

    /// Surfaces a validation failure. Fields are untouched.
    #[must_use]
    pub fn with_validation_error(self, err: &ValidationError) -> Self {
        Self {
            loading: false,
            message: Some(StatusMessage::failure(format!(
                "❌ Please fill in: {}",
                err.missing.label()
            ))),
            ..self
        }
    }

    /// Releases `loading` without producing a message.
    #[must_use]
    pub fn release(self) -> Self {
        Self {
            loading: false,
            ..self
        }
    }

    /// Drops the current message.
    #[must_use]
    pub fn dismiss_message(self) -> Self {
        Self {
            message: None,
            ..self
        }
    }
}

/// Reducer for a finished submission.
///
/// `loading` is always released. Fields reset only on success; every other
/// outcome keeps the input so the user can resubmit.
pub fn apply_outcome(state: FormState, outcome: &Outcome) -> FormState {
    let message = StatusMessage {
        tone: outcome.tone(),
        text: outcome.message().to_string(),
    };
    let complaint = if outcome.is_success() {
        Complaint::default()
    } else {
        state.complaint
    };
    FormState {
        complaint,
        loading: false,
        message: Some(message),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::outcome::{
        CANCELLED_MESSAGE, NETWORK_ERROR_MESSAGE, REJECTED_MESSAGE, SUCCESS_MESSAGE,
        TIMEOUT_MESSAGE,
    };

    fn filled() -> FormState {
        FormState::new()
            .with_field(Field::Concern, "noise")
            .with_field(Field::Cause, "construction")
            .with_field(Field::Solution, "earplugs")
    }

    #[test]
    fn test_complaint_serializes_with_exact_keys() {
        let complaint = Complaint::new("a", "b", "c");
        let value = serde_json::to_value(&complaint).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"concern": "a", "cause": "b", "solution": "c"})
        );
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let cases = [
            (Complaint::new("", "x", "y"), Field::Concern),
            (Complaint::new("x", "", "y"), Field::Cause),
            (Complaint::new("x", "y", ""), Field::Solution),
            (Complaint::new("", "", ""), Field::Concern),
        ];
        for (complaint, missing) in cases {
            assert_eq!(validate(&complaint), Err(ValidationError { missing }));
        }
    }

    #[test]
    fn test_validate_accepts_whitespace_content() {
        assert!(validate(&Complaint::new(" ", "\n", "\t")).is_ok());
    }

    #[test]
    fn test_begin_submit_sets_loading_and_clears_message() {
        let state = filled()
            .with_validation_error(&ValidationError {
                missing: Field::Cause,
            })
            .begin_submit();
        assert!(state.is_loading());
        assert!(state.message().is_none());
        assert_eq!(state.field(Field::Concern), "noise");
    }

    #[test]
    fn test_apply_success_resets_fields() {
        let state = apply_outcome(filled().begin_submit(), &Outcome::Success { status: 200 });
        assert!(!state.is_loading());
        assert!(state.complaint().is_blank());
        let message = state.message().unwrap();
        assert_eq!(message.text, SUCCESS_MESSAGE);
        assert_eq!(message.tone, Tone::Success);
    }

    #[test]
    fn test_apply_failures_keep_fields() {
        let outcomes = [
            (Outcome::Rejected { status: 500 }, REJECTED_MESSAGE),
            (
                Outcome::NetworkError {
                    detail: "connection refused".to_string(),
                },
                NETWORK_ERROR_MESSAGE,
            ),
            (
                Outcome::Timeout {
                    after: Duration::from_secs(1),
                },
                TIMEOUT_MESSAGE,
            ),
            (Outcome::Cancelled, CANCELLED_MESSAGE),
        ];
        for (outcome, expected) in outcomes {
            let before = filled();
            let state = apply_outcome(before.clone().begin_submit(), &outcome);
            assert!(!state.is_loading());
            assert_eq!(state.complaint(), before.complaint());
            let message = state.message().unwrap();
            assert_eq!(message.text, expected);
            assert!(message.is_failure());
        }
    }

    #[test]
    fn test_typing_keeps_message_visible() {
        let state = apply_outcome(filled().begin_submit(), &Outcome::Success { status: 200 })
            .with_field(Field::Concern, "again");
        assert_eq!(state.message().unwrap().text, SUCCESS_MESSAGE);
        assert_eq!(state.field(Field::Concern), "again");
    }

    #[test]
    fn test_validation_error_names_field_label() {
        let state = FormState::new().with_validation_error(&ValidationError {
            missing: Field::Solution,
        });
        let message = state.message().unwrap();
        assert!(message.is_failure());
        assert!(message.text.contains("A Ray of Hope"));
    }
}
