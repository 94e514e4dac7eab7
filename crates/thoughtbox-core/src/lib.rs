//! Core Thoughtbox library (form state, submission, config).

pub mod collector;
pub mod config;
pub mod form;
pub mod logging;
pub mod outcome;
pub mod submit;

pub use collector::CollectorClient;
pub use form::{Complaint, Field, FormState, StatusMessage, Tone, ValidationError, validate};
pub use outcome::Outcome;
pub use submit::{SubmitController, SubmitError};
