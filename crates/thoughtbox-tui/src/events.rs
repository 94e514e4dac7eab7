//! UI event types fed to the reducer.

use crossterm::event::Event;

use crate::common::{SubmitResult, TaskCompleted, TaskStarted};

#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick (spinner animation, redraw cadence).
    Tick,

    /// Raw terminal input.
    Terminal(Event),

    /// The runtime spawned the submission task.
    SubmitStarted(TaskStarted),

    /// The submission task resolved.
    SubmitCompleted(TaskCompleted<SubmitResult>),
}
