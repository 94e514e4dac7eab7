//! Shared helpers for the TUI.

pub mod task;
pub mod text;

pub use task::{SubmitResult, TaskCompleted, TaskId, TaskSeq, TaskStarted, TaskState};
pub use text::{sanitize_paste, truncate_with_ellipsis};
