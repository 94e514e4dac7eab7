//! Submission form slice: field editing, sizing, and field rendering.

pub mod autogrow;
pub mod render;
pub mod state;
pub mod style;
mod text_buffer;
pub mod update;

pub use autogrow::{AutoGrow, FixedRows, HeightPresenter};
pub use state::{FieldEditors, Focus};
pub use text_buffer::{CursorMove, TextBuffer};
