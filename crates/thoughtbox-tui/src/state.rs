//! TUI application state.
//!
//! `AppState` is owned by the runtime and mutated only by the reducer.
//! The form's text lives in two places that are kept in sync: the editors
//! (buffers with cursors) and the immutable `FormState` the submission flow
//! reads from.

use thoughtbox_core::config::Config;
use thoughtbox_core::{Field, FormState};

use crate::common::{TaskSeq, TaskState};
use crate::features::form::{FieldEditors, Focus};

pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Fields plus `loading` and `message`.
    pub form: FormState,
    /// Editable buffers, one per field.
    pub editors: FieldEditors,
    /// Control with keyboard focus.
    pub focus: Focus,
    /// The single submission task slot.
    pub submit_task: TaskState,
    /// Task id sequence.
    pub task_seq: TaskSeq,
    /// Collector URL shown in the footer.
    pub collector_url: String,
    /// Tallest a field may grow, as a percentage of terminal height.
    pub max_field_height_percent: u16,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            form: FormState::new(),
            editors: FieldEditors::default(),
            focus: Focus::default(),
            submit_task: TaskState::default(),
            task_seq: TaskSeq::default(),
            collector_url: config.collector.url.clone(),
            max_field_height_percent: config.ui.max_field_height_percent,
            spinner_frame: 0,
        }
    }

    /// Copies the editor content for `field` into the form state.
    pub fn sync_field(&mut self, field: Field) {
        let text = self.editors.get(field).text();
        self.form = std::mem::take(&mut self.form).with_field(field, text);
    }

    /// True while a submission is pending; the submit control is disabled.
    pub fn is_submitting(&self) -> bool {
        self.form.is_loading() || self.submit_task.is_running()
    }
}
