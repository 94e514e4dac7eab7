//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thoughtbox_core::form::apply_outcome;
use thoughtbox_core::{SubmitError, validate};

use crate::common::{SubmitResult, TaskCompleted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::form::Focus;
use crate::features::form::update::{FieldKey, handle_field_key, handle_paste};
use crate::state::AppState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::SubmitStarted(started) => {
            app.submit_task.on_started(&started);
            vec![]
        }
        UiEvent::SubmitCompleted(completed) => handle_submit_completed(app, completed),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
            handle_key(app, key)
        }
        Event::Paste(text) => {
            if let Some(field) = app.focus.field()
                && handle_paste(app.editors.get_mut(field), &text)
            {
                app.sync_field(field);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c' | 'q') if ctrl => return quit(app),
        KeyCode::Char('s') if ctrl => return submit(app),
        KeyCode::Esc => return escape(app),
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return vec![];
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return vec![];
        }
        _ => {}
    }

    match app.focus {
        Focus::Submit => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => submit(app),
            KeyCode::Up => {
                app.focus = app.focus.prev();
                vec![]
            }
            _ => vec![],
        },
        Focus::Field(field) => {
            match handle_field_key(app.editors.get_mut(field), key) {
                FieldKey::Edited => app.sync_field(field),
                FieldKey::LeaveUp if app.focus != Focus::default() => {
                    app.focus = app.focus.prev();
                }
                FieldKey::LeaveDown => app.focus = app.focus.next(),
                FieldKey::LeaveUp | FieldKey::Moved | FieldKey::Ignored => {}
            }
            vec![]
        }
    }
}

/// Validates and starts a submission.
///
/// Ignored while one is pending. An empty field focuses it and shows a
/// message instead of emitting any effect.
fn submit(app: &mut AppState) -> Vec<UiEffect> {
    if app.is_submitting() {
        return vec![];
    }

    let complaint = app.form.complaint().clone();
    if let Err(err) = validate(&complaint) {
        tracing::debug!(missing = %err.missing, "submission blocked by validation");
        app.form = std::mem::take(&mut app.form).with_validation_error(&err);
        app.focus = Focus::Field(err.missing);
        return vec![];
    }

    app.form = std::mem::take(&mut app.form).begin_submit();
    let task = app.task_seq.next_id();
    vec![UiEffect::Submit { task, complaint }]
}

fn escape(app: &mut AppState) -> Vec<UiEffect> {
    if app.is_submitting() {
        return vec![UiEffect::CancelTask {
            token: app.submit_task.cancel.clone(),
        }];
    }
    if app.form.message().is_some() {
        app.form = std::mem::take(&mut app.form).dismiss_message();
    }
    vec![]
}

fn quit(app: &AppState) -> Vec<UiEffect> {
    let mut effects = Vec::with_capacity(2);
    if app.submit_task.is_running() {
        effects.push(UiEffect::CancelTask {
            token: app.submit_task.cancel.clone(),
        });
    }
    effects.push(UiEffect::Quit);
    effects
}

fn handle_submit_completed(
    app: &mut AppState,
    completed: TaskCompleted<SubmitResult>,
) -> Vec<UiEffect> {
    let TaskCompleted { id, result } = completed;
    if !app.submit_task.finish_if_active(id) {
        tracing::debug!(?id, "ignoring stale submission result");
        return vec![];
    }

    let form = std::mem::take(&mut app.form);
    app.form = match result {
        Ok(outcome) => {
            if outcome.is_success() {
                app.editors.clear_all();
                app.focus = Focus::default();
            }
            apply_outcome(form, &outcome)
        }
        Err(SubmitError::Validation(err)) => {
            app.focus = Focus::Field(err.missing);
            form.with_validation_error(&err)
        }
        Err(SubmitError::InFlight) => {
            tracing::warn!("collector refused a concurrent submission");
            form.release()
        }
    };
    vec![]
}
