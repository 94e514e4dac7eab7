//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a ratatui
//! Frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use thoughtbox_core::Field;

use crate::common::text::truncate_with_ellipsis;
use crate::features::form::autogrow::max_rows_for_screen;
use crate::features::form::render::{field_height, render_field};
use crate::features::form::{Focus, HeightPresenter, style};
use crate::state::AppState;

/// Widest the form column gets on large terminals.
const MAX_CONTENT_WIDTH: u16 = 72;

/// Spinner frames for the loading button.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

const TITLE: &str = "What’s on Your Mind?";
const BUTTON_LABEL: &str = "Share Thought";
const BUTTON_LOADING_LABEL: &str = "Sharing...";

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame, presenter: &dyn HeightPresenter) {
    let area = content_area(frame.area());
    let max_rows = max_rows_for_screen(frame.area().height, app.max_field_height_percent);

    let [concern_h, cause_h, solution_h] =
        Field::ALL.map(|field| field_height(presenter, app.editors.get(field), area.width, max_rows));

    let [
        title_area,
        url_area,
        concern_area,
        cause_area,
        solution_area,
        _,
        button_area,
        message_area,
        _,
        footer_area,
    ] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(concern_h),
        Constraint::Length(cause_h),
        Constraint::Length(solution_h),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(TITLE, style::title()))).alignment(Alignment::Center),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            truncate_with_ellipsis(&app.collector_url, usize::from(url_area.width)),
            style::hint(),
        )))
        .alignment(Alignment::Center),
        url_area,
    );

    for (field, field_area) in Field::ALL
        .into_iter()
        .zip([concern_area, cause_area, solution_area])
    {
        render_field(
            frame,
            field_area,
            field,
            app.editors.get(field),
            app.focus == Focus::Field(field),
        );
    }

    render_button(app, frame, button_area);
    render_message(app, frame, message_area);
    render_footer(app, frame, footer_area);
}

/// Centers a column of at most `MAX_CONTENT_WIDTH` inside `area`.
fn content_area(area: Rect) -> Rect {
    let width = area.width.min(MAX_CONTENT_WIDTH);
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    column
}

fn render_button(app: &AppState, frame: &mut Frame, area: Rect) {
    let loading = app.is_submitting();
    let label = if loading {
        let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
        format!("  {spinner} {BUTTON_LOADING_LABEL}  ")
    } else {
        format!("  {BUTTON_LABEL}  ")
    };
    let focused = app.focus == Focus::Submit;
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            label,
            style::button(loading, focused),
        )))
        .alignment(Alignment::Center),
        area,
    );
}

fn render_message(app: &AppState, frame: &mut Frame, area: Rect) {
    let Some(message) = app.form.message() else {
        return;
    };
    let text = truncate_with_ellipsis(&message.text, usize::from(area.width));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            text,
            style::message(message.is_failure()),
        )))
        .alignment(Alignment::Center),
        area,
    );
}

fn render_footer(app: &AppState, frame: &mut Frame, area: Rect) {
    let hints = if app.is_submitting() {
        "Esc cancel · Ctrl+C quit"
    } else {
        "Tab next · Ctrl+S share · Ctrl+U clear · Ctrl+C quit"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            truncate_with_ellipsis(hints, usize::from(area.width)),
            style::hint(),
        )))
        .alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use thoughtbox_core::config::Config;
    use thoughtbox_core::ValidationError;

    use super::*;
    use crate::features::form::{AutoGrow, FixedRows};

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push_str(buf[(x, y)].symbol());
            }
            s.push('\n');
        }
        s
    }

    fn draw(app: &AppState, presenter: &dyn HeightPresenter, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render(app, frame, presenter))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_title_labels_and_button() {
        let app = AppState::new(&Config::default());
        let screen = draw(&app, &AutoGrow, 80, 30);
        assert!(screen.contains("on Your Mind?"));
        assert!(screen.contains("Troubling You?"));
        assert!(screen.contains("Behind the Storm"));
        assert!(screen.contains("A Ray of Hope"));
        assert!(screen.contains(BUTTON_LABEL));
        assert!(screen.contains("localhost:4000"));
    }

    #[test]
    fn test_loading_button_shows_spinner_label() {
        let mut app = AppState::new(&Config::default());
        app.form = std::mem::take(&mut app.form)
            .with_field(Field::Concern, "a")
            .with_field(Field::Cause, "b")
            .with_field(Field::Solution, "c")
            .begin_submit();
        let screen = draw(&app, &AutoGrow, 80, 30);
        assert!(screen.contains(BUTTON_LOADING_LABEL));
        assert!(!screen.contains(BUTTON_LABEL));
        assert!(screen.contains("Esc cancel"));
    }

    #[test]
    fn test_message_is_rendered_below_button() {
        let mut app = AppState::new(&Config::default());
        app.form = std::mem::take(&mut app.form).with_validation_error(&ValidationError {
            missing: Field::Cause,
        });
        let screen = draw(&app, &AutoGrow, 80, 30);
        assert!(screen.contains("Please fill in"));
    }

    #[test]
    fn test_typed_text_appears_in_its_field() {
        let mut app = AppState::new(&Config::default());
        app.editors.get_mut(Field::Solution).insert_str("buy earplugs");
        let screen = draw(&app, &FixedRows(1), 80, 30);
        assert!(screen.contains("buy earplugs"));
    }

    #[test]
    fn test_fits_in_narrow_terminal() {
        let app = AppState::new(&Config::default());
        let screen = draw(&app, &AutoGrow, 20, 12);
        assert_eq!(screen.lines().count(), 12);
    }
}
