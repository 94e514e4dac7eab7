//! Form palette.
//!
//! Indigo for structure, coral for the call to action and success, red for
//! failures.

use ratatui::style::{Color, Modifier, Style};

pub const INDIGO_300: Color = Color::Rgb(165, 180, 252);
pub const INDIGO_400: Color = Color::Rgb(129, 140, 248);
pub const CORAL_300: Color = Color::Rgb(255, 138, 138);
pub const CORAL_400: Color = Color::Rgb(255, 135, 135);
pub const CORAL_500: Color = Color::Rgb(255, 107, 107);
pub const RED_600: Color = Color::Rgb(220, 38, 38);

pub fn title() -> Style {
    Style::default().fg(INDIGO_400).add_modifier(Modifier::BOLD)
}

pub fn label() -> Style {
    Style::default().fg(INDIGO_300).add_modifier(Modifier::BOLD)
}

pub fn placeholder() -> Style {
    Style::default().fg(INDIGO_400).add_modifier(Modifier::DIM)
}

pub fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(CORAL_400).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(INDIGO_300)
    }
}

pub fn button(loading: bool, focused: bool) -> Style {
    let base = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    match (loading, focused) {
        (true, _) => base.bg(CORAL_300).add_modifier(Modifier::DIM),
        (false, true) => base.bg(CORAL_500).add_modifier(Modifier::REVERSED),
        (false, false) => base.bg(CORAL_500),
    }
}

pub fn message(failure: bool) -> Style {
    let color = if failure { RED_600 } else { CORAL_500 };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn hint() -> Style {
    Style::default().fg(Color::DarkGray)
}
