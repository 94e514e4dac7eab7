//! Editing state for the three form fields.

use thoughtbox_core::Field;

use super::TextBuffer;

/// Which control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Submit,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(Field::Concern)
    }
}

impl Focus {
    /// Focus ring order: fields top to bottom, then the button.
    const RING: [Focus; 4] = [
        Focus::Field(Field::Concern),
        Focus::Field(Field::Cause),
        Focus::Field(Field::Solution),
        Focus::Submit,
    ];

    fn position(self) -> usize {
        Self::RING
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::RING[(self.position() + 1) % Self::RING.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::RING[(self.position() + Self::RING.len() - 1) % Self::RING.len()]
    }

    pub fn field(self) -> Option<Field> {
        match self {
            Focus::Field(field) => Some(field),
            Focus::Submit => None,
        }
    }
}

/// One text buffer per field.
#[derive(Debug, Clone, Default)]
pub struct FieldEditors {
    concern: TextBuffer,
    cause: TextBuffer,
    solution: TextBuffer,
}

impl FieldEditors {
    pub fn get(&self, field: Field) -> &TextBuffer {
        match field {
            Field::Concern => &self.concern,
            Field::Cause => &self.cause,
            Field::Solution => &self.solution,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut TextBuffer {
        match field {
            Field::Concern => &mut self.concern,
            Field::Cause => &mut self.cause,
            Field::Solution => &mut self.solution,
        }
    }

    pub fn clear_all(&mut self) {
        for field in Field::ALL {
            self.get_mut(field).clear();
        }
    }
}
