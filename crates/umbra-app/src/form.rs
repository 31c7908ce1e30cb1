//! Consultation form editing state

use umbra_core::{ConsultationRecord, FieldKind, FormField};

/// Number of focus stops: every field plus the submit button
pub const FOCUS_STOPS: usize = FormField::ALL.len() + 1;

/// Focus index of the submit button
pub const SUBMIT_INDEX: usize = FormField::ALL.len();

/// The form as it is being filled in
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub record: ConsultationRecord,

    /// Index into [`FormField::ALL`], or [`SUBMIT_INDEX`]
    pub focused: usize,

    /// A submission is in flight; the submit control is disabled
    pub submitting: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field under the cursor, `None` when the submit button has focus
    pub fn focused_field(&self) -> Option<FormField> {
        FormField::ALL.get(self.focused).copied()
    }

    pub fn submit_focused(&self) -> bool {
        self.focused == SUBMIT_INDEX
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % FOCUS_STOPS;
    }

    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + FOCUS_STOPS - 1) % FOCUS_STOPS;
    }

    pub fn focus_submit(&mut self) {
        self.focused = SUBMIT_INDEX;
    }

    /// Type a character into the focused field.
    ///
    /// Numeric fields keep digits and one decimal separator; select fields
    /// ignore typing.
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.focused_field() else {
            return;
        };

        match field.kind() {
            FieldKind::Text | FieldKind::Multiline => self.record.get_mut(field).push(c),
            FieldKind::Numeric => {
                let value = self.record.get_mut(field);
                if c.is_ascii_digit() || (c == '.' && !value.contains('.')) {
                    value.push(c);
                }
            }
            FieldKind::Select(_) => {}
        }
    }

    /// Start a new line in a multiline field
    pub fn insert_newline(&mut self) {
        if let Some(field) = self.focused_field() {
            if field.kind() == FieldKind::Multiline {
                self.record.get_mut(field).push('\n');
            }
        }
    }

    /// Delete the last character, or clear a select field
    pub fn backspace(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };

        match field.kind() {
            FieldKind::Select(_) => self.record.get_mut(field).clear(),
            _ => {
                self.record.get_mut(field).pop();
            }
        }
    }

    /// Step a select field through "nothing selected" and its options
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let FieldKind::Select(options) = field.kind() else {
            return;
        };

        // Position 0 is the empty selection, options follow from 1
        let slots = options.len() + 1;
        let current = options
            .iter()
            .position(|o| *o == self.record.get(field))
            .map(|i| i + 1)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };

        let value = if next == 0 { "" } else { options[next - 1] };
        self.record.set(field, value);
    }

    /// Clear every field and return focus to the first one
    pub fn reset(&mut self) {
        self.record = ConsultationRecord::default();
        self.focused = 0;
        self.submitting = false;
    }
}
