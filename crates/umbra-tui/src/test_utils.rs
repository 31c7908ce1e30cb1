//! Test utilities for TUI rendering verification
//!
//! Widgets and full frames are rendered into ratatui's TestBackend and
//! checked by searching the resulting buffer text.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;
use unicode_width::UnicodeWidthStr;
use umbra_app::{AppState, FormState};
use umbra_core::{ConsultationRecord, FormField};

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 100;
pub const TEST_HEIGHT: u16 = 40;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (100x40)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. `term.draw_with(|f| view(f, &state))`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        // A wide glyph is followed by continuation cells; skip them so the
        // text reads as it appears on screen.
        let mut skip = 0;
        for x in 0..buffer.area.width {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let symbol = buffer[(x, line)].symbol();
            result.push_str(symbol);
            skip = UnicodeWidthStr::width(symbol).saturating_sub(1);
        }
    }
    result
}

/// A consultation with every required field filled in
pub fn sample_record() -> ConsultationRecord {
    ConsultationRecord::new()
        .with(FormField::Address, "Calle 10 # 5-20")
        .with(FormField::PropertyType, "Apartamento")
        .with(FormField::Area, "85")
        .with(FormField::OperationType, "Compraventa")
        .with(FormField::Price, "350000000")
        .with(FormField::Seller, "Ana Pérez")
        .with(FormField::Buyer, "Luis Gómez")
        .with(FormField::Email, "luis@correo.co")
        .with(FormField::Country, "Colombia")
        .with(FormField::Notes, "Revisar servidumbres")
}

pub fn create_test_state() -> AppState {
    AppState::new()
}

/// State with a form ready to submit
pub fn create_filled_form_state() -> AppState {
    let mut state = create_test_state();
    state.form = FormState::new();
    state.form.record = sample_record();
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hola UMBRA"), term.area());

        assert!(term.buffer_contains("Hola UMBRA"));
        assert!(!term.buffer_contains("Adiós"));
    }

    #[test]
    fn test_line_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hola\nMundo"), term.area());

        assert!(term.line_contains(0, "Hola"));
        assert!(term.line_contains(1, "Mundo"));
        assert!(!term.line_contains(0, "Mundo"));
    }

    #[test]
    fn test_sample_record_is_valid() {
        assert!(umbra_core::validate(&sample_record()).is_ok());
    }
}
