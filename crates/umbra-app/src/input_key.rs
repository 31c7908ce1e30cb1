//! Abstract input key event, independent of terminal library.
//!
//! Converted from crossterm events at the TUI boundary so the update logic
//! and its tests never touch terminal types.

/// A single key press as seen by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (letters, digits, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+s, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// Ctrl+C always force-quits, whatever has focus
    pub fn is_force_quit(self) -> bool {
        self == InputKey::CharCtrl('c')
    }
}
