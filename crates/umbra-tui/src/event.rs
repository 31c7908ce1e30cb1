//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Duration;
use umbra_app::{InputKey, Message};
use umbra_core::prelude::*;

/// Poll interval; a timeout yields `Message::Tick`
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        KeyCode::F(n) => Some(InputKey::F(n)),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn convert(code: KeyCode, modifiers: KeyModifiers) -> Option<InputKey> {
        key_event_to_input(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_char_conversion() {
        assert_eq!(
            convert(KeyCode::Char('a'), KeyModifiers::NONE),
            Some(InputKey::Char('a'))
        );
    }

    #[test]
    fn test_accented_char_conversion() {
        assert_eq!(
            convert(KeyCode::Char('ñ'), KeyModifiers::NONE),
            Some(InputKey::Char('ñ'))
        );
    }

    #[test]
    fn test_ctrl_c_is_force_quit() {
        let input = convert(KeyCode::Char('c'), KeyModifiers::CONTROL).unwrap();
        assert_eq!(input, InputKey::CharCtrl('c'));
        assert!(input.is_force_quit());
    }

    #[test]
    fn test_ctrl_s_conversion() {
        assert_eq!(
            convert(KeyCode::Char('s'), KeyModifiers::CONTROL),
            Some(InputKey::CharCtrl('s'))
        );
    }

    #[test]
    fn test_form_navigation_keys() {
        assert_eq!(
            convert(KeyCode::Tab, KeyModifiers::NONE),
            Some(InputKey::Tab)
        );
        assert_eq!(
            convert(KeyCode::Tab, KeyModifiers::SHIFT),
            Some(InputKey::BackTab)
        );
        assert_eq!(
            convert(KeyCode::BackTab, KeyModifiers::SHIFT),
            Some(InputKey::BackTab)
        );
        assert_eq!(
            convert(KeyCode::Enter, KeyModifiers::NONE),
            Some(InputKey::Enter)
        );
        assert_eq!(
            convert(KeyCode::Backspace, KeyModifiers::NONE),
            Some(InputKey::Backspace)
        );
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(convert(KeyCode::Up, KeyModifiers::NONE), Some(InputKey::Up));
        assert_eq!(
            convert(KeyCode::Down, KeyModifiers::NONE),
            Some(InputKey::Down)
        );
        assert_eq!(
            convert(KeyCode::Left, KeyModifiers::NONE),
            Some(InputKey::Left)
        );
        assert_eq!(
            convert(KeyCode::Right, KeyModifiers::NONE),
            Some(InputKey::Right)
        );
    }

    #[test]
    fn test_function_keys_for_quick_topics() {
        assert_eq!(
            convert(KeyCode::F(1), KeyModifiers::NONE),
            Some(InputKey::F(1))
        );
        assert_eq!(
            convert(KeyCode::F(6), KeyModifiers::NONE),
            Some(InputKey::F(6))
        );
    }

    #[test]
    fn test_unsupported_key_returns_none() {
        assert_eq!(convert(KeyCode::Insert, KeyModifiers::NONE), None);
    }
}
