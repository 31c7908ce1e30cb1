//! Color palette: near-black glass panels, gray borders, white accent.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(10, 10, 12);
pub const CARD_BG: Color = Color::Rgb(17, 24, 39);
pub const POPUP_BG: Color = Color::Rgb(31, 41, 55);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(55, 65, 81);
pub const BORDER_ACTIVE: Color = Color::Rgb(209, 213, 219);

// --- Accent ---
pub const ACCENT: Color = Color::White;

/// Foreground on an `ACCENT` background
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(209, 213, 219);
pub const TEXT_SECONDARY: Color = Color::Rgb(156, 163, 175);
pub const TEXT_MUTED: Color = Color::Rgb(107, 114, 128);
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(74, 222, 128);
pub const STATUS_RED: Color = Color::Rgb(248, 113, 113);
pub const STATUS_YELLOW: Color = Color::Rgb(250, 204, 21);

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(5, 5, 6);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_contrasts_with_foreground() {
        assert_ne!(ACCENT, CONTRAST_FG);
    }

    #[test]
    fn test_popup_is_lighter_than_cards() {
        match (CARD_BG, POPUP_BG) {
            (Color::Rgb(cr, _, _), Color::Rgb(pr, _, _)) => assert!(pr > cr),
            _ => panic!("backgrounds should be RGB"),
        }
    }
}
