//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use umbra_app::WebhookStatus;
use umbra_core::HistoryStatus;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright() -> Style {
    Style::default().fg(palette::TEXT_BRIGHT)
}

/// Section headings ("PANEL DE CONTROL", "INFORME LEGAL", ...)
pub fn heading() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Selection styles ---

/// Black on white: focused row or control
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Highlighted row while its pane does not have focus
pub fn unfocused_selected() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .bg(palette::POPUP_BG)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(heading())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Status indicator mapping ---

/// `(icon, label, style)` for the webhook probe result shown in the status bar
pub fn webhook_indicator(status: &WebhookStatus) -> (&'static str, &'static str, Style) {
    match status {
        WebhookStatus::Unknown => ("○", "Webhook sin verificar", text_muted()),
        WebhookStatus::Reachable { .. } => (
            "●",
            "Webhook disponible",
            status_green().add_modifier(Modifier::BOLD),
        ),
        WebhookStatus::Unreachable { .. } => ("✗", "Webhook no disponible", status_red()),
    }
}

pub fn history_status(status: HistoryStatus) -> Style {
    match status {
        HistoryStatus::Completed => status_green(),
        HistoryStatus::InReview => status_yellow(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
        assert_eq!(text_bright().fg, Some(palette::TEXT_BRIGHT));
    }

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BORDER_ACTIVE));
    }

    #[test]
    fn test_focused_selected_is_black_on_white() {
        let style = focused_selected();
        assert_eq!(style.fg, Some(palette::CONTRAST_FG));
        assert_eq!(style.bg, Some(palette::ACCENT));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_webhook_indicator_states() {
        let (icon, label, style) = webhook_indicator(&WebhookStatus::Reachable { status: 204 });
        assert_eq!(icon, "●");
        assert_eq!(label, "Webhook disponible");
        assert_eq!(style.fg, Some(palette::STATUS_GREEN));

        let (icon, _, style) = webhook_indicator(&WebhookStatus::Unreachable {
            reason: "refused".into(),
        });
        assert_eq!(icon, "✗");
        assert_eq!(style.fg, Some(palette::STATUS_RED));

        let (icon, _, _) = webhook_indicator(&WebhookStatus::Unknown);
        assert_eq!(icon, "○");
    }

    #[test]
    fn test_history_status_colors() {
        assert_eq!(
            history_status(HistoryStatus::Completed).fg,
            Some(palette::STATUS_GREEN)
        );
        assert_eq!(
            history_status(HistoryStatus::InReview).fg,
            Some(palette::STATUS_YELLOW)
        );
    }
}
