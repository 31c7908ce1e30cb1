//! AGENTE IA view: conversation, input line and the frequent questions

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use umbra_app::{AppState, ChatState, Focus};
use umbra_core::{ChatRole, QUICK_TOPICS};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::spinner_frame;
use crate::theme::styles;

pub const CHAT_TITLE: &str = "IA AGENTE LEGAL";
pub const CHAT_SUBTITLE: &str = "Asistente legal especializado disponible 24/7";
pub const INPUT_PLACEHOLDER: &str = "Escribe tu consulta legal aquí...";
pub const QUICK_TOPICS_TITLE: &str = "CONSULTAS FRECUENTES";
pub const DISCLAIMER: &str = "Para casos complejos, consulta con un abogado especializado";

const TOPICS_PANEL_WIDTH: u16 = 34;
const MIN_CONVERSATION_WIDTH: u16 = 36;

/// Greedy word wrap by display width. Words wider than `width` are split
/// between characters; a single character wider than `width` gets its own row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let needed = if current_width == 0 { word_width } else { word_width + 1 };
            if current_width > 0 && current_width + needed > width {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width > width {
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if current_width > 0 && current_width + ch_width > width {
                        rows.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += ch_width;
                }
                continue;
            }

            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }

        rows.push(current);
    }

    rows
}

pub struct AgentChat<'a> {
    chat: &'a ChatState,
    focused: bool,
    tick: u64,
    wide: bool,
}

impl<'a> AgentChat<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            chat: &state.chat,
            focused: state.focus == Focus::Content,
            tick: state.tick,
            wide: false,
        }
    }

    /// Show the frequent questions beside the conversation
    pub fn wide(mut self, wide: bool) -> Self {
        self.wide = wide;
        self
    }

    fn message_lines(&self, width: usize) -> Vec<Line<'static>> {
        let bubble_width = (width * 4 / 5).max(10);
        let mut lines = Vec::new();

        for message in &self.chat.messages {
            let (author, author_style, text_style, alignment) = match message.role {
                ChatRole::User => (
                    "Tú",
                    styles::text_secondary(),
                    styles::text_bright(),
                    Alignment::Right,
                ),
                ChatRole::Assistant => (
                    "◉ UMBRA IA",
                    styles::status_green(),
                    styles::text_primary(),
                    Alignment::Left,
                ),
            };

            lines.push(
                Line::from(vec![
                    Span::styled(author, author_style),
                    Span::styled(format!(" · {}", message.time_label()), styles::text_muted()),
                ])
                .alignment(alignment),
            );
            for row in wrap_text(&message.text, bubble_width) {
                lines.push(Line::from(Span::styled(row, text_style)).alignment(alignment));
            }
            lines.push(Line::raw(""));
        }

        if self.chat.typing {
            lines.push(Line::from(vec![
                Span::styled("◉ UMBRA IA ", styles::status_green()),
                Span::styled(spinner_frame(self.tick), styles::text_secondary()),
                Span::styled(" escribiendo", styles::text_muted()),
            ]));
        }

        lines
    }

    fn render_conversation(&self, area: Rect, buf: &mut Buffer) {
        let [messages, input] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(area);

        let lines = self.message_lines(messages.width as usize);
        // Stick to the newest message
        let offset = lines.len().saturating_sub(messages.height as usize);
        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(messages, buf);

        let input_block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(if self.focused {
                styles::border_active()
            } else {
                styles::border_inactive()
            });

        let mut spans = vec![Span::styled("› ", styles::accent_bold())];
        if self.chat.input.is_empty() {
            if self.focused {
                spans.push(Span::styled("▏", styles::accent()));
            }
            spans.push(Span::styled(INPUT_PLACEHOLDER, styles::text_muted()));
        } else {
            spans.push(Span::styled(self.chat.input.clone(), styles::text_bright()));
            if self.focused {
                spans.push(Span::styled("▏", styles::accent()));
            }
        }
        if self.chat.typing {
            spans.push(Span::styled("  (esperando respuesta)", styles::text_muted()));
        }

        Paragraph::new(Line::from(spans))
            .block(input_block)
            .render(input, buf);
    }

    fn render_topics(area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(Span::styled(
            format!(" {} ", QUICK_TOPICS_TITLE),
            styles::heading(),
        ));

        let mut lines = Vec::new();
        for (i, topic) in QUICK_TOPICS.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("F{} ", i + 1), styles::keybinding()),
                Span::styled(topic.to_string(), styles::text_secondary()),
            ]));
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

impl Widget for AgentChat<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 6 || inner.width < 10 {
            return;
        }

        let [title, body, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(vec![
            Line::from(Span::styled(CHAT_TITLE, styles::heading())),
            Line::from(Span::styled(CHAT_SUBTITLE, styles::text_muted())),
        ])
        .render(title, buf);

        if self.wide {
            let [conversation, topics] = Layout::horizontal([
                Constraint::Min(20),
                Constraint::Length(TOPICS_PANEL_WIDTH),
            ])
            .areas(body);
            self.render_conversation(conversation, buf);
            Self::render_topics(topics, buf);
        } else {
            self.render_conversation(body, buf);
        }

        Paragraph::new(Span::styled(DISCLAIMER, styles::text_muted()))
            .alignment(Alignment::Center)
            .render(footer, buf);
    }
}

/// Whether a content pane this wide gets the side panel
pub fn is_wide(content_width: u16) -> bool {
    content_width >= TOPICS_PANEL_WIDTH + MIN_CONVERSATION_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render(state: &AppState, wide: bool) -> TestTerminal {
        let mut term = TestTerminal::with_size(100, 30);
        term.render_widget(AgentChat::new(state).wide(wide), term.area());
        term
    }

    #[test]
    fn test_wrap_text_breaks_on_words() {
        assert_eq!(wrap_text("uno dos tres", 7), vec!["uno dos", "tres"]);
        assert_eq!(wrap_text("a\nb", 10), vec!["a", "b"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_text_measures_display_width() {
        let rows = wrap_text("漢字漢字漢字 🏠🏠🏠🏠", 6);
        assert_eq!(rows, vec!["漢字漢", "字漢字", "🏠🏠🏠", "🏠"]);
        for row in &rows {
            assert!(row.width() <= 6, "row {row:?} is {} cells", row.width());
        }
    }

    #[test]
    fn test_wrap_text_mixes_wide_and_narrow_words() {
        assert_eq!(wrap_text("casa 家 casa", 7), vec!["casa 家", "casa"]);
    }

    #[test]
    fn test_wide_user_message_stays_inside_conversation() {
        let mut state = AppState::new();
        // 100 cells of text in a 78-cell bubble
        state.chat.input = format!("物件の契約について {}", "🏠".repeat(50));
        state.chat.send();
        let term = render(&state, false);
        assert!(term.buffer_contains("物件の契約について"));
        assert_eq!(term.content().matches('🏠').count(), 50);
    }

    #[test]
    fn test_chat_shows_greeting_and_placeholder() {
        let state = AppState::new();
        let term = render(&state, false);
        assert!(term.buffer_contains(CHAT_TITLE));
        assert!(term.buffer_contains("UMBRA IA"));
        assert!(term.buffer_contains("Hola, soy tu asistente legal"));
        assert!(term.buffer_contains(INPUT_PLACEHOLDER));
    }

    #[test]
    fn test_chat_shows_typing_indicator() {
        let mut state = AppState::new();
        state.chat.input = "¿Qué es un avalúo?".into();
        state.chat.send();
        let term = render(&state, false);
        assert!(term.buffer_contains("¿Qué es un avalúo?"));
        assert!(term.buffer_contains("escribiendo"));
    }

    #[test]
    fn test_wide_layout_lists_quick_topics() {
        let term = render(&AppState::new(), true);
        assert!(term.buffer_contains(QUICK_TOPICS_TITLE));
        assert!(term.buffer_contains("F1 Proceso de compraventa"));
        assert!(term.buffer_contains("F6 Propiedad horizontal"));
    }

    #[test]
    fn test_is_wide_threshold() {
        assert!(is_wide(100));
        assert!(!is_wide(40));
    }
}
