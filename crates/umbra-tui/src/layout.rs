//! Screen layout definitions for the TUI
//!
//! Header on top, sidebar menu on the left, the active view filling the
//! rest, and a one-row key-hint bar at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Terminals narrower than this get the compact sidebar
pub const WIDE_THRESHOLD: u16 = 80;

const SIDEBAR_WIDTH: u16 = 26;
const SIDEBAR_WIDTH_COMPACT: u16 = 20;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar (glass container)
    pub header: Rect,

    /// Navigation menu
    pub sidebar: Rect,

    /// Active section
    pub content: Rect,

    /// Key hints and webhook status
    pub footer: Rect,
}

pub fn sidebar_width(total_width: u16) -> u16 {
    if total_width >= WIDE_THRESHOLD {
        SIDEBAR_WIDTH
    } else {
        SIDEBAR_WIDTH_COMPACT
    }
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3), // Top border + title row + bottom border
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let [sidebar, content] = Layout::horizontal([
        Constraint::Length(sidebar_width(area.width)),
        Constraint::Min(10),
    ])
    .areas(body);

    ScreenAreas {
        header,
        sidebar,
        content,
        footer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_standard_terminal() {
        let layout = create(Rect::new(0, 0, 100, 30));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.footer.y, 29);
        assert_eq!(layout.sidebar.width, 26);
        assert_eq!(layout.sidebar.height, 26); // 30 - 3 - 1
        assert_eq!(layout.content.x, 26);
        assert_eq!(layout.content.width, 74);
    }

    #[test]
    fn test_create_layout_narrow_terminal() {
        let layout = create(Rect::new(0, 0, 60, 24));
        assert_eq!(layout.sidebar.width, 20);
        assert_eq!(layout.content.width, 40);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(
            layout.header.height + layout.content.height + layout.footer.height,
            area.height
        );
        assert_eq!(layout.sidebar.width + layout.content.width, area.width);
        assert_eq!(layout.sidebar.y, layout.content.y);
    }
}
