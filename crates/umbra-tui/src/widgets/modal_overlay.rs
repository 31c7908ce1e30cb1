//! Backdrop for modal dialogs: dimmed screen, cleared box, drop shadow

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Prepare a `width` x `height` modal centered in `screen` and return its
/// rect. Everything behind it is dimmed; the box itself starts blank.
pub fn open(buf: &mut Buffer, screen: Rect, width: u16, height: u16) -> Rect {
    buf.set_style(
        screen,
        Style::default().fg(palette::TEXT_MUTED).bg(palette::DEEPEST_BG),
    );

    let modal = centered_rect(width, height, screen);
    shadow(buf, modal, screen);
    Clear.render(modal, buf);
    modal
}

/// Fixed-size rect centered in `area`, shrunk to fit when `area` is smaller
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// One-cell shadow along the right and bottom edges, offset by one
fn shadow(buf: &mut Buffer, modal: Rect, screen: Rect) {
    let style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let right = Rect::new(modal.right(), modal.y.saturating_add(1), 1, modal.height);
    let bottom = Rect::new(modal.x.saturating_add(1), modal.bottom(), modal.width, 1);

    for strip in [right, bottom] {
        let strip = strip.intersection(screen);
        if strip.is_empty() {
            continue;
        }
        Clear.render(strip, buf);
        buf.set_style(strip, style);
    }
}
