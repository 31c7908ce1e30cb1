//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use umbra_app::{AppState, Section};

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI. Pure: reads state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(state), areas.header);
    frame.render_widget(widgets::Sidebar::new(state), areas.sidebar);

    match state.section {
        Section::Dashboard => frame.render_widget(widgets::Dashboard::new(state), areas.content),
        Section::Consultation => match state.report.as_deref() {
            Some(report) => {
                frame.render_widget(widgets::ReportView::new(state, report), areas.content)
            }
            None => frame.render_widget(widgets::ConsultationForm::new(state), areas.content),
        },
        Section::Results => frame.render_widget(widgets::Results::new(state), areas.content),
        Section::Agent => frame.render_widget(
            widgets::AgentChat::new(state).wide(widgets::agent_chat::is_wide(areas.content.width)),
            areas.content,
        ),
        Section::History => frame.render_widget(widgets::History::new(state), areas.content),
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.footer);

    if let Some(dialog) = &state.dialog {
        frame.render_widget(widgets::Dialog::new(dialog), area);
    }
}
