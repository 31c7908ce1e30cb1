//! Custom widget components

pub mod agent_chat;
mod consultation_form;
mod dashboard;
mod dialog;
mod header;
mod history;
pub mod modal_overlay;
mod report_view;
mod results;
mod sidebar;
mod status_bar;

pub use agent_chat::AgentChat;
pub use consultation_form::ConsultationForm;
pub use dashboard::Dashboard;
pub use dialog::Dialog;
pub use header::MainHeader;
pub use history::History;
pub use report_view::ReportView;
pub use results::Results;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Braille spinner frame for the given tick; advances every other tick
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER[((tick / 2) % SPINNER.len() as u64) as usize]
}
