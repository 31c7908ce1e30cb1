//! umbra-tui - Terminal UI for UMBRA Legal
//!
//! ratatui front-end over umbra-app's Engine: terminal setup, event polling,
//! the view function and its widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
