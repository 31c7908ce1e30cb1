//! umbra-app - Application state and orchestration for UMBRA Legal
//!
//! This crate implements the TEA (The Elm Architecture) pattern: `AppState`
//! is the model, `Message` the events, `handler::update` the only place state
//! changes, and `actions` the background tasks (webhook submission, agent
//! reply, report save) that feed messages back in. It also owns configuration
//! loading.

pub mod actions;
pub mod chat;
pub mod config;
pub mod dialog;
pub mod engine;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod report;
pub mod signals;
pub mod state;

// Re-export primary types
pub use chat::ChatState;
pub use config::Settings;
pub use dialog::DialogState;
pub use engine::Engine;
pub use form::FormState;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Focus, Section, SidebarEntry, WebhookStatus, SIDEBAR};
