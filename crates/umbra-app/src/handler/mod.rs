//! Handler module - TEA update function and key routing
//!
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per focus, view and dialog

pub(crate) mod keys;
pub(crate) mod update;


use std::path::PathBuf;
use std::time::Duration;

use umbra_core::ConsultationRecord;

use crate::message::Message;

pub use keys::handle_key;
pub use update::update;

/// Side effects the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// POST the consultation to the webhook
    SubmitConsultation { record: ConsultationRecord },

    /// Answer `prompt` after `delay`, addressed to chat `session`
    ScheduleAgentReply {
        session: u64,
        prompt: String,
        delay: Duration,
    },

    /// Send the OPTIONS probe
    ProbeWebhook,

    /// Write the report to a timestamped file in `directory`
    SaveReport { text: String, directory: PathBuf },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
