//! Engine - owns the TEA state, the message channel and the webhook client
//!
//! The TUI runner drives it: feed key messages in, drain background
//! messages, render `state`.

use tokio::sync::{mpsc, watch};
use umbra_core::prelude::*;
use umbra_webhook::WebhookClient;

use crate::actions::handle_action;
use crate::config::Settings;
use crate::handler::UpdateAction;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the message channel shared with background tasks
const CHANNEL_CAPACITY: usize = 256;

pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the message channel; clone for background tasks
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half, drained by the frontend loop
    pub msg_rx: mpsc::Receiver<Message>,

    webhook: WebhookClient,

    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl Engine {
    /// Build the engine from validated settings
    pub fn new(settings: Settings) -> Result<Self> {
        let webhook = WebhookClient::new(settings.webhook.client_config())
            .map_err(|e| Error::webhook(e.to_string()))?;

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Ok(Self {
            state: AppState::with_settings(settings),
            msg_tx,
            msg_rx,
            webhook,
            shutdown_tx,
            shutdown_rx,
        })
    }

    /// Spawn the signal handler and, if configured, the webhook probe.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        signals::spawn_signal_handler(self.msg_tx.clone(), self.shutdown_rx.clone());

        if self.state.settings.webhook.probe_on_start {
            debug!("Probing webhook at startup");
            handle_action(
                UpdateAction::ProbeWebhook,
                self.msg_tx.clone(),
                &self.webhook,
                self.shutdown_rx.clone(),
            );
        }
    }

    /// Process a single message through the TEA update cycle
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.webhook,
            &self.shutdown_rx,
        );
    }

    /// Process every message already waiting in the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Tell background tasks to stop
    pub fn shutdown(&mut self) {
        info!("Shutting down");
        let _ = self.shutdown_tx.send(true);
    }
}
