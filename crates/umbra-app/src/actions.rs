//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every task reports back by sending a [`Message`]; none of them touch
//! `AppState` directly.

use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};
use umbra_core::{respond, ConsultationRecord};
use umbra_webhook::WebhookClient;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::report::save_report;

/// Execute an action by spawning a background task
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    webhook: &WebhookClient,
    shutdown_rx: watch::Receiver<bool>,
) {
    match action {
        UpdateAction::SubmitConsultation { record } => {
            spawn_submission(record, webhook.clone(), msg_tx);
        }

        UpdateAction::ScheduleAgentReply {
            session,
            prompt,
            delay,
        } => {
            spawn_agent_reply(session, prompt, delay, msg_tx, shutdown_rx);
        }

        UpdateAction::ProbeWebhook => {
            spawn_probe(webhook.clone(), msg_tx);
        }

        UpdateAction::SaveReport { text, directory } => {
            spawn_report_save(text, directory, msg_tx);
        }
    }
}

fn spawn_submission(
    record: ConsultationRecord,
    webhook: WebhookClient,
    msg_tx: mpsc::Sender<Message>,
) {
    tokio::spawn(async move {
        let msg = match webhook.submit(&record).await {
            Ok(report) => Message::SubmissionCompleted { record, report },
            Err(error) => Message::SubmissionFailed { error },
        };
        if msg_tx.send(msg).await.is_err() {
            warn!("Submission finished after the event loop closed");
        }
    });
}

/// Simulated "typing" pause, then the canned answer
fn spawn_agent_reply(
    session: u64,
    prompt: String,
    delay: Duration,
    msg_tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    tokio::spawn(async move {
        tokio::select! {
            _ = tokio::time::sleep(delay) => {}
            _ = shutdown_rx.changed() => {
                debug!("Agent reply cancelled by shutdown");
                return;
            }
        }

        let text = respond(&prompt).to_string();
        let _ = msg_tx.send(Message::AgentReplied { session, text }).await;
    });
}

fn spawn_probe(webhook: WebhookClient, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let result = webhook.probe().await;
        let _ = msg_tx.send(Message::WebhookProbed { result }).await;
    });
}

fn spawn_report_save(text: String, directory: PathBuf, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let saved =
            tokio::task::spawn_blocking(move || save_report(&directory, &text, Local::now())).await;

        let msg = match saved {
            Ok(Ok(path)) => Message::ReportSaved { path },
            Ok(Err(e)) => Message::ReportSaveFailed {
                error: e.to_string(),
            },
            Err(e) => Message::ReportSaveFailed {
                error: format!("Report save task failed: {}", e),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}
