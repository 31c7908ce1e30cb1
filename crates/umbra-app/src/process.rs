//! Message processing: runs update and dispatches the resulting actions

use tokio::sync::{mpsc, watch};
use umbra_webhook::WebhookClient;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function.
///
/// Follow-up messages are processed immediately, in order, before
/// returning.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    webhook: &WebhookClient,
    shutdown_rx: &watch::Receiver<bool>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), webhook, shutdown_rx.clone());
        }

        msg = result.message;
    }
}
