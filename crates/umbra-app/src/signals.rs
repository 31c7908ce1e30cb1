//! SIGINT/SIGTERM → `Message::Quit`

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use umbra_core::prelude::*;

use crate::message::Message;

/// Forward the first termination signal to the app as `Message::Quit`.
///
/// The task ends on its own once shutdown is signalled through `shutdown_rx`.
pub fn spawn_signal_handler(
    tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            received = termination_signal() => match received {
                Ok(name) => {
                    info!(signal = name, "Quitting on signal");
                    let _ = tx.send(Message::Quit).await;
                }
                Err(e) => error!("Signal handler error: {}", e),
            },
            _ = shutdown_rx.changed() => {
                debug!("Signal handler stopped");
            }
        }
    })
}

#[cfg(unix)]
async fn termination_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|e| Error::terminal(format!("SIGINT handler: {}", e)))?;
    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| Error::terminal(format!("SIGTERM handler: {}", e)))?;

    Ok(tokio::select! {
        _ = sigint.recv() => "SIGINT",
        _ = sigterm.recv() => "SIGTERM",
    })
}

#[cfg(not(unix))]
async fn termination_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Ctrl+C handler: {}", e)))?;
    Ok("Ctrl+C")
}
