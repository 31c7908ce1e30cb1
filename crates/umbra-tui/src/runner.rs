//! Main TUI runner: terminal lifecycle and the event loop

use umbra_app::{Engine, Settings};
use umbra_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI until the user quits.
///
/// Must be awaited inside a tokio runtime; background tasks (webhook
/// submission, agent replies, signals) are spawned onto it.
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let mut engine = Engine::new(settings)?;
    info!(webhook = %engine.state.settings.webhook.url, "Starting UMBRA");

    let mut term = ratatui::init();
    engine.start();

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    result
}

fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Results from background tasks first, so the frame reflects them
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
