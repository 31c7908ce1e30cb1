//! Terminal setup and restoration

/// Leave the alternate screen before a panic is reported, and record the
/// panic in the log file since the terminal output is often lost.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        tracing::error!(%panic_info, "UMBRA panicked");
        original_hook(panic_info);
    }));
}
