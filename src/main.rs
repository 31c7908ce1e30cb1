//! UMBRA Legal - terminal front-end for real-estate legal consultations
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use umbra_app::config::{load_settings_from, validate_settings, SettingsOverrides};

/// UMBRA Legal - real-estate legal consultation terminal
#[derive(Parser, Debug)]
#[command(name = "umbra")]
#[command(about = "Real-estate legal consultations from the terminal", long_about = None)]
struct Args {
    /// Configuration file (default: <config_dir>/umbra/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Webhook endpoint, overriding the configuration file
    #[arg(long, value_name = "URL")]
    webhook_url: Option<String>,

    /// Ask the legal agent one question, print the answer and exit
    #[arg(long, value_name = "TEXT")]
    ask: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(question) = args.ask {
        println!("{}", umbra_core::respond(&question));
        return Ok(());
    }

    color_eyre::install()?;
    let log_dir = umbra_core::logging::init()?;

    let mut settings = load_settings_from(args.config.as_deref());
    SettingsOverrides {
        webhook_url: args.webhook_url,
    }
    .apply(&mut settings);
    validate_settings(&settings)?;

    umbra_tui::run(settings).await?;

    tracing::info!(log_dir = %log_dir.display(), "UMBRA Legal exited");
    Ok(())
}
