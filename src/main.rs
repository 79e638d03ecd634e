//! FocusGuard - a terminal client for the FocusGuard backend
//!
//! This is the binary entry point. All logic lives in the workspace crates:
//! fguard-core (types), fguard-api (HTTP client), fguard-app (state machine),
//! fguard-tui (terminal UI).

use std::path::PathBuf;

use clap::Parser;

/// FocusGuard - timed focus sessions, website blocklist, and usage analytics
#[derive(Parser, Debug)]
#[command(name = "fguard")]
#[command(about = "Terminal client for the FocusGuard focus/blocklist service", long_about = None)]
struct Args {
    /// Base URL of the backend API (overrides the config file)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Path to an alternate config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    fguard_core::logging::init()?;

    let args = Args::parse();

    let mut settings = fguard_app::config::load_settings(args.config.as_deref())?;
    if let Some(base_url) = args.base_url {
        settings.server.base_url = base_url;
    }

    fguard_tui::run(settings).await?;
    Ok(())
}
