//! Rolodex CLI
//!
//! Terminal people picker: type part of a name, pick the person from a
//! debounced suggestion list.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use rolodex_cli::app::App;
use rolodex_cli::config::{CliConfig, DEFAULT_CLOSE_GRACE_MS, DEFAULT_DELAY_MS};
use rolodex_cli::tui;
use rolodex_core::{tracing_init, Roster};

#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(version, about = "Debounced people picker for the terminal", long_about = None)]
struct Cli {
    /// Debounce window for the filter query, in milliseconds
    #[arg(long)]
    delay: Option<u64>,

    /// Grace window before the suggestion list closes on blur, in milliseconds
    #[arg(long)]
    close_grace: Option<u64>,

    /// Roster JSON file (defaults to the built-in roster)
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; the alternate screen owns stdout.
    tracing_init::init_tracing("rolodex=warn", cli.log_json);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting rolodex");

    // Flags win over the config file, which wins over the defaults.
    let file = CliConfig::load();
    let delay = Duration::from_millis(cli.delay.or(file.delay_ms).unwrap_or(DEFAULT_DELAY_MS));
    let close_grace = Duration::from_millis(
        cli.close_grace
            .or(file.close_grace_ms)
            .unwrap_or(DEFAULT_CLOSE_GRACE_MS),
    );

    let roster = match cli.roster.or(file.roster) {
        Some(path) => Roster::from_json_file(&path)?,
        None => Roster::builtin(),
    };
    info!(people = roster.len(), "Roster loaded");

    tui::run(App::new(Arc::new(roster), delay, close_grace)).await
}
