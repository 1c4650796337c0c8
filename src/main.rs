use std::io::IsTerminal;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_config_command, handle_export_command, handle_history_command, ConfigArgs, ExportArgs,
    HistoryArgs,
};
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::shell::{Prompter, Shell};
use expense_tracker::storage::Storage;

/// Environment variable holding the log filter
const LOG_ENV: &str = "EXPENSE_TRACKER_LOG";

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense tracker for the terminal",
    long_about = "Record expenses, organize them by category, and compare spending \
                  against a monthly budget. Run without a command to start the \
                  interactive menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Shell,

    /// Show current configuration and paths
    Config(ConfigArgs),

    /// Export expenses to CSV, JSON, or YAML
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History(HistoryArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.set_audit_enabled(settings.audit_enabled);
    storage.load_all()?;

    match cli.command {
        None | Some(Commands::Shell) => {
            let stdin = std::io::stdin();
            let interactive = stdin.is_terminal();
            let prompt = Prompter::new(stdin.lock(), std::io::stdout().lock(), interactive);
            Shell::new(&storage, &settings, prompt).run()?;
        }
        Some(Commands::Config(args)) => handle_config_command(&paths, &settings, args)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, args)?,
        Some(Commands::History(args)) => handle_history_command(&storage, args)?,
    }

    Ok(())
}
