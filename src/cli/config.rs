//! CLI command for showing and initializing configuration

use clap::Args;

use crate::config::{PasswordStorage, Settings, TrackerPaths};
use crate::error::TrackerResult;

/// Arguments for `config`
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write the current settings to disk, creating the data directories
    #[arg(long)]
    pub init: bool,
}

/// Handle the config command
pub fn handle_config_command(
    paths: &TrackerPaths,
    settings: &Settings,
    args: ConfigArgs,
) -> TrackerResult<()> {
    if args.init {
        settings.save(paths)?;
        println!("Settings written to: {}", paths.settings_file().display());
        println!();
    }

    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Users file:     {}", paths.users_file().display());
    println!("Expenses file:  {}", paths.expenses_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:  {}", settings.currency_symbol);
    println!(
        "  Password storage: {}",
        match settings.password_storage {
            PasswordStorage::Plaintext => "plaintext",
            PasswordStorage::Argon2 => "argon2",
        }
    );
    println!("  Audit log:        {}", if settings.audit_enabled { "enabled" } else { "disabled" });

    Ok(())
}
