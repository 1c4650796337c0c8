//! CLI command handlers
//!
//! Non-interactive commands, bridging clap argument parsing with the
//! service layer. The interactive menu lives in `shell`.

pub mod config;
pub mod export;
pub mod history;

pub use config::{handle_config_command, ConfigArgs};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use history::{handle_history_command, HistoryArgs};
