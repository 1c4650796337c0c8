//! YAML Export functionality
//!
//! Exports the expense store to YAML format for human-readable backup.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export the expense store to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> TrackerResult<()> {
    let export = FullExport::from_storage(storage)?;

    writeln!(writer, "# Expense tracker export").map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackerPaths;
    use crate::services::{CreateExpenseInput, ExpenseService};
    use tempfile::TempDir;

    #[test]
    fn test_export_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        ExpenseService::new(&storage)
            .add(CreateExpenseInput::new("food", "lunch", 12.5, "2024-03-15"))
            .unwrap();

        let mut buffer = Vec::new();
        export_full_yaml(&storage, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# Expense tracker export"));
        assert!(text.contains("description: lunch"));
        assert!(text.contains("expense_count: 1"));

        let body: String = text
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");
        let parsed: FullExport = serde_yaml::from_str(&body).unwrap();
        assert_eq!(parsed.expenses[0].date.as_str(), "2024-03-15");
    }
}
