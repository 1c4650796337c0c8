//! CSV Export functionality
//!
//! Exports expenses to a spreadsheet-compatible CSV file.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::storage::Storage;

/// Export all expenses to CSV, ordered by id
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: &mut W) -> TrackerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Date", "Category", "Description", "Amount"])
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    for expense in storage.expenses.get_all()? {
        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.date.to_string(),
                expense.category,
                expense.description,
                format!("{:.2}", expense.amount),
            ])
            .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackerPaths;
    use crate::services::{CreateExpenseInput, ExpenseService};
    use tempfile::TempDir;

    #[test]
    fn test_export_expenses_csv() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        let service = ExpenseService::new(&storage);
        service
            .add(CreateExpenseInput::new("food", "lunch, with tip", 12.5, "2024-03-15"))
            .unwrap();
        service
            .add(CreateExpenseInput::new("travel", "bus", 2.0, "2024-03-16"))
            .unwrap();

        let mut buffer = Vec::new();
        export_expenses_csv(&storage, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "ID,Date,Category,Description,Amount");
        assert_eq!(lines[1], "1,2024-03-15,food,\"lunch, with tip\",12.50");
        assert_eq!(lines[2], "2,2024-03-16,travel,bus,2.00");
    }

    #[test]
    fn test_export_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let mut buffer = Vec::new();
        export_expenses_csv(&storage, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "ID,Date,Category,Description,Amount\n");
    }
}
