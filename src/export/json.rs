//! JSON Export functionality
//!
//! Exports the expense store to JSON format with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data export structure
///
/// Credentials are never part of an export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expenses, ordered by id
    pub expenses: Vec<Expense>,

    /// All known categories, sorted
    pub categories: Vec<String>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub category_count: usize,

    /// Sum of all expense amounts
    pub total_amount: f64,

    /// Earliest expense date
    pub earliest_expense: Option<String>,

    /// Latest expense date
    pub latest_expense: Option<String>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> TrackerResult<Self> {
        let expenses = storage.expenses.get_all()?;
        let categories = storage.categories.get_all()?;

        let earliest_expense = expenses.iter().map(|e| e.date.as_str()).min().map(String::from);
        let latest_expense = expenses.iter().map(|e| e.date.as_str()).max().map(String::from);

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            category_count: categories.len(),
            total_amount: expenses.iter().map(|e| e.amount).sum(),
            earliest_expense,
            latest_expense,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            categories,
            metadata,
        })
    }
}

/// Export the expense store to JSON format
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> TrackerResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| TrackerError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
