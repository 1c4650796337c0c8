//! Export module for the expense tracker
//!
//! Provides data export in multiple formats:
//! - CSV: expenses only (spreadsheet-compatible)
//! - JSON: machine-readable export of expenses and categories
//! - YAML: human-readable export of expenses and categories

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_expenses_csv;
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
