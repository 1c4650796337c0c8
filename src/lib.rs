//! Expense Tracker - personal expense tracking from the terminal
//!
//! This library provides the core of the `expense` command: registered
//! users log in, record expenses, organize them by category, and compare
//! spending against a monthly budget. Data lives in plain line-oriented
//! text files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, dates, users, categories)
//! - `storage`: Line-format file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `crypto`: Optional password hashing
//! - `reports`: Spending summaries
//! - `display`: Terminal formatting
//! - `export`: CSV/JSON/YAML export
//! - `shell`: Interactive menu loop
//! - `cli`: Non-interactive commands
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{Settings, TrackerPaths};
//! use expense_tracker::storage::Storage;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
