//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `budget` - Budget commands (set, list, remove)
//! - `dashboard` - Month-to-date overview
//! - `insights` - Spending insight output
//! - `serve` - Web server command
//! - `status` - Data location and record counts
//! - `transactions` - Transaction commands (add, list, delete)

use std::path::Path;

use anyhow::{Context, Result};

use expenseflow_core::storage::Storage;
use expenseflow_core::store::TransactionStore;

pub mod budget;
pub mod dashboard;
pub mod insights;
pub mod serve;
pub mod status;
pub mod transactions;

// Re-export command functions for main.rs
pub use budget::*;
pub use dashboard::*;
pub use insights::*;
pub use serve::*;
pub use status::*;
pub use transactions::*;

/// Open storage at the given directory, or the platform default
pub fn open_storage(data_dir: Option<&Path>) -> Result<Storage> {
    match data_dir {
        Some(dir) => Storage::new(dir),
        None => Storage::open_default(),
    }
    .context("Failed to open data directory")
}

/// Load the store from disk
pub fn load_store(storage: &Storage) -> Result<TransactionStore> {
    storage
        .load()
        .with_context(|| format!("Failed to load data from {}", storage.data_dir().display()))
}

/// Truncate a string to a maximum length in characters, adding "..." if
/// truncated. Counts chars rather than bytes so multibyte text never splits
/// mid-character.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
