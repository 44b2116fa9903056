//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

use std::sync::{RwLockReadGuard, RwLockWriteGuard};

use expenseflow_core::store::TransactionStore;

use crate::{AppError, AppState};

pub mod analytics;
pub mod budgets;
pub mod expenses;

// Re-export all handlers for use in router
pub use analytics::*;
pub use budgets::*;
pub use expenses::*;

pub(crate) fn read_store(
    state: &AppState,
) -> Result<RwLockReadGuard<'_, TransactionStore>, AppError> {
    state
        .store
        .read()
        .map_err(|_| AppError::internal("State lock poisoned"))
}

pub(crate) fn write_store(
    state: &AppState,
) -> Result<RwLockWriteGuard<'_, TransactionStore>, AppError> {
    state
        .store
        .write()
        .map_err(|_| AppError::internal("State lock poisoned"))
}

/// Reference date all windows are computed from
pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
