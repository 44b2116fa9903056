//! Expense handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use expenseflow_core::models::{NewTransaction, Transaction};

use super::{read_store, write_store};
use crate::{AppError, AppState, SuccessResponse};

/// GET /api/expenses - List all transactions, newest first
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let store = read_store(&state)?;
    Ok(Json(store.transactions().to_vec()))
}

/// POST /api/expenses - Record a new transaction
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewTransaction>,
) -> Result<(StatusCode, Json<Transaction>), AppError> {
    let mut store = write_store(&state)?;
    let tx = store
        .add_transaction(new)
        .map_err(AppError::from_core)?
        .clone();
    state.persist(&store)?;
    Ok((StatusCode::CREATED, Json(tx)))
}

/// GET /api/expenses/:id - Get one transaction
pub async fn get_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Transaction>, AppError> {
    let store = read_store(&state)?;
    store
        .get_transaction(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found(&format!("Not found: transaction {}", id)))
}

/// PUT /api/expenses/:id - Replace a transaction, keeping its id
pub async fn update_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(new): Json<NewTransaction>,
) -> Result<Json<Transaction>, AppError> {
    let mut store = write_store(&state)?;
    let tx = store
        .replace_transaction(&id, new)
        .map_err(AppError::from_core)?
        .clone();
    state.persist(&store)?;
    Ok(Json(tx))
}

/// DELETE /api/expenses/:id - Remove a transaction
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    let mut store = write_store(&state)?;
    store.delete_transaction(&id).map_err(AppError::from_core)?;
    state.persist(&store)?;
    Ok(Json(SuccessResponse { success: true }))
}

/// GET /api/expenses/category/:category - Transactions in one category
pub async fn expenses_by_category(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let store = read_store(&state)?;
    let matching: Vec<Transaction> = store
        .transactions()
        .iter()
        .filter(|t| t.category == category)
        .cloned()
        .collect();
    Ok(Json(matching))
}

/// Query parameters for the date range filter
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    /// Start date (YYYY-MM-DD), inclusive
    pub start: String,
    /// End date (YYYY-MM-DD), inclusive
    pub end: String,
}

/// GET /api/expenses/date-range - Transactions within an inclusive date range
pub async fn expenses_by_date_range(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DateRangeQuery>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let start = NaiveDate::parse_from_str(&params.start, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("Invalid start date format (use YYYY-MM-DD)"))?;
    let end = NaiveDate::parse_from_str(&params.end, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("Invalid end date format (use YYYY-MM-DD)"))?;

    if start > end {
        return Err(AppError::bad_request("start date is after end date"));
    }

    let store = read_store(&state)?;
    let matching: Vec<Transaction> = store
        .transactions()
        .iter()
        .filter(|t| t.date >= start && t.date <= end)
        .cloned()
        .collect();
    Ok(Json(matching))
}
