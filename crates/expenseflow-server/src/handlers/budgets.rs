//! Budget handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use expenseflow_core::models::Budget;

use super::{read_store, write_store};
use crate::{AppError, AppState, SuccessResponse};

/// GET /api/budgets - List budget definitions
pub async fn list_budgets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Budget>>, AppError> {
    let store = read_store(&state)?;
    Ok(Json(store.budgets().to_vec()))
}

/// POST /api/budgets - Set the budget for a category (upsert)
pub async fn set_budget(
    State(state): State<Arc<AppState>>,
    Json(budget): Json<Budget>,
) -> Result<Json<Budget>, AppError> {
    let mut store = write_store(&state)?;
    store
        .upsert_budget(budget.clone())
        .map_err(AppError::from_core)?;
    state.persist(&store)?;
    Ok(Json(budget))
}

/// DELETE /api/budgets/:category - Remove the budget for a category
pub async fn remove_budget(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    let mut store = write_store(&state)?;
    store.remove_budget(&category).map_err(AppError::from_core)?;
    state.persist(&store)?;
    Ok(Json(SuccessResponse { success: true }))
}
