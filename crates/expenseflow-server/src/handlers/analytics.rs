//! Analytics handlers
//!
//! Read-only views derived from the transaction list on every request.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use expenseflow_core::aggregate::{self, Window};
use expenseflow_core::budget;
use expenseflow_core::insights::{AnalysisContext, InsightEngine};
use expenseflow_core::models::{BudgetView, CategoryTotal, Insight, MonthlyTrendPoint, Summary};

use super::{read_store, today};
use crate::{AppError, AppState};

/// Query parameters for windowed analytics
#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    /// Window preset: month (default), week, or all
    pub period: Option<String>,
}

fn resolve_window(period: Option<&str>) -> Result<Window, AppError> {
    match period.unwrap_or("month") {
        "month" | "monthly" => Ok(Window::MonthToDate),
        "week" | "weekly" => Ok(Window::TrailingWeek),
        "all" => Ok(Window::AllTime),
        other => Err(AppError::bad_request(&format!(
            "Unknown period '{}' (valid: month, week, all)",
            other
        ))),
    }
}

/// GET /api/analytics/spending-by-category - Expense totals per category
pub async fn spending_by_category(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PeriodQuery>,
) -> Result<Json<Vec<CategoryTotal>>, AppError> {
    let window = resolve_window(params.period.as_deref())?;
    let store = read_store(&state)?;
    Ok(Json(aggregate::category_totals(
        store.transactions(),
        window,
        today(),
    )))
}

/// GET /api/analytics/summary - Window aggregates for the dashboard
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PeriodQuery>,
) -> Result<Json<Summary>, AppError> {
    let window = resolve_window(params.period.as_deref())?;
    let store = read_store(&state)?;
    Ok(Json(aggregate::summarize(
        store.transactions(),
        window,
        today(),
    )))
}

/// GET /api/analytics/monthly-trends - Per-month expense/income totals
pub async fn monthly_trends(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MonthlyTrendPoint>>, AppError> {
    let store = read_store(&state)?;
    Ok(Json(aggregate::monthly_trends(store.transactions())))
}

/// GET /api/analytics/budget-comparison - Every budget with derived spending
pub async fn budget_comparison(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BudgetView>>, AppError> {
    let store = read_store(&state)?;
    Ok(Json(budget::evaluate_all(
        store.budgets(),
        store.transactions(),
        today(),
    )))
}

/// GET /api/analytics/insights - Run the insight rules over the current data
pub async fn get_insights(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Insight>>, AppError> {
    let store = read_store(&state)?;
    let engine = InsightEngine::new();
    let ctx = AnalysisContext::new(store.transactions(), today());
    Ok(Json(engine.analyze_all(&ctx)))
}
