//! Budget evaluation
//!
//! Compares derived category spending against configured limits. The
//! evaluator is a read-only view over the transaction list: it never mutates
//! the budgets or the store, and `spent` is recomputed on every call rather
//! than trusted from storage.

use chrono::NaiveDate;

use crate::aggregate::Window;
use crate::models::{Budget, BudgetPeriod, BudgetStatus, BudgetView, Transaction, TransactionKind};

impl BudgetPeriod {
    /// The aggregation window this period maps to.
    ///
    /// Monthly budgets cover calendar-month-to-date while weekly budgets
    /// cover the trailing 7 days from "now". The asymmetry (calendar-aligned
    /// vs rolling) is intentional product behavior and is kept as-is.
    pub fn window(&self) -> Window {
        match self {
            BudgetPeriod::Monthly => Window::MonthToDate,
            BudgetPeriod::Weekly => Window::TrailingWeek,
        }
    }
}

/// Evaluate one budget against the transaction list.
///
/// Classification: `over` when percentage > 100, `near` when
/// 80 < percentage <= 100, `ok` otherwise. Exactly 80.0 is `ok`.
///
/// A non-positive limit cannot normally exist (upserts reject it) but can
/// appear in a hand-edited data file; it is treated as immediately over
/// budget with the percentage pinned to 0 to keep the output finite.
pub fn evaluate(budget: &Budget, transactions: &[Transaction], today: NaiveDate) -> BudgetView {
    let window = budget.period.window();
    let spent: f64 = transactions
        .iter()
        .filter(|t| {
            t.kind == TransactionKind::Expense
                && t.category == budget.category
                && window.contains(t.date, today)
        })
        .map(|t| t.amount)
        .sum();

    let percentage = if budget.limit > 0.0 {
        spent / budget.limit * 100.0
    } else {
        0.0
    };

    let status = if budget.limit <= 0.0 || percentage > 100.0 {
        BudgetStatus::Over
    } else if percentage > 80.0 {
        BudgetStatus::Near
    } else {
        BudgetStatus::Ok
    };

    BudgetView {
        category: budget.category.clone(),
        limit: budget.limit,
        period: budget.period,
        spent,
        percentage,
        remaining: budget.limit - spent,
        status,
    }
}

/// Evaluate every configured budget
pub fn evaluate_all(
    budgets: &[Budget],
    transactions: &[Transaction],
    today: NaiveDate,
) -> Vec<BudgetView> {
    budgets
        .iter()
        .map(|b| evaluate(b, transactions, today))
        .collect()
}
