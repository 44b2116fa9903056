//! Aggregation over the transaction list
//!
//! Pure functions of (transactions, window, reference date). Nothing here
//! caches or mutates; every caller recomputes from the current store
//! contents, so derived numbers are correct by construction.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{CategoryTotal, MonthlyTrendPoint, Summary, Transaction, TransactionKind};

/// The time window a computation is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// The calendar month containing the reference date, up to that date
    MonthToDate,
    /// The 7 days ending at the reference date (not calendar-week-aligned)
    TrailingWeek,
    /// No time bound
    AllTime,
}

impl Window {
    /// Whether `date` falls inside this window relative to `today`
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Window::MonthToDate => {
                date.year() == today.year() && date.month() == today.month() && date <= today
            }
            Window::TrailingWeek => date > today - Duration::days(7) && date <= today,
            Window::AllTime => true,
        }
    }
}

/// First day of the calendar month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 is always valid")
}

/// First day of the calendar month before the one containing `date`
pub fn previous_month_start(date: NaiveDate) -> NaiveDate {
    month_start(month_start(date) - Duration::days(1))
}

/// Compute window aggregates from the full transaction list.
///
/// `average_per_day` divides by the day-of-month of `today` rather than the
/// window length. That convention comes from the product and is kept for
/// parity; it is guarded to 0 when there are no expenses.
pub fn summarize(transactions: &[Transaction], window: Window, today: NaiveDate) -> Summary {
    let mut total_expenses = 0.0;
    let mut total_income = 0.0;
    let mut expense_count = 0;
    let mut income_count = 0;

    for tx in transactions.iter().filter(|t| window.contains(t.date, today)) {
        match tx.kind {
            TransactionKind::Expense => {
                total_expenses += tx.amount;
                expense_count += 1;
            }
            TransactionKind::Income => {
                total_income += tx.amount;
                income_count += 1;
            }
        }
    }

    let average_per_day = if total_expenses > 0.0 {
        total_expenses / today.day() as f64
    } else {
        0.0
    };

    Summary {
        total_expenses,
        total_income,
        balance: total_income - total_expenses,
        expense_count,
        income_count,
        category_totals: category_totals(transactions, window, today),
        average_per_day,
    }
}

/// Expense totals per category within the window, income excluded.
///
/// Sorted by amount descending with category name ascending as the
/// tie-break, so the ranking is deterministic regardless of input order.
pub fn category_totals(
    transactions: &[Transaction],
    window: Window,
    today: NaiveDate,
) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for tx in transactions {
        if tx.kind != TransactionKind::Expense || !window.contains(tx.date, today) {
            continue;
        }
        match totals.iter_mut().find(|c| c.category == tx.category) {
            Some(entry) => entry.amount += tx.amount,
            None => totals.push(CategoryTotal {
                category: tx.category.clone(),
                amount: tx.amount,
            }),
        }
    }

    totals.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    totals
}

/// The `limit` highest-spending categories within the window
pub fn top_categories(
    transactions: &[Transaction],
    window: Window,
    today: NaiveDate,
    limit: usize,
) -> Vec<CategoryTotal> {
    let mut totals = category_totals(transactions, window, today);
    totals.truncate(limit);
    totals
}

/// Expense/income totals per calendar month, oldest first.
///
/// Covers every month that has at least one transaction; months without
/// activity are not padded in.
pub fn monthly_trends(transactions: &[Transaction]) -> Vec<MonthlyTrendPoint> {
    let mut points: Vec<MonthlyTrendPoint> = Vec::new();

    for tx in transactions {
        let month = tx.date.format("%Y-%m").to_string();
        let point = match points.iter_mut().find(|p| p.month == month) {
            Some(p) => p,
            None => {
                points.push(MonthlyTrendPoint {
                    month,
                    expenses: 0.0,
                    income: 0.0,
                    transaction_count: 0,
                });
                points.last_mut().expect("just pushed")
            }
        };
        match tx.kind {
            TransactionKind::Expense => point.expenses += tx.amount,
            TransactionKind::Income => point.income += tx.amount,
        }
        point.transaction_count += 1;
    }

    points.sort_by(|a, b| a.month.cmp(&b.month));
    points
}
