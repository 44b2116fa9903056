//! Dashboard command implementation

use anyhow::Result;
use chrono::Local;

use expenseflow_core::aggregate::{self, Window};
use expenseflow_core::budget;
use expenseflow_core::models::{BudgetStatus, TransactionKind};
use expenseflow_core::storage::Storage;

use super::{load_store, truncate};

pub fn cmd_dashboard(storage: &Storage) -> Result<()> {
    let store = load_store(storage)?;
    let today = Local::now().date_naive();
    let summary = aggregate::summarize(store.transactions(), Window::MonthToDate, today);

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│       💰 ExpenseFlow Dashboard          │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  This month ({}):", today.format("%B %Y"));
    println!("  Expenses:        ${:.2}", summary.total_expenses);
    println!("  Income:          ${:.2}", summary.total_income);
    println!("  Balance:         ${:.2}", summary.balance);
    println!("  Avg per day:     ${:.2}", summary.average_per_day);
    println!();

    if !summary.category_totals.is_empty() {
        println!("  📊 Top Categories");
        for total in summary.category_totals.iter().take(5) {
            println!("     {:<14} ${:.2}", total.category, total.amount);
        }
        println!();
    }

    let views = budget::evaluate_all(store.budgets(), store.transactions(), today);
    let over: Vec<_> = views
        .iter()
        .filter(|v| v.status == BudgetStatus::Over)
        .collect();
    let near = views
        .iter()
        .filter(|v| v.status == BudgetStatus::Near)
        .count();

    if !views.is_empty() {
        println!("  💰 Budgets: {} set, {} near limit, {} over", views.len(), near, over.len());
        for view in &over {
            println!(
                "     🚨 {} is over by ${:.2}",
                view.category,
                -view.remaining
            );
        }
        println!();
    }

    if !store.transactions().is_empty() {
        println!("  📝 Recent Transactions");
        for tx in store.transactions().iter().take(5) {
            let amount_str = match tx.kind {
                TransactionKind::Expense => format!("-${:.2}", tx.amount),
                TransactionKind::Income => format!("+${:.2}", tx.amount),
            };
            println!(
                "     {} {:>10}  {}",
                tx.date,
                amount_str,
                truncate(&tx.description, 32)
            );
        }
        println!();
    }

    if !over.is_empty() || near > 0 {
        println!("  Run 'expenseflow budget list' for the full picture.");
    }

    Ok(())
}
