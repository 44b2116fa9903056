//! Budget command implementations

use anyhow::{Context, Result};
use chrono::Local;

use expenseflow_core::budget;
use expenseflow_core::models::{Budget, BudgetPeriod, BudgetStatus};
use expenseflow_core::storage::Storage;

use super::load_store;

pub fn cmd_budget_set(storage: &Storage, category: &str, limit: f64, period: &str) -> Result<()> {
    let period: BudgetPeriod = period.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let mut store = load_store(storage)?;
    let replaced = store.get_budget(category).is_some();
    store.upsert_budget(Budget {
        category: category.to_string(),
        limit,
        period,
    })?;
    storage.save(&store)?;

    if replaced {
        println!("✅ Budget for {} replaced: ${:.2} {}", category, limit, period);
    } else {
        println!("✅ Budget set: {} ${:.2} {}", category, limit, period);
    }
    Ok(())
}

pub fn cmd_budget_list(storage: &Storage) -> Result<()> {
    let store = load_store(storage)?;

    if store.budgets().is_empty() {
        println!("No budgets set. Add one with:");
        println!("  expenseflow budget set food 300");
        return Ok(());
    }

    let today = Local::now().date_naive();
    let views = budget::evaluate_all(store.budgets(), store.transactions(), today);

    println!();
    println!("💰 Budgets");
    println!("   ─────────────────────────────────────────────────────────────");

    for view in views {
        let icon = match view.status {
            BudgetStatus::Ok => "✅",
            BudgetStatus::Near => "⚠️ ",
            BudgetStatus::Over => "🚨",
        };

        println!(
            "   {} {:<12} ${:>8.2} of ${:>8.2} ({:.0}%, {})",
            icon, view.category, view.spent, view.limit, view.percentage, view.period
        );
        if view.status == BudgetStatus::Over {
            println!("      Over by ${:.2}", -view.remaining);
        }
    }

    Ok(())
}

pub fn cmd_budget_remove(storage: &Storage, category: &str) -> Result<()> {
    let mut store = load_store(storage)?;
    let budget = store
        .remove_budget(category)
        .with_context(|| format!("No budget set for {}", category))?;
    storage.save(&store)?;

    println!("🗑️  Removed {} budget (${:.2})", budget.category, budget.limit);
    Ok(())
}
