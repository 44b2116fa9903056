//! Transaction command implementations

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use expenseflow_core::models::{NewTransaction, TransactionKind};
use expenseflow_core::storage::Storage;

use super::{load_store, truncate};

#[allow(clippy::too_many_arguments)]
pub fn cmd_add(
    storage: &Storage,
    amount: f64,
    description: &str,
    category: &str,
    date: Option<&str>,
    income: bool,
    recurring: bool,
    tags: Option<&str>,
) -> Result<()> {
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("Invalid date format (use YYYY-MM-DD)")?,
        None => Local::now().date_naive(),
    };

    let kind = if income {
        TransactionKind::Income
    } else {
        TransactionKind::Expense
    };

    let tags: Vec<String> = tags
        .map(|s| {
            s.split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let mut store = load_store(storage)?;
    let tx = store
        .add_transaction(NewTransaction {
            amount,
            description: description.to_string(),
            category: category.to_string(),
            date,
            kind,
            recurring,
            tags,
        })?
        .clone();
    storage.save(&store)?;

    let sign = match tx.kind {
        TransactionKind::Expense => "-",
        TransactionKind::Income => "+",
    };
    println!(
        "✅ Recorded {}${:.2} for \"{}\" in {} on {} (id {})",
        sign, tx.amount, tx.description, tx.category, tx.date, tx.id
    );
    Ok(())
}

pub fn cmd_list(storage: &Storage, category: Option<&str>, limit: usize) -> Result<()> {
    let store = load_store(storage)?;

    let transactions: Vec<_> = store
        .transactions()
        .iter()
        .filter(|t| category.map_or(true, |c| t.category == c))
        .take(limit)
        .collect();

    if transactions.is_empty() {
        println!("No transactions found. Record one with:");
        println!("  expenseflow add 12.50 \"Coffee\" food");
        return Ok(());
    }

    println!();
    match category {
        Some(c) => println!("📝 Recent Transactions ({})", c),
        None => println!("📝 Recent Transactions"),
    }
    println!("   ─────────────────────────────────────────────────────────────");

    for tx in transactions {
        let amount_str = match tx.kind {
            TransactionKind::Expense => format!("\x1b[31m${:.2}\x1b[0m", tx.amount), // Red for expenses
            TransactionKind::Income => format!("\x1b[32m+${:.2}\x1b[0m", tx.amount), // Green for income
        };
        let recurring_mark = if tx.recurring { " 🔁" } else { "" };

        println!(
            "   [{}] {} │ {:>10} │ {:<12} │ {}{}",
            tx.id,
            tx.date,
            amount_str,
            truncate(&tx.category, 12),
            truncate(&tx.description, 32),
            recurring_mark
        );
    }

    Ok(())
}

pub fn cmd_delete(storage: &Storage, id: &str) -> Result<()> {
    let mut store = load_store(storage)?;
    let tx = store
        .delete_transaction(id)
        .with_context(|| format!("Transaction {} not found", id))?;
    storage.save(&store)?;

    println!(
        "🗑️  Deleted \"{}\" (${:.2}, {})",
        tx.description, tx.amount, tx.date
    );
    Ok(())
}
