//! Status command implementation

use std::fs;

use anyhow::Result;

use expenseflow_core::storage::Storage;

use super::load_store;

pub fn cmd_status(storage: &Storage) -> Result<()> {
    println!();
    println!("📊 ExpenseFlow Status");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Data directory: {}", storage.data_dir().display());

    for file in ["expenses.json", "budgets.json"] {
        let path = storage.data_dir().join(file);
        if path.exists() {
            let size_kb = fs::metadata(&path).map(|m| m.len() as f64 / 1024.0).unwrap_or(0.0);
            println!("   {}: {:.1} KB", file, size_kb);
        } else {
            println!("   {}: (not created yet)", file);
        }
    }

    match load_store(storage) {
        Ok(store) => {
            println!();
            println!("   Transactions: {}", store.transactions().len());
            println!("   Budgets: {}", store.budgets().len());
        }
        Err(e) => {
            println!();
            println!("   ❌ Error loading data: {}", e);
        }
    }

    println!();
    Ok(())
}
