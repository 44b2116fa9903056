//! CLI command tests

use tempfile::TempDir;

use expenseflow_core::models::{BudgetPeriod, TransactionKind};
use expenseflow_core::storage::Storage;

use crate::commands::{self, truncate};

fn setup_test_storage() -> (TempDir, Storage) {
    let dir = TempDir::new().unwrap();
    let storage = Storage::new(dir.path().join("data")).unwrap();
    (dir, storage)
}

// ========== Transaction Command Tests ==========

#[test]
fn test_cmd_add_records_and_persists() {
    let (_dir, storage) = setup_test_storage();

    let result = commands::cmd_add(
        &storage,
        12.5,
        "Coffee",
        "food",
        Some("2026-08-24"),
        false,
        false,
        None,
    );
    assert!(result.is_ok());

    let store = storage.load().unwrap();
    assert_eq!(store.transactions().len(), 1);
    let tx = &store.transactions()[0];
    assert_eq!(tx.description, "Coffee");
    assert_eq!(tx.kind, TransactionKind::Expense);
    assert_eq!(tx.date.to_string(), "2026-08-24");
}

#[test]
fn test_cmd_add_income_and_tags() {
    let (_dir, storage) = setup_test_storage();

    commands::cmd_add(
        &storage,
        2500.0,
        "Salary",
        "income",
        Some("2026-08-01"),
        true,
        false,
        Some("work, monthly"),
    )
    .unwrap();

    let store = storage.load().unwrap();
    let tx = &store.transactions()[0];
    assert_eq!(tx.kind, TransactionKind::Income);
    assert_eq!(tx.tags, vec!["work".to_string(), "monthly".to_string()]);
}

#[test]
fn test_cmd_add_rejects_bad_date() {
    let (_dir, storage) = setup_test_storage();

    let result = commands::cmd_add(
        &storage,
        5.0,
        "Bus",
        "transport",
        Some("24/08/2026"),
        false,
        false,
        None,
    );
    assert!(result.is_err());
    assert!(storage.load().unwrap().transactions().is_empty());
}

#[test]
fn test_cmd_add_rejects_invalid_amount() {
    let (_dir, storage) = setup_test_storage();

    let result = commands::cmd_add(&storage, 0.0, "Zero", "food", None, false, false, None);
    assert!(result.is_err());
}

#[test]
fn test_cmd_delete_removes_transaction() {
    let (_dir, storage) = setup_test_storage();

    commands::cmd_add(&storage, 5.0, "Bus", "transport", None, false, false, None).unwrap();
    let id = storage.load().unwrap().transactions()[0].id.clone();

    commands::cmd_delete(&storage, &id).unwrap();
    assert!(storage.load().unwrap().transactions().is_empty());
}

#[test]
fn test_cmd_delete_missing_is_error() {
    let (_dir, storage) = setup_test_storage();
    assert!(commands::cmd_delete(&storage, "12345").is_err());
}

#[test]
fn test_cmd_list_runs_on_empty_and_filled_store() {
    let (_dir, storage) = setup_test_storage();
    assert!(commands::cmd_list(&storage, None, 20).is_ok());

    commands::cmd_add(&storage, 12.5, "Coffee", "food", None, false, false, None).unwrap();
    assert!(commands::cmd_list(&storage, None, 20).is_ok());
    assert!(commands::cmd_list(&storage, Some("food"), 20).is_ok());
}

// ========== Budget Command Tests ==========

#[test]
fn test_cmd_budget_set_and_remove() {
    let (_dir, storage) = setup_test_storage();

    commands::cmd_budget_set(&storage, "food", 300.0, "monthly").unwrap();
    let store = storage.load().unwrap();
    assert_eq!(store.budgets().len(), 1);
    assert_eq!(store.get_budget("food").unwrap().period, BudgetPeriod::Monthly);

    commands::cmd_budget_remove(&storage, "food").unwrap();
    assert!(storage.load().unwrap().budgets().is_empty());
}

#[test]
fn test_cmd_budget_set_replaces_existing() {
    let (_dir, storage) = setup_test_storage();

    commands::cmd_budget_set(&storage, "food", 300.0, "monthly").unwrap();
    commands::cmd_budget_set(&storage, "food", 100.0, "weekly").unwrap();

    let store = storage.load().unwrap();
    assert_eq!(store.budgets().len(), 1);
    let food = store.get_budget("food").unwrap();
    assert_eq!(food.limit, 100.0);
    assert_eq!(food.period, BudgetPeriod::Weekly);
}

#[test]
fn test_cmd_budget_set_rejects_bad_period() {
    let (_dir, storage) = setup_test_storage();
    assert!(commands::cmd_budget_set(&storage, "food", 300.0, "yearly").is_err());
}

#[test]
fn test_cmd_budget_list_runs() {
    let (_dir, storage) = setup_test_storage();
    assert!(commands::cmd_budget_list(&storage).is_ok());

    commands::cmd_budget_set(&storage, "food", 300.0, "monthly").unwrap();
    commands::cmd_add(&storage, 290.0, "Groceries", "food", None, false, false, None).unwrap();
    assert!(commands::cmd_budget_list(&storage).is_ok());
}

// ========== Reporting Command Tests ==========

#[test]
fn test_cmd_dashboard_and_insights_run() {
    let (_dir, storage) = setup_test_storage();
    assert!(commands::cmd_dashboard(&storage).is_ok());
    assert!(commands::cmd_insights(&storage).is_ok());

    commands::cmd_add(&storage, 12.5, "Coffee", "food", None, false, true, None).unwrap();
    assert!(commands::cmd_dashboard(&storage).is_ok());
    assert!(commands::cmd_insights(&storage).is_ok());
}

#[test]
fn test_cmd_status_runs() {
    let (_dir, storage) = setup_test_storage();
    assert!(commands::cmd_status(&storage).is_ok());
}

// ========== Helper Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exactly ten", 11), "exactly ten");
    assert_eq!(truncate("this is far too long", 10), "this is...");
}

#[test]
fn test_truncate_cuts_on_char_boundaries() {
    assert_eq!(truncate("🍕🍕🍕🍕🍕🍕🍕🍕🍕🍕", 5), "🍕🍕...");
    assert_eq!(truncate("🍕🍕🍕", 5), "🍕🍕🍕");
    assert_eq!(truncate("crème brûlée délicieuse", 10), "crème b...");
}

#[test]
fn test_cmd_list_handles_multibyte_descriptions() {
    let (_dir, storage) = setup_test_storage();

    commands::cmd_add(
        &storage,
        18.0,
        "🍕🍕🍕🍕🍕🍕🍕🍕🍕🍕🍕🍕🍕🍕🍕🍕🍕🍕",
        "food",
        None,
        false,
        false,
        None,
    )
    .unwrap();

    assert!(commands::cmd_list(&storage, None, 20).is_ok());
    assert!(commands::cmd_dashboard(&storage).is_ok());
}
