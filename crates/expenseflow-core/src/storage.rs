//! Local JSON persistence
//!
//! Stores the transaction list and budget definitions as two pretty-printed
//! JSON files in a per-user data directory. The whole dataset is loaded at
//! startup and written back after every mutation; writes go through a temp
//! file in the same directory followed by a rename so a crash mid-write
//! never leaves a half-written file behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{Budget, Transaction};
use crate::store::TransactionStore;

const EXPENSES_FILE: &str = "expenses.json";
const BUDGETS_FILE: &str = "budgets.json";

/// Default per-user data directory (`~/.local/share/expenseflow` on Linux)
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("expenseflow"))
}

/// File-backed storage for a [`TransactionStore`]
pub struct Storage {
    /// Directory holding the data files
    data_dir: PathBuf,
}

impl Storage {
    /// Create storage rooted at the given directory
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();

        if !data_dir.exists() {
            fs::create_dir_all(&data_dir).map_err(|e| {
                Error::Storage(format!(
                    "Failed to create data directory {}: {}",
                    data_dir.display(),
                    e
                ))
            })?;
            info!("Created data directory: {}", data_dir.display());
        }

        Ok(Self { data_dir })
    }

    /// Create storage at the default per-user location
    pub fn open_default() -> Result<Self> {
        let dir = default_data_dir()
            .ok_or_else(|| Error::Storage("Could not determine a data directory".to_string()))?;
        Self::new(dir)
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn expenses_path(&self) -> PathBuf {
        self.data_dir.join(EXPENSES_FILE)
    }

    fn budgets_path(&self) -> PathBuf {
        self.data_dir.join(BUDGETS_FILE)
    }

    /// Load the store from disk
    ///
    /// A missing file reads as an empty list so first runs work without any
    /// setup. A present-but-malformed file is an error, never an empty list.
    pub fn load(&self) -> Result<TransactionStore> {
        let transactions: Vec<Transaction> = self.read_json(&self.expenses_path())?;
        let budgets: Vec<Budget> = self.read_json(&self.budgets_path())?;

        debug!(
            transactions = transactions.len(),
            budgets = budgets.len(),
            "Loaded data from {}",
            self.data_dir.display()
        );
        Ok(TransactionStore::new(transactions, budgets))
    }

    /// Write the store back to disk
    pub fn save(&self, store: &TransactionStore) -> Result<()> {
        self.write_json(&self.expenses_path(), store.transactions())?;
        self.write_json(&self.budgets_path(), store.budgets())?;
        debug!(
            transactions = store.transactions().len(),
            budgets = store.budgets().len(),
            "Saved data to {}",
            self.data_dir.display()
        );
        Ok(())
    }

    fn read_json<T: serde::de::DeserializeOwned + Default>(&self, path: &Path) -> Result<T> {
        if !path.exists() {
            return Ok(T::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Serialize to a temp file in the data directory, then rename over the
    /// target. The temp file must live on the same filesystem as the target
    /// for the rename to be atomic, hence `new_in` rather than the system
    /// temp directory.
    fn write_json<T: serde::Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        let json = serde_json::to_vec_pretty(value)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&self.data_dir)?;
        tmp.write_all(&json)?;
        tmp.persist(path).map_err(|e| {
            Error::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPeriod, NewTransaction, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("data")).unwrap();
        (dir, storage)
    }

    fn new_tx(amount: f64, description: &str) -> NewTransaction {
        NewTransaction {
            amount,
            description: description.to_string(),
            category: "food".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
            kind: TransactionKind::Expense,
            recurring: false,
            tags: vec![],
        }
    }

    #[test]
    fn test_new_creates_directory() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("fresh");
        assert!(!data_dir.exists());

        let _storage = Storage::new(&data_dir).unwrap();
        assert!(data_dir.exists());
    }

    #[test]
    fn test_load_from_empty_directory_is_empty_store() {
        let (_dir, storage) = setup();
        let store = storage.load().unwrap();
        assert!(store.transactions().is_empty());
        assert!(store.budgets().is_empty());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let (_dir, storage) = setup();

        let mut store = TransactionStore::default();
        store.add_transaction(new_tx(12.5, "lunch")).unwrap();
        store
            .upsert_budget(Budget {
                category: "food".to_string(),
                limit: 300.0,
                period: BudgetPeriod::Monthly,
            })
            .unwrap();
        storage.save(&store).unwrap();

        let reloaded = storage.load().unwrap();
        assert_eq!(reloaded.transactions(), store.transactions());
        assert_eq!(reloaded.budgets(), store.budgets());
    }

    #[test]
    fn test_save_serializes_unsized_slices() {
        // save() hands write_json the store's borrowed slices directly
        let (_dir, storage) = setup();

        let mut store = TransactionStore::default();
        store.add_transaction(new_tx(12.5, "lunch")).unwrap();
        let transactions: &[crate::models::Transaction] = store.transactions();
        storage
            .write_json(&storage.expenses_path(), transactions)
            .unwrap();

        let reloaded = storage.load().unwrap();
        assert_eq!(reloaded.transactions(), store.transactions());
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let (_dir, storage) = setup();

        let mut store = TransactionStore::default();
        store.add_transaction(new_tx(12.5, "lunch")).unwrap();
        storage.save(&store).unwrap();

        let id = store.transactions()[0].id.clone();
        store.delete_transaction(&id).unwrap();
        storage.save(&store).unwrap();

        assert!(storage.load().unwrap().transactions().is_empty());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let (_dir, storage) = setup();
        fs::write(storage.data_dir().join(EXPENSES_FILE), "{not json").unwrap();

        let err = storage.load().unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let (_dir, storage) = setup();
        storage.save(&TransactionStore::default()).unwrap();

        let names: Vec<String> = fs::read_dir(storage.data_dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&EXPENSES_FILE.to_string()));
        assert!(names.contains(&BUDGETS_FILE.to_string()));
    }
}
