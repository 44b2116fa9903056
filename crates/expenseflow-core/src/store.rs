//! The in-memory transaction and budget store
//!
//! Single source of truth for the rest of the system. The store is an owned
//! value passed explicitly to whatever needs it; there is no ambient or
//! singleton state. All derived numbers (summaries, budget views, insights)
//! are recomputed from the store's current contents on every read.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Budget, NewTransaction, Transaction};

/// Owned transaction list plus budget definitions
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
}

impl TransactionStore {
    pub fn new(transactions: Vec<Transaction>, budgets: Vec<Budget>) -> Self {
        Self {
            transactions,
            budgets,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn get_transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Validate and record a new transaction, assigning its id.
    ///
    /// Ids are the creation time in Unix milliseconds, bumped past any
    /// existing id so that two submissions in the same millisecond stay
    /// unique and ids remain monotonic. Newest transactions go first,
    /// matching the display order of the transaction list.
    pub fn add_transaction(&mut self, new: NewTransaction) -> Result<&Transaction> {
        validate_transaction(&new)?;

        let mut id = Utc::now().timestamp_millis();
        if let Some(max) = self
            .transactions
            .iter()
            .filter_map(|t| t.id.parse::<i64>().ok())
            .max()
        {
            if id <= max {
                id = max + 1;
            }
        }

        let tx = Transaction {
            id: id.to_string(),
            amount: new.amount,
            description: new.description,
            category: new.category,
            date: new.date,
            kind: new.kind,
            recurring: new.recurring,
            tags: new.tags,
        };

        tracing::debug!(id = %tx.id, kind = %tx.kind, amount = tx.amount, "Transaction added");
        self.transactions.insert(0, tx);
        Ok(&self.transactions[0])
    }

    /// Remove a transaction by id
    pub fn delete_transaction(&mut self, id: &str) -> Result<Transaction> {
        let pos = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(format!("transaction {}", id)))?;
        Ok(self.transactions.remove(pos))
    }

    /// Replace a transaction by id, keeping the id.
    ///
    /// Only the remote surface uses this; the local flow creates and deletes.
    pub fn replace_transaction(&mut self, id: &str, new: NewTransaction) -> Result<&Transaction> {
        validate_transaction(&new)?;

        let tx = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(format!("transaction {}", id)))?;

        tx.amount = new.amount;
        tx.description = new.description;
        tx.category = new.category;
        tx.date = new.date;
        tx.kind = new.kind;
        tx.recurring = new.recurring;
        tx.tags = new.tags;
        Ok(tx)
    }

    pub fn get_budget(&self, category: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.category == category)
    }

    /// Insert or replace the budget for a category.
    ///
    /// Upsert semantics: at most one budget per category.
    pub fn upsert_budget(&mut self, budget: Budget) -> Result<()> {
        if budget.category.trim().is_empty() {
            return Err(Error::InvalidData("budget category is required".to_string()));
        }
        if !(budget.limit > 0.0) {
            return Err(Error::InvalidData(format!(
                "budget limit must be positive, got {}",
                budget.limit
            )));
        }

        match self
            .budgets
            .iter_mut()
            .find(|b| b.category == budget.category)
        {
            Some(existing) => {
                tracing::debug!(category = %budget.category, limit = budget.limit, "Budget replaced");
                *existing = budget;
            }
            None => {
                tracing::debug!(category = %budget.category, limit = budget.limit, "Budget set");
                self.budgets.push(budget);
            }
        }
        Ok(())
    }

    /// Remove the budget for a category
    pub fn remove_budget(&mut self, category: &str) -> Result<Budget> {
        let pos = self
            .budgets
            .iter()
            .position(|b| b.category == category)
            .ok_or_else(|| Error::NotFound(format!("budget for {}", category)))?;
        Ok(self.budgets.remove(pos))
    }
}

/// Reject invalid submissions before they reach the store (missing required
/// fields, non-positive amounts). Nothing is created on failure.
fn validate_transaction(new: &NewTransaction) -> Result<()> {
    if !(new.amount > 0.0) || !new.amount.is_finite() {
        return Err(Error::InvalidData(format!(
            "amount must be positive, got {}",
            new.amount
        )));
    }
    if new.description.trim().is_empty() {
        return Err(Error::InvalidData("description is required".to_string()));
    }
    if new.category.trim().is_empty() {
        return Err(Error::InvalidData("category is required".to_string()));
    }
    Ok(())
}
