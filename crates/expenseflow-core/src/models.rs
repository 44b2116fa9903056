//! Domain models for ExpenseFlow

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a transaction moves money out or in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[default]
    Expense,
    Income,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded expense or income event
///
/// The serialized form matches the persisted ledger documents: the kind is
/// stored under the `type` key and the id is an opaque string assigned at
/// creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Always positive; direction comes from `kind`
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Flagged by the user for subscription-style charges
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A transaction as submitted by the user (before id assignment)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    #[serde(rename = "type", default)]
    pub kind: TransactionKind,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Budget period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    #[default]
    Monthly,
    Weekly,
}

impl BudgetPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Weekly => "weekly",
        }
    }
}

impl std::str::FromStr for BudgetPeriod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "weekly" => Ok(Self::Weekly),
            _ => Err(format!(
                "Unknown budget period: {} (valid: monthly, weekly)",
                s
            )),
        }
    }
}

impl std::fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A spending limit for one category
///
/// At most one budget exists per category; setting a budget for a category
/// that already has one replaces it. Spent amounts are never stored here,
/// they are derived from the transaction list at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub category: String,
    pub limit: f64,
    pub period: BudgetPeriod,
}

/// How close a budget is to its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    /// Spending is comfortably below the limit (percentage <= 80)
    Ok,
    /// Spending is above 80% but within the limit
    Near,
    /// Spending exceeds the limit
    Over,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Near => "near",
            Self::Over => "over",
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A budget joined with its derived spending for the current window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetView {
    pub category: String,
    pub limit: f64,
    pub period: BudgetPeriod,
    /// Recomputed from the transaction list, never read from storage
    pub spent: f64,
    pub percentage: f64,
    pub remaining: f64,
    pub status: BudgetStatus,
}

/// Severity of a generated insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral observation
    Info,
    /// Something improved (e.g. spending went down)
    Positive,
    /// Worth the user's attention
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Positive => "positive",
            Self::Warning => "warning",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An advisory message derived from spending patterns
///
/// Transient value object: regenerated on every pass, no identity and no
/// lifecycle beyond a single render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub severity: Severity,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_action: Option<String>,
}

impl Insight {
    pub fn new(severity: Severity, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            description: description.into(),
            recommended_action: None,
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.recommended_action = Some(action.into());
        self
    }
}

/// Expense total for one category (for dashboards and reports)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Aggregates over one time window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total_expenses: f64,
    pub total_income: f64,
    pub balance: f64,
    pub expense_count: usize,
    pub income_count: usize,
    /// Sorted by amount descending, then category name ascending
    pub category_totals: Vec<CategoryTotal>,
    /// Total expenses divided by the day-of-month of "now"; 0 when there
    /// are no expenses
    pub average_per_day: f64,
}

/// One calendar month in a trends report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTrendPoint {
    /// Month key in YYYY-MM form
    pub month: String,
    pub expenses: f64,
    pub income: f64,
    pub transaction_count: usize,
}
