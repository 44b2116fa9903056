//! ExpenseFlow Core Library
//!
//! Shared functionality for the ExpenseFlow personal finance tracker:
//! - Transaction and budget models with their persisted JSON shape
//! - In-memory transaction store with validation and id assignment
//! - Aggregation over time windows (summaries, category totals, trends)
//! - Budget evaluation against derived spending
//! - Rule-based insight engine
//! - Local JSON persistence and a client for the REST API

pub mod aggregate;
pub mod budget;
pub mod client;
pub mod error;
pub mod insights;
pub mod models;
pub mod storage;
pub mod store;

pub use aggregate::Window;
pub use client::ApiClient;
pub use error::{Error, Result};
pub use insights::{AnalysisContext, InsightEngine, InsightRule};
pub use models::{
    Budget, BudgetPeriod, BudgetStatus, BudgetView, CategoryTotal, Insight, MonthlyTrendPoint,
    NewTransaction, Severity, Summary, Transaction, TransactionKind,
};
pub use storage::Storage;
pub use store::TransactionStore;
