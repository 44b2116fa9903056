//! Insight Engine - heuristic spending insights
//!
//! A pluggable rule registry that surfaces advisory messages from the
//! current transaction list. Each rule is a pure function of the transaction
//! snapshot and a reference date; rules run in a fixed order and a rule with
//! no triggering data simply produces nothing.
//!
//! Despite the product's "AI-powered" framing these are rule-based
//! thresholds, not statistical inference.
//!
//! ## Built-in rules, in order
//!
//! 1. Month-over-month spending change
//! 2. Dominant category
//! 3. Weekday concentration
//! 4. Average transaction size
//! 5. Recurring expense load

pub mod engine;
pub mod rules;

pub use engine::{AnalysisContext, InsightEngine, InsightRule};
pub use rules::{
    AverageTransactionRule, DominantCategoryRule, MonthOverMonthRule, RecurringLoadRule,
    WeekdayConcentrationRule,
};
