//! Insight Engine - runs the registered rules over a snapshot

use chrono::NaiveDate;

use crate::models::{Insight, Transaction};

use super::rules::{
    AverageTransactionRule, DominantCategoryRule, MonthOverMonthRule, RecurringLoadRule,
    WeekdayConcentrationRule,
};

/// Context provided to insight rules
pub struct AnalysisContext<'a> {
    /// The full transaction list (rules window it as needed)
    pub transactions: &'a [Transaction],
    /// Reference "now" date all windows are computed from
    pub today: NaiveDate,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(transactions: &'a [Transaction], today: NaiveDate) -> Self {
        Self {
            transactions,
            today,
        }
    }
}

/// Trait for insight rules
pub trait InsightRule: Send + Sync {
    /// Stable identifier for logging
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Analyze the snapshot and produce zero or more insights
    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight>;
}

/// The main insight engine
pub struct InsightEngine {
    rules: Vec<Box<dyn InsightRule>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in rules.
    ///
    /// Registration order is the output order: results are concatenated as
    /// produced, not re-sorted by severity.
    pub fn new() -> Self {
        let mut engine = Self { rules: vec![] };

        engine.register(Box::new(MonthOverMonthRule));
        engine.register(Box::new(DominantCategoryRule::new()));
        engine.register(Box::new(WeekdayConcentrationRule));
        engine.register(Box::new(AverageTransactionRule::new()));
        engine.register(Box::new(RecurringLoadRule));

        engine
    }

    /// Register an insight rule
    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    /// Run every rule and collect results in registration order
    pub fn analyze_all(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let mut all = Vec::new();

        for rule in &self.rules {
            let insights = rule.analyze(ctx);
            tracing::debug!(rule = rule.id(), count = insights.len(), "Insight rule ran");
            all.extend(insights);
        }

        all
    }

    /// Identifiers of the registered rules, in run order
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }
}
