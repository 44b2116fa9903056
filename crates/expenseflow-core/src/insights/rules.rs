//! Built-in insight rules
//!
//! Each rule windows the transaction list itself and is omitted from the
//! output when its triggering data is absent. Rankings use explicit
//! tie-breaks (amount descending, then category name ascending or lower
//! weekday index) so the output is deterministic for a given snapshot.

use chrono::{Datelike, Duration, NaiveDate};

use crate::aggregate::{self, Window};
use crate::models::{Insight, Severity, Transaction, TransactionKind};

use super::engine::{AnalysisContext, InsightRule};

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Sum of expense amounts with dates in `[from, to)`
fn expense_total_in_range(transactions: &[Transaction], from: NaiveDate, to: NaiveDate) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense && t.date >= from && t.date < to)
        .map(|t| t.amount)
        .sum()
}

/// Capitalize the first letter of a category for display
fn title_case(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Rule 1: compare this calendar month's expense total to last month's.
///
/// Emitted only when last month had spending and the totals differ. An
/// increase is a warning, a decrease is positive news.
pub struct MonthOverMonthRule;

impl InsightRule for MonthOverMonthRule {
    fn id(&self) -> &'static str {
        "month_over_month"
    }

    fn name(&self) -> &'static str {
        "Month-over-month change"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let month_start = aggregate::month_start(ctx.today);
        let prev_start = aggregate::previous_month_start(ctx.today);

        let current = expense_total_in_range(
            ctx.transactions,
            month_start,
            ctx.today + Duration::days(1),
        );
        let previous = expense_total_in_range(ctx.transactions, prev_start, month_start);

        // No baseline or no movement: nothing to say
        if previous <= 0.0 {
            return vec![];
        }
        let change = (current - previous) / previous * 100.0;
        if change == 0.0 {
            return vec![];
        }

        let increased = change > 0.0;
        let severity = if increased {
            Severity::Warning
        } else {
            Severity::Positive
        };
        let verb = if increased { "increased" } else { "decreased" };
        let spent_or_saved = if increased { "spent" } else { "saved" };

        let mut insight = Insight::new(
            severity,
            format!("Spending {} by {:.1}%", verb, change.abs()),
            format!(
                "Compared to last month, you've {} ${:.2}",
                spent_or_saved,
                (current - previous).abs()
            ),
        );

        if change > 10.0 {
            insight = insight.with_action("Consider reviewing your budget");
        } else if change < -10.0 {
            insight = insight.with_action("Great job saving money!");
        }

        vec![insight]
    }
}

/// Rule 2: the single category with the highest expense total this month.
///
/// A warning when the category exceeds `dominant_share` percent of the
/// month's spending, otherwise informational.
pub struct DominantCategoryRule {
    /// Share of monthly spend above which a category counts as dominant
    dominant_share: f64,
}

impl DominantCategoryRule {
    pub fn new() -> Self {
        Self {
            dominant_share: 40.0,
        }
    }
}

impl Default for DominantCategoryRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for DominantCategoryRule {
    fn id(&self) -> &'static str {
        "dominant_category"
    }

    fn name(&self) -> &'static str {
        "Dominant category"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let totals = aggregate::category_totals(ctx.transactions, Window::MonthToDate, ctx.today);
        let Some(top) = totals.first() else {
            return vec![];
        };

        let month_total: f64 = totals.iter().map(|c| c.amount).sum();
        let share = top.amount / month_total * 100.0;

        let severity = if share > self.dominant_share {
            Severity::Warning
        } else {
            Severity::Info
        };

        let mut insight = Insight::new(
            severity,
            format!("{} is your top expense", title_case(&top.category)),
            format!("${:.2} ({:.1}% of total spending)", top.amount, share),
        );
        if share > self.dominant_share {
            insight = insight.with_action("This category dominates your spending");
        }

        vec![insight]
    }
}

/// Rule 3: the day of the week with the highest cumulative expense total
/// this month (Sunday=0..Saturday=6, lower index wins ties). Always
/// informational; emitted whenever the month has any expense.
pub struct WeekdayConcentrationRule;

impl InsightRule for WeekdayConcentrationRule {
    fn id(&self) -> &'static str {
        "weekday_concentration"
    }

    fn name(&self) -> &'static str {
        "Weekday concentration"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let mut by_weekday = [0.0f64; 7];
        let mut any = false;

        for tx in ctx.transactions {
            if tx.kind != TransactionKind::Expense
                || !Window::MonthToDate.contains(tx.date, ctx.today)
            {
                continue;
            }
            by_weekday[tx.date.weekday().num_days_from_sunday() as usize] += tx.amount;
            any = true;
        }

        if !any {
            return vec![];
        }

        // Strictly-greater keeps the lowest index on ties
        let mut best = 0;
        for (day, total) in by_weekday.iter().enumerate() {
            if *total > by_weekday[best] {
                best = day;
            }
        }

        vec![Insight::new(
            Severity::Info,
            format!("You spend most on {}s", WEEKDAYS[best]),
            format!("${:.2} spent on this day of the week this month", by_weekday[best]),
        )
        .with_action("Plan ahead for high-spending days")]
    }
}

/// Rule 4: this month's total expense divided by expense count.
///
/// A warning when the average exceeds `large_average` currency units;
/// omitted when the month has no expenses.
pub struct AverageTransactionRule {
    /// Average size above which the rule escalates to a warning
    large_average: f64,
    /// Average size above which a review of large purchases is suggested
    review_threshold: f64,
}

impl AverageTransactionRule {
    pub fn new() -> Self {
        Self {
            large_average: 50.0,
            review_threshold: 100.0,
        }
    }
}

impl Default for AverageTransactionRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for AverageTransactionRule {
    fn id(&self) -> &'static str {
        "average_transaction"
    }

    fn name(&self) -> &'static str {
        "Average transaction size"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let summary = aggregate::summarize(ctx.transactions, Window::MonthToDate, ctx.today);
        if summary.expense_count == 0 {
            return vec![];
        }

        let average = summary.total_expenses / summary.expense_count as f64;
        let severity = if average > self.large_average {
            Severity::Warning
        } else {
            Severity::Info
        };

        let mut insight = Insight::new(
            severity,
            format!("Average transaction: ${:.2}", average),
            format!(
                "Based on {} transactions this month",
                summary.expense_count
            ),
        );
        if average > self.review_threshold {
            insight = insight.with_action("Consider if large purchases are necessary");
        }

        vec![insight]
    }
}

/// Rule 5: total and count of every expense ever flagged recurring.
///
/// Deliberately not windowed to the current month; a subscription recorded
/// in January is still a subscription in August.
pub struct RecurringLoadRule;

impl InsightRule for RecurringLoadRule {
    fn id(&self) -> &'static str {
        "recurring_load"
    }

    fn name(&self) -> &'static str {
        "Recurring expense load"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let recurring: Vec<&Transaction> = ctx
            .transactions
            .iter()
            .filter(|t| t.recurring && t.kind == TransactionKind::Expense)
            .collect();

        if recurring.is_empty() {
            return vec![];
        }

        let total: f64 = recurring.iter().map(|t| t.amount).sum();

        vec![Insight::new(
            Severity::Info,
            format!("${:.2} in recurring expenses", total),
            format!("{} recurring transactions tracked", recurring.len()),
        )
        .with_action("Review subscriptions and recurring payments regularly")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::InsightEngine;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn tx(amount: f64, category: &str, date: NaiveDate, kind: TransactionKind) -> Transaction {
        Transaction {
            id: format!("{}-{}-{}", category, date, amount),
            amount,
            description: category.to_string(),
            category: category.to_string(),
            date,
            kind,
            recurring: false,
            tags: vec![],
        }
    }

    fn recurring_expense(amount: f64, category: &str, date: NaiveDate) -> Transaction {
        Transaction {
            recurring: true,
            ..tx(amount, category, date, TransactionKind::Expense)
        }
    }

    #[test]
    fn test_month_over_month_increase() {
        let today = d(2026, 8, 24);
        let txs = vec![
            tx(100.0, "food", d(2026, 7, 10), TransactionKind::Expense),
            tx(150.0, "food", d(2026, 8, 5), TransactionKind::Expense),
        ];

        let insights = MonthOverMonthRule.analyze(&AnalysisContext::new(&txs, today));
        assert_eq!(insights.len(), 1);
        let insight = &insights[0];
        assert_eq!(insight.severity, Severity::Warning);
        assert!(insight.title.contains("increased by 50.0%"));
        assert!(insight.description.contains("$50.00"));
        assert_eq!(
            insight.recommended_action.as_deref(),
            Some("Consider reviewing your budget")
        );
    }

    #[test]
    fn test_month_over_month_decrease_is_positive() {
        let today = d(2026, 8, 24);
        let txs = vec![
            tx(200.0, "food", d(2026, 7, 10), TransactionKind::Expense),
            tx(100.0, "food", d(2026, 8, 5), TransactionKind::Expense),
        ];

        let insights = MonthOverMonthRule.analyze(&AnalysisContext::new(&txs, today));
        assert_eq!(insights[0].severity, Severity::Positive);
        assert!(insights[0].title.contains("decreased by 50.0%"));
        assert!(insights[0].description.contains("saved $100.00"));
    }

    #[test]
    fn test_month_over_month_omitted_without_baseline_or_change() {
        let today = d(2026, 8, 24);

        // No previous-month spending at all
        let only_current = vec![tx(150.0, "food", d(2026, 8, 5), TransactionKind::Expense)];
        assert!(MonthOverMonthRule
            .analyze(&AnalysisContext::new(&only_current, today))
            .is_empty());

        // Identical totals both months
        let flat = vec![
            tx(100.0, "food", d(2026, 7, 10), TransactionKind::Expense),
            tx(100.0, "food", d(2026, 8, 5), TransactionKind::Expense),
        ];
        assert!(MonthOverMonthRule
            .analyze(&AnalysisContext::new(&flat, today))
            .is_empty());
    }

    #[test]
    fn test_dominant_category_warning_above_forty_percent() {
        let today = d(2026, 8, 24);
        let txs = vec![
            tx(90.0, "food", d(2026, 8, 2), TransactionKind::Expense),
            tx(10.0, "transport", d(2026, 8, 3), TransactionKind::Expense),
        ];

        let insights = DominantCategoryRule::new().analyze(&AnalysisContext::new(&txs, today));
        assert_eq!(insights[0].severity, Severity::Warning);
        assert!(insights[0].title.starts_with("Food"));
        assert!(insights[0].description.contains("90.0%"));
        assert!(insights[0].recommended_action.is_some());
    }

    #[test]
    fn test_dominant_category_info_when_balanced() {
        let today = d(2026, 8, 24);
        let txs = vec![
            tx(30.0, "food", d(2026, 8, 2), TransactionKind::Expense),
            tx(30.0, "transport", d(2026, 8, 3), TransactionKind::Expense),
            tx(40.0, "bills", d(2026, 8, 4), TransactionKind::Expense),
        ];

        let insights = DominantCategoryRule::new().analyze(&AnalysisContext::new(&txs, today));
        assert_eq!(insights[0].severity, Severity::Info);
        assert!(insights[0].recommended_action.is_none());
        // bills leads at exactly 40%, which is not strictly above the threshold
        assert!(insights[0].title.starts_with("Bills"));
    }

    #[test]
    fn test_weekday_concentration_reports_heaviest_day() {
        let today = d(2026, 8, 24);
        // 2026-08-03 is a Monday, 2026-08-08 a Saturday
        let txs = vec![
            tx(10.0, "food", d(2026, 8, 3), TransactionKind::Expense),
            tx(60.0, "shopping", d(2026, 8, 8), TransactionKind::Expense),
        ];

        let insights = WeekdayConcentrationRule.analyze(&AnalysisContext::new(&txs, today));
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].severity, Severity::Info);
        assert!(insights[0].title.contains("Saturday"));
        assert!(insights[0].description.contains("$60.00"));
    }

    #[test]
    fn test_weekday_tie_breaks_toward_lower_index() {
        let today = d(2026, 8, 24);
        // Sunday 2026-08-02 and Monday 2026-08-03 tie at 25.0; Sunday wins
        let txs = vec![
            tx(25.0, "food", d(2026, 8, 3), TransactionKind::Expense),
            tx(25.0, "food", d(2026, 8, 2), TransactionKind::Expense),
        ];

        let insights = WeekdayConcentrationRule.analyze(&AnalysisContext::new(&txs, today));
        assert!(insights[0].title.contains("Sunday"));
    }

    #[test]
    fn test_average_transaction_thresholds() {
        let today = d(2026, 8, 24);
        let rule = AverageTransactionRule::new();

        // Exactly 50 stays info (warning requires strictly greater)
        let at_fifty = vec![tx(50.0, "food", d(2026, 8, 2), TransactionKind::Expense)];
        let insights = rule.analyze(&AnalysisContext::new(&at_fifty, today));
        assert_eq!(insights[0].severity, Severity::Info);
        assert!(insights[0].description.contains("1 transactions"));

        let large = vec![tx(120.0, "travel", d(2026, 8, 2), TransactionKind::Expense)];
        let insights = rule.analyze(&AnalysisContext::new(&large, today));
        assert_eq!(insights[0].severity, Severity::Warning);
        assert_eq!(
            insights[0].recommended_action.as_deref(),
            Some("Consider if large purchases are necessary")
        );
    }

    #[test]
    fn test_recurring_load_is_not_windowed() {
        let today = d(2026, 8, 24);
        let txs = vec![
            recurring_expense(15.99, "bills", d(2026, 1, 4)),
            recurring_expense(9.99, "entertainment", d(2026, 8, 4)),
            // Recurring income does not count toward the expense load
            Transaction {
                recurring: true,
                ..tx(2000.0, "income", d(2026, 8, 1), TransactionKind::Income)
            },
        ];

        let insights = RecurringLoadRule.analyze(&AnalysisContext::new(&txs, today));
        assert_eq!(insights.len(), 1);
        assert!(insights[0].title.contains("$25.98"));
        assert!(insights[0].description.contains("2 recurring"));
    }

    #[test]
    fn test_income_only_snapshot_yields_empty_insight_list() {
        let today = d(2026, 8, 24);
        let txs = vec![tx(1000.0, "income", d(2026, 8, 1), TransactionKind::Income)];

        let engine = InsightEngine::new();
        let insights = engine.analyze_all(&AnalysisContext::new(&txs, today));
        assert!(insights.is_empty());
    }

    #[test]
    fn test_rules_emit_in_fixed_order() {
        let today = d(2026, 8, 24);
        let txs = vec![
            tx(100.0, "food", d(2026, 7, 10), TransactionKind::Expense),
            tx(150.0, "food", d(2026, 8, 5), TransactionKind::Expense),
            recurring_expense(9.99, "bills", d(2026, 8, 4)),
        ];

        let engine = InsightEngine::new();
        let insights = engine.analyze_all(&AnalysisContext::new(&txs, today));

        // month-over-month, dominant category, weekday, average, recurring
        assert_eq!(insights.len(), 5);
        assert!(insights[0].title.contains("Spending increased"));
        assert!(insights[1].title.contains("top expense"));
        assert!(insights[2].title.contains("You spend most"));
        assert!(insights[3].title.contains("Average transaction"));
        assert!(insights[4].title.contains("recurring expenses"));
    }
}
