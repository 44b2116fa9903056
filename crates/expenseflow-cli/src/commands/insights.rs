//! Insights command implementation

use anyhow::Result;
use chrono::Local;

use expenseflow_core::insights::{AnalysisContext, InsightEngine};
use expenseflow_core::models::Severity;
use expenseflow_core::storage::Storage;

use super::load_store;

pub fn cmd_insights(storage: &Storage) -> Result<()> {
    let store = load_store(storage)?;
    let today = Local::now().date_naive();

    let engine = InsightEngine::new();
    let insights = engine.analyze_all(&AnalysisContext::new(store.transactions(), today));

    if insights.is_empty() {
        println!("No insights yet. Record a few transactions first:");
        println!("  expenseflow add 12.50 \"Coffee\" food");
        return Ok(());
    }

    println!();
    println!("🔍 Spending Insights");
    println!("   ─────────────────────────────────────────────────────────────");

    for insight in insights {
        let icon = match insight.severity {
            Severity::Info => "💡",
            Severity::Positive => "✅",
            Severity::Warning => "⚠️ ",
        };

        println!("   {} {}", icon, insight.title);
        println!("      {}", insight.description);
        if let Some(action) = &insight.recommended_action {
            println!("      → {}", action);
        }
        println!();
    }

    Ok(())
}
