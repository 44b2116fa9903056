//! ExpenseFlow CLI - Personal finance tracker
//!
//! Usage:
//!   expenseflow add 12.50 "Coffee" food    Record an expense
//!   expenseflow list                       Show recent transactions
//!   expenseflow budget set food 300        Set a monthly budget
//!   expenseflow dashboard                  Month-to-date overview
//!   expenseflow serve --port 3001          Start the web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let storage = commands::open_storage(cli.data_dir.as_deref())?;

    match cli.command {
        Commands::Add {
            amount,
            description,
            category,
            date,
            income,
            recurring,
            tags,
        } => commands::cmd_add(
            &storage,
            amount,
            &description,
            &category,
            date.as_deref(),
            income,
            recurring,
            tags.as_deref(),
        ),
        Commands::List { category, limit } => {
            commands::cmd_list(&storage, category.as_deref(), limit)
        }
        Commands::Delete { id } => commands::cmd_delete(&storage, &id),
        Commands::Budget { action } => match action {
            None | Some(BudgetAction::List) => commands::cmd_budget_list(&storage),
            Some(BudgetAction::Set {
                category,
                limit,
                period,
            }) => commands::cmd_budget_set(&storage, &category, limit, &period),
            Some(BudgetAction::Remove { category }) => {
                commands::cmd_budget_remove(&storage, &category)
            }
        },
        Commands::Dashboard => commands::cmd_dashboard(&storage),
        Commands::Insights => commands::cmd_insights(&storage),
        Commands::Status => commands::cmd_status(&storage),
        Commands::Serve {
            port,
            host,
            cors_origin,
        } => commands::cmd_serve(storage, &host, port, cors_origin).await,
    }
}
