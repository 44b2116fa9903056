//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ExpenseFlow - Track spending, budgets, and insights
#[derive(Parser)]
#[command(name = "expenseflow")]
#[command(about = "Personal finance tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a transaction
    Add {
        /// Amount (always positive; use --income for money in)
        amount: f64,

        /// What the money was for
        description: String,

        /// Category (e.g. food, transport, bills)
        category: String,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Record as income instead of an expense
        #[arg(long)]
        income: bool,

        /// Mark as a recurring charge (subscriptions, rent)
        #[arg(long)]
        recurring: bool,

        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },

    /// List transactions, newest first
    List {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,

        /// Maximum number to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Delete a transaction by id
    Delete {
        /// Transaction id (shown by 'list')
        id: String,
    },

    /// Manage category budgets
    Budget {
        #[command(subcommand)]
        action: Option<BudgetAction>,
    },

    /// Show the spending dashboard
    Dashboard,

    /// Show spending insights
    Insights,

    /// Show data location and record counts
    Status,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3001")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Allowed CORS origin (repeatable)
        #[arg(long)]
        cors_origin: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum BudgetAction {
    /// Set the budget for a category (replaces any existing one)
    Set {
        /// Category the budget applies to
        category: String,

        /// Spending limit (must be positive)
        limit: f64,

        /// Budget period: monthly or weekly
        #[arg(long, default_value = "monthly")]
        period: String,
    },

    /// List budgets with current spending
    List,

    /// Remove the budget for a category
    Remove {
        /// Category whose budget to remove
        category: String,
    },
}
