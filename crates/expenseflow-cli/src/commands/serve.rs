//! Web server command implementation

use anyhow::Result;

use expenseflow_core::storage::Storage;
use expenseflow_server::ServerConfig;

use super::load_store;

pub async fn cmd_serve(
    storage: Storage,
    host: &str,
    port: u16,
    cors_origins: Vec<String>,
) -> Result<()> {
    let store = load_store(&storage)?;

    println!("🚀 ExpenseFlow server");
    println!("   Data: {}", storage.data_dir().display());
    println!(
        "   Loaded {} transactions, {} budgets",
        store.transactions().len(),
        store.budgets().len()
    );
    println!("   Listening on http://{}:{}", host, port);

    let config = ServerConfig {
        allowed_origins: cors_origins,
    };

    expenseflow_server::serve(store, Some(storage), host, port, config).await
}
