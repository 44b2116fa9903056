//! ExpenseFlow Web Server
//!
//! Axum-based REST API over the shared transaction store. All state lives in
//! one process: handlers take the store lock, read or mutate, and (when a
//! storage backend is attached) write the ledger files back before replying.
//! Derived numbers are never cached, so every response reflects the store at
//! the moment of the request.

use std::sync::{Arc, RwLock};

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{error, info};

use expenseflow_core::error::Error as CoreError;
use expenseflow_core::storage::Storage;
use expenseflow_core::store::TransactionStore;

mod handlers;

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

/// Shared application state
pub struct AppState {
    /// The transaction store; single source of truth for every handler
    pub store: RwLock<TransactionStore>,
    /// Optional file persistence; `None` keeps everything in memory (tests)
    pub storage: Option<Storage>,
}

impl AppState {
    /// Write the store back to disk if a storage backend is attached.
    ///
    /// Called by mutating handlers while still holding the write lock, so a
    /// concurrent request can never observe a state that was not persisted.
    fn persist(&self, store: &TransactionStore) -> Result<(), AppError> {
        if let Some(storage) = &self.storage {
            storage.save(store).map_err(AppError::from_core)?;
        }
        Ok(())
    }
}

/// Success response
#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Create the application router
pub fn create_router(
    store: TransactionStore,
    storage: Option<Storage>,
    config: ServerConfig,
) -> Router {
    let state = Arc::new(AppState {
        store: RwLock::new(store),
        storage,
    });

    let api_routes = Router::new()
        // Expenses
        .route(
            "/expenses",
            get(handlers::list_expenses).post(handlers::create_expense),
        )
        .route("/expenses/date-range", get(handlers::expenses_by_date_range))
        .route(
            "/expenses/category/:category",
            get(handlers::expenses_by_category),
        )
        .route(
            "/expenses/:id",
            get(handlers::get_expense)
                .put(handlers::update_expense)
                .delete(handlers::delete_expense),
        )
        // Budgets
        .route(
            "/budgets",
            get(handlers::list_budgets).post(handlers::set_budget),
        )
        .route("/budgets/:category", axum::routing::delete(handlers::remove_budget))
        // Analytics
        .route(
            "/analytics/spending-by-category",
            get(handlers::spending_by_category),
        )
        .route("/analytics/monthly-trends", get(handlers::monthly_trends))
        .route(
            "/analytics/budget-comparison",
            get(handlers::budget_comparison),
        )
        .route("/analytics/insights", get(handlers::get_insights))
        .route("/analytics/summary", get(handlers::get_summary));

    // Build CORS layer
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
    };

    Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}

/// Start the server
pub async fn serve(
    store: TransactionStore,
    storage: Option<Storage>,
    host: &str,
    port: u16,
    config: ServerConfig,
) -> anyhow::Result<()> {
    let app = create_router(store, storage, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
            internal: None,
        }
    }

    /// Map a core library error onto an HTTP status.
    ///
    /// Validation failures are the caller's fault (400), missing records are
    /// 404, everything else is a 500 with the detail kept server-side.
    pub fn from_core(err: CoreError) -> Self {
        match err {
            CoreError::InvalidData(msg) => Self::bad_request(&msg),
            CoreError::NotFound(msg) => Self::not_found(&format!("Not found: {}", msg)),
            other => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "An internal error occurred".to_string(),
                internal: Some(other.into()),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
