//! HTTP client for a running ExpenseFlow server
//!
//! Thin async wrapper over the REST surface, used by the CLI when it talks
//! to a remote instance instead of the local data files. Each method maps to
//! exactly one endpoint; a non-2xx response becomes [`Error::Status`] with
//! the status code, with no retries.

use chrono::NaiveDate;
use reqwest::Client;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{
    Budget, BudgetView, CategoryTotal, Insight, MonthlyTrendPoint, NewTransaction, Transaction,
};

/// Client for the ExpenseFlow REST API
#[derive(Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. `http://localhost:3001`)
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), url = %response.url(), "Request failed");
            return Err(Error::Status(status.as_u16()));
        }
        Ok(response)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.http_client.get(self.url(path)).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    // Transactions

    pub async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        self.get_json("/expenses").await
    }

    pub async fn get_transaction(&self, id: &str) -> Result<Transaction> {
        self.get_json(&format!("/expenses/{}", id)).await
    }

    pub async fn create_transaction(&self, new: &NewTransaction) -> Result<Transaction> {
        let response = self
            .http_client
            .post(self.url("/expenses"))
            .json(new)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn update_transaction(&self, id: &str, new: &NewTransaction) -> Result<Transaction> {
        let response = self
            .http_client
            .put(self.url(&format!("/expenses/{}", id)))
            .json(new)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn delete_transaction(&self, id: &str) -> Result<()> {
        let response = self
            .http_client
            .delete(self.url(&format!("/expenses/{}", id)))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn transactions_by_category(&self, category: &str) -> Result<Vec<Transaction>> {
        self.get_json(&format!("/expenses/category/{}", category))
            .await
    }

    pub async fn transactions_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>> {
        self.get_json(&format!("/expenses/date-range?start={}&end={}", start, end))
            .await
    }

    // Budgets

    pub async fn list_budgets(&self) -> Result<Vec<Budget>> {
        self.get_json("/budgets").await
    }

    pub async fn set_budget(&self, budget: &Budget) -> Result<Budget> {
        let response = self
            .http_client
            .post(self.url("/budgets"))
            .json(budget)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn remove_budget(&self, category: &str) -> Result<()> {
        let response = self
            .http_client
            .delete(self.url(&format!("/budgets/{}", category)))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    // Analytics

    pub async fn spending_by_category(&self, period: Option<&str>) -> Result<Vec<CategoryTotal>> {
        let path = match period {
            Some(p) => format!("/analytics/spending-by-category?period={}", p),
            None => "/analytics/spending-by-category".to_string(),
        };
        self.get_json(&path).await
    }

    pub async fn monthly_trends(&self) -> Result<Vec<MonthlyTrendPoint>> {
        self.get_json("/analytics/monthly-trends").await
    }

    pub async fn budget_comparison(&self) -> Result<Vec<BudgetView>> {
        self.get_json("/analytics/budget-comparison").await
    }

    pub async fn insights(&self) -> Result<Vec<Insight>> {
        self.get_json("/analytics/insights").await
    }
}
