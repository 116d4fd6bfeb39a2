//! HTTP client for the PostgREST-style store surface.
//!
//! Two entry points cover everything the loader needs: equality-filtered
//! selects on a table, and named stored-function calls under `/rpc/`.
//! Every request carries the access key as both `apikey` header and
//! bearer token.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use fairway_core::{truncate_for_display, Error, Result};

use crate::config::StoreConfig;

/// Thin client over the remote store's REST surface.
pub struct RestClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestClient {
    /// Build a client from connection settings.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.key.clone(),
        })
    }

    fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, path)
    }

    /// Equality-filtered select on a table.
    ///
    /// `filters` are (column, value) pairs rendered as `column=eq.value`;
    /// `order` is an optional ordering column. Returns the decoded JSON
    /// rows.
    pub async fn select(
        &self,
        table: &str,
        columns: &str,
        filters: &[(&str, String)],
        order: Option<&str>,
    ) -> Result<Vec<Value>> {
        let mut request = self
            .client
            .get(self.rest_url(table))
            .query(&[("select", columns)]);
        for (column, value) in filters {
            request = request.query(&[(*column, format!("eq.{value}"))]);
        }
        if let Some(order) = order {
            request = request.query(&[("order", order)]);
        }

        debug!(
            subsystem = "store",
            component = "client",
            op = "select",
            table,
            filter_count = filters.len(),
            "Querying store"
        );

        let response = self.authorize(request).send().await?;
        let response = Self::check_status(response).await?;
        let rows: Vec<Value> = response.json().await?;
        Ok(rows)
    }

    /// Invoke a stored function with a JSON argument object.
    ///
    /// Returns the function's JSON result (`Null` for void functions).
    pub async fn rpc(&self, function: &str, payload: &Value) -> Result<Value> {
        debug!(
            subsystem = "store",
            component = "client",
            op = "rpc",
            function,
            "Calling stored function"
        );

        let request = self.client.post(self.rest_url(&format!("rpc/{function}")));
        let response = self.authorize(request).json(payload).send().await?;
        let response = Self::check_status(response).await?;

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Turn a non-2xx response into [`Error::Store`] carrying the status
    /// and a truncated error body.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(Error::Store(format!(
            "{status}: {}",
            truncate_for_display(body.trim())
        )))
    }
}
