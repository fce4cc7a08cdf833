//! Log ingest and query endpoints

use komfyr_core::domain::log::StoredLog;
use komfyr_core::dto::log::{BatchIngest, LogQuery, NewLog};

use crate::error::{ClientError, Result};
use crate::{KomfyrClient, RequestOptions};

impl KomfyrClient {
    // =============================================================================
    // Log Queries
    // =============================================================================

    /// List logs matching a filter
    ///
    /// An empty [`LogQuery`] requests `/logs` with no query string; the service
    /// then applies its own default limit.
    ///
    /// # Example
    /// ```no_run
    /// # use komfyr_client::KomfyrClient;
    /// # use komfyr_core::dto::log::LogQuery;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = KomfyrClient::new("http://localhost:8080/api");
    /// let logs = client
    ///     .list_logs("kmf_example", &LogQuery::new().group("restaurant-a:*").tags(["fridge-1"]))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_logs(&self, api_key: &str, query: &LogQuery) -> Result<Vec<StoredLog>> {
        let options = RequestOptions::get().query(query.to_query_pairs());
        self.request(api_key, "/logs", options).await
    }

    /// Get a single log by ID
    ///
    /// Fails with a 404 [`ClientError::Api`] when the log does not exist (or
    /// has expired). IDs that are not a single path segment (empty, `.`, `..`,
    /// or containing `/`, `?` or `#`) are rejected before any request is sent.
    pub async fn get_log(&self, api_key: &str, log_id: &str) -> Result<StoredLog> {
        if matches!(log_id, "" | "." | "..") || log_id.contains(['/', '?', '#']) {
            return Err(ClientError::InvalidRequest(format!(
                "invalid log ID '{}'",
                log_id
            )));
        }

        let path = format!("/logs/{}", log_id);
        self.request(api_key, &path, RequestOptions::get()).await
    }

    // =============================================================================
    // Log Ingest
    // =============================================================================

    /// Store a single log entry
    ///
    /// # Returns
    /// The stored log, with the ID and timestamp assigned by the service
    pub async fn create_log(&self, api_key: &str, log: &NewLog) -> Result<StoredLog> {
        let options = RequestOptions::post().json(log)?;
        self.request(api_key, "/logs", options).await
    }

    /// Store several log entries in one request
    ///
    /// An empty batch is rejected without contacting the service.
    pub async fn create_logs(&self, api_key: &str, logs: &[NewLog]) -> Result<BatchIngest> {
        if logs.is_empty() {
            return Err(ClientError::InvalidRequest("empty log batch".into()));
        }

        let options = RequestOptions::post().json(logs)?;
        self.request(api_key, "/logs/batch", options).await
    }
}
