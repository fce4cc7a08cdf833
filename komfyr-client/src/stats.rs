//! Storage statistics, group listing and purge endpoints

use komfyr_core::domain::stats::Stats;
use komfyr_core::dto::log::PurgeResult;

use crate::error::Result;
use crate::{KomfyrClient, RequestOptions, unwrap_envelope};

impl KomfyrClient {
    /// Get storage statistics
    pub async fn stats(&self, api_key: &str) -> Result<Stats> {
        let envelope = self.request(api_key, "/stats", RequestOptions::get()).await?;
        unwrap_envelope(envelope, "stats")
    }

    /// List every group that currently has logs, sorted alphabetically
    pub async fn list_groups(&self, api_key: &str) -> Result<Vec<String>> {
        let envelope = self.request(api_key, "/groups", RequestOptions::get()).await?;
        unwrap_envelope(envelope, "groups")
    }

    /// Delete logs from the service
    ///
    /// With `group`, only that group is purged (a trailing `*` purges by
    /// prefix). Without it, **every** log is deleted. This cannot be undone.
    pub async fn purge_logs(&self, api_key: &str, group: Option<&str>) -> Result<PurgeResult> {
        let options = RequestOptions::delete().query(
            group
                .filter(|g| !g.is_empty())
                .map(|g| ("group", g.to_string())),
        );
        let envelope = self.request(api_key, "/purge", options).await?;
        unwrap_envelope(envelope, "result")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::mock::MockService;
    use komfyr_core::dto::log::PurgeScope;
    use reqwest::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_stats_unwraps_envelope() {
        let mock = MockService::json(
            StatusCode::OK,
            json!({
                "status": "success",
                "stats": {"total_logs": 42, "storage": "redis", "retention_hours": 48}
            }),
        )
        .await;
        let client = KomfyrClient::new(mock.base_url());

        let stats = client.stats("kmf_key").await.unwrap();
        assert_eq!(
            stats,
            Stats {
                total_logs: 42,
                storage: "redis".to_string(),
                retention_hours: 48,
            }
        );
        assert_eq!(mock.single_request().path, "/api/stats");
    }

    #[tokio::test]
    async fn test_stats_missing_field() {
        let mock = MockService::json(StatusCode::OK, json!({"status": "success"})).await;
        let client = KomfyrClient::new(mock.base_url());

        let err = client.stats("kmf_key").await.unwrap_err();
        assert!(matches!(err, ClientError::MissingField(ref f) if f == "stats"));
    }

    #[tokio::test]
    async fn test_list_groups_unwraps_envelope() {
        let mock = MockService::json(
            StatusCode::OK,
            json!({"status": "success", "groups": ["restaurant-a:fridge-1", "service:api"], "count": 2}),
        )
        .await;
        let client = KomfyrClient::new(mock.base_url());

        let groups = client.list_groups("kmf_key").await.unwrap();
        assert_eq!(groups, vec!["restaurant-a:fridge-1", "service:api"]);
        assert_eq!(mock.single_request().path, "/api/groups");
    }

    #[tokio::test]
    async fn test_purge_all_has_no_query() {
        let mock = MockService::json(
            StatusCode::OK,
            json!({"status": "success", "result": {"purged": 10, "indexes_cleared": 25, "scope": "all"}}),
        )
        .await;
        let client = KomfyrClient::new(mock.base_url());

        let result = client.purge_logs("kmf_key", None).await.unwrap();
        assert_eq!(result.purged, 10);
        assert_eq!(result.scope, PurgeScope::All);

        let request = mock.single_request();
        assert_eq!(request.method, "DELETE");
        assert_eq!(request.path, "/api/purge");
        assert_eq!(request.query, None);
    }

    #[tokio::test]
    async fn test_purge_group() {
        let mock = MockService::json(
            StatusCode::OK,
            json!({"status": "success", "result": {"purged": 3, "group": "sensors", "scope": "group"}}),
        )
        .await;
        let client = KomfyrClient::new(mock.base_url());

        let result = client.purge_logs("kmf_key", Some("sensors")).await.unwrap();
        assert_eq!(result.purged, 3);
        assert_eq!(result.group.as_deref(), Some("sensors"));

        let request = mock.single_request();
        assert_eq!(request.path, "/api/purge");
        assert_eq!(request.query.as_deref(), Some("group=sensors"));
    }

    #[tokio::test]
    async fn test_purge_rejected() {
        let mock =
            MockService::json(StatusCode::UNAUTHORIZED, json!({"detail": "Invalid API key"})).await;
        let client = KomfyrClient::new(mock.base_url());

        let err = client.purge_logs("wrong", Some("sensors")).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Invalid API key");
    }
}
