//! Health and service metadata endpoints
//!
//! The service does not check the API key here, but it is still sent so all
//! calls go through the same executor.

use komfyr_core::domain::service::{Health, ServiceInfo};

use crate::error::Result;
use crate::{KomfyrClient, RequestOptions};

impl KomfyrClient {
    /// Check that the service is up
    pub async fn health(&self, api_key: &str) -> Result<Health> {
        self.request(api_key, "/health", RequestOptions::get()).await
    }

    /// Get the service name and version from the API root
    pub async fn service_info(&self, api_key: &str) -> Result<ServiceInfo> {
        self.request(api_key, "", RequestOptions::get()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockService;
    use reqwest::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_health() {
        let mock =
            MockService::json(StatusCode::OK, json!({"status": "healthy", "service": "Komfyrvakt"}))
                .await;
        let client = KomfyrClient::new(mock.base_url());

        let health = client.health("").await.unwrap();
        assert!(health.is_healthy());
        assert_eq!(mock.single_request().path, "/api/health");
    }

    #[tokio::test]
    async fn test_service_info_uses_api_root() {
        let mock = MockService::json(
            StatusCode::OK,
            json!({
                "service": "Komfyrvakt",
                "version": "0.1.0",
                "description": "Simple logging service with AI analytics",
                "tagline": "Preventing infrastructure fires"
            }),
        )
        .await;
        let client = KomfyrClient::new(mock.base_url());

        let info = client.service_info("kmf_key").await.unwrap();
        assert_eq!(info.version, "0.1.0");
        assert_eq!(mock.single_request().path, "/api");
    }
}
