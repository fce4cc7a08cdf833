//! Analysis endpoint

use komfyr_core::domain::analysis::AnalysisResponse;
use komfyr_core::dto::analysis::AnalyzeRequest;

use crate::error::Result;
use crate::{KomfyrClient, RequestOptions};

impl KomfyrClient {
    /// Trigger an analysis of a group (or of all logs)
    ///
    /// The service may answer from its cache; `cached` on the response says
    /// whether it did. Set `refresh` on the request to force a new analysis.
    ///
    /// # Example
    /// ```no_run
    /// # use komfyr_client::KomfyrClient;
    /// # use komfyr_core::dto::analysis::AnalyzeRequest;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = KomfyrClient::new("http://localhost:8080/api");
    /// let response = client
    ///     .analyze("kmf_example", &AnalyzeRequest::for_group("restaurant-a:*").refresh())
    ///     .await?;
    /// println!("{}", response.analysis.ai_insights.summary());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn analyze(&self, api_key: &str, req: &AnalyzeRequest) -> Result<AnalysisResponse> {
        let options = RequestOptions::post().query(req.to_query_pairs());
        self.request(api_key, "/analyze", options).await
    }
}
