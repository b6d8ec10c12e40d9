//! Backend result reporter

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};

use super::{ClientError, ClientResult, ResultSink};
use crate::config::BackendConfig;
use crate::models::RecommendationResult;

/// Posts recommendation results to the administrative backend.
pub struct BackendReporter {
    http: Client,
    result_url: String,
    timeout: Duration,
}

impl BackendReporter {
    /// Create a new reporter.
    pub fn new(http: Client, config: &BackendConfig) -> Self {
        Self {
            http,
            result_url: config.llm_result_url(),
            timeout: config.request_timeout(),
        }
    }
}

#[async_trait]
impl ResultSink for BackendReporter {
    async fn submit(&self, result: &RecommendationResult) -> ClientResult<()> {
        let response = self
            .http
            .post(&self.result_url)
            .json(result)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Result submission request failed");
                ClientError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClientError::Api(format!(
                "result submission returned {} - {}",
                status, error_text
            )));
        }

        info!(
            faculty_id = %result.faculty_id,
            course_id = %result.course_id,
            recommended = result.recommended,
            "Submitted LLM result"
        );

        Ok(())
    }
}
