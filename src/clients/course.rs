//! Backend course-detail client

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::{ClientError, ClientResult, CourseSource};
use crate::config::BackendConfig;
use crate::models::CourseDetails;

/// Client for the backend's course metadata endpoint.
pub struct CourseClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl CourseClient {
    /// Create a new course detail client.
    pub fn new(http: Client, config: &BackendConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.request_timeout(),
        }
    }

    fn url_for(&self, course_id: &str) -> String {
        format!("{}/admin/courses/{}", self.base_url, course_id)
    }
}

#[async_trait]
impl CourseSource for CourseClient {
    async fn fetch(&self, course_id: &str) -> ClientResult<CourseDetails> {
        let url = self.url_for(course_id);
        debug!(course_id = %course_id, url = %url, "Fetching course details");

        let response = self.http.get(&url).timeout(self.timeout).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Api(format!(
                "backend returned {} for course {}",
                status, course_id
            )));
        }

        response
            .json::<CourseDetails>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}
