//! Faculty experience service client

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::{ClientError, ClientResult, ExperienceSource};
use crate::config::ExperienceConfig;
use crate::models::FacultyExperience;

/// Client for the external HR/academic-records experience service.
pub struct ExperienceClient {
    http: Client,
    url_template: String,
    timeout: Duration,
}

impl ExperienceClient {
    /// Create a new experience client.
    pub fn new(http: Client, config: &ExperienceConfig) -> Self {
        Self {
            http,
            url_template: config.url_template.clone(),
            timeout: config.request_timeout(),
        }
    }

    fn url_for(&self, faculty_id: &str) -> String {
        self.url_template.replace("{faculty_id}", faculty_id)
    }
}

#[async_trait]
impl ExperienceSource for ExperienceClient {
    async fn fetch(&self, faculty_id: &str) -> ClientResult<FacultyExperience> {
        let url = self.url_for(faculty_id);
        debug!(faculty_id = %faculty_id, url = %url, "Fetching faculty experience");

        let response = self.http.get(&url).timeout(self.timeout).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Api(format!(
                "experience service returned {} for faculty {}",
                status, faculty_id
            )));
        }

        response
            .json::<FacultyExperience>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}
