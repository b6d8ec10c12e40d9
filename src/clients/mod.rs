//! HTTP collaborator clients
//!
//! This module provides:
//! - Faculty experience fetcher (best-effort enrichment)
//! - Course detail fetcher (best-effort enrichment)
//! - LLM chat-completion client producing a binary recommendation
//! - Result reporter posting recommendations to the backend
//!
//! Each collaborator sits behind a trait so the event processor can be
//! exercised against mocks. Every call returns an explicit `ClientResult`;
//! the best-effort defaulting policy lives in the processor, not here.

mod course;
mod faculty;
mod llm;
mod reporter;

pub use course::CourseClient;
pub use faculty::ExperienceClient;
pub use llm::CompletionClient;
pub use reporter::BackendReporter;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CourseDetails, FacultyExperience, RecommendationResult};

/// Result type for collaborator calls
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Collaborator-specific error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (timeout, connection refused, DNS)
    #[error("network error: {0}")]
    Network(String),

    /// Collaborator responded with a non-success status
    #[error("API error: {0}")]
    Api(String),

    /// Response body could not be parsed
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Parse(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

/// Source of faculty experience/publication records
#[async_trait]
pub trait ExperienceSource: Send + Sync {
    /// Fetch a faculty member's experience profile.
    async fn fetch(&self, faculty_id: &str) -> ClientResult<FacultyExperience>;
}

/// Source of course metadata
#[async_trait]
pub trait CourseSource: Send + Sync {
    /// Fetch course details from the backend.
    async fn fetch(&self, course_id: &str) -> ClientResult<CourseDetails>;
}

/// Produces a binary assignment recommendation
#[async_trait]
pub trait RecommendationEngine: Send + Sync {
    /// Decide whether the faculty member should be assigned the course.
    async fn recommend(
        &self,
        faculty: &FacultyExperience,
        course: &CourseDetails,
    ) -> ClientResult<bool>;
}

/// Accepts recommendation results
#[async_trait]
pub trait ResultSink: Send + Sync {
    /// Submit a recommendation to the backend.
    async fn submit(&self, result: &RecommendationResult) -> ClientResult<()>;
}
