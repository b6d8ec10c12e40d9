//! Test utilities for CourseMatch
//!
//! This module provides mock implementations of the HTTP collaborators for
//! exercising the event processor without a network.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::clients::{
    ClientError, ClientResult, CourseSource, ExperienceSource, RecommendationEngine, ResultSink,
};
use crate::models::{CourseDetails, FacultyExperience, RecommendationResult};

/// Mock experience service
pub struct MockExperienceSource {
    response: Option<FacultyExperience>,
    requests: Mutex<Vec<String>>,
}

impl MockExperienceSource {
    /// Mock that returns the given profile for every faculty.
    pub fn returning(profile: FacultyExperience) -> Self {
        Self {
            response: Some(profile),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Mock that fails every fetch.
    pub fn failing() -> Self {
        Self {
            response: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Faculty IDs that were requested.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExperienceSource for MockExperienceSource {
    async fn fetch(&self, faculty_id: &str) -> ClientResult<FacultyExperience> {
        self.requests.lock().unwrap().push(faculty_id.to_string());
        self.response
            .clone()
            .ok_or_else(|| ClientError::Network("mock experience service down".to_string()))
    }
}

/// Mock course detail service
pub struct MockCourseSource {
    response: Option<CourseDetails>,
    requests: Mutex<Vec<String>>,
}

impl MockCourseSource {
    /// Mock that returns the given details for every course.
    pub fn returning(details: CourseDetails) -> Self {
        Self {
            response: Some(details),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Mock that fails every fetch.
    pub fn failing() -> Self {
        Self {
            response: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Course IDs that were requested.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CourseSource for MockCourseSource {
    async fn fetch(&self, course_id: &str) -> ClientResult<CourseDetails> {
        self.requests.lock().unwrap().push(course_id.to_string());
        self.response
            .clone()
            .ok_or_else(|| ClientError::Api("mock backend returned 500".to_string()))
    }
}

/// Mock recommendation engine recording what it was asked about
pub struct MockRecommendationEngine {
    decision: Option<bool>,
    consultations: Mutex<Vec<(FacultyExperience, CourseDetails)>>,
}

impl MockRecommendationEngine {
    /// Mock that returns a fixed decision.
    pub fn returning(decision: bool) -> Self {
        Self {
            decision: Some(decision),
            consultations: Mutex::new(Vec::new()),
        }
    }

    /// Mock that fails every consultation.
    pub fn failing() -> Self {
        Self {
            decision: None,
            consultations: Mutex::new(Vec::new()),
        }
    }

    /// The enrichment data passed to the most recent consultation.
    pub fn last_consultation(&self) -> Option<(FacultyExperience, CourseDetails)> {
        self.consultations.lock().unwrap().last().cloned()
    }

    /// Number of consultations made.
    pub fn consultation_count(&self) -> usize {
        self.consultations.lock().unwrap().len()
    }
}

#[async_trait]
impl RecommendationEngine for MockRecommendationEngine {
    async fn recommend(
        &self,
        faculty: &FacultyExperience,
        course: &CourseDetails,
    ) -> ClientResult<bool> {
        self.consultations
            .lock()
            .unwrap()
            .push((faculty.clone(), course.clone()));
        self.decision
            .ok_or_else(|| ClientError::Api("mock LLM returned 500".to_string()))
    }
}

/// Mock result sink recording every submit attempt
pub struct MockResultSink {
    fail: bool,
    attempts: Mutex<Vec<RecommendationResult>>,
}

impl Default for MockResultSink {
    fn default() -> Self {
        Self::new()
    }
}

impl MockResultSink {
    /// Mock that accepts every submission.
    pub fn new() -> Self {
        Self {
            fail: false,
            attempts: Mutex::new(Vec::new()),
        }
    }

    /// Mock that rejects every submission (still records the attempt).
    pub fn failing() -> Self {
        Self {
            fail: true,
            attempts: Mutex::new(Vec::new()),
        }
    }

    /// Successfully submitted results.
    pub fn submissions(&self) -> Vec<RecommendationResult> {
        if self.fail {
            Vec::new()
        } else {
            self.attempts.lock().unwrap().clone()
        }
    }

    /// Number of submit attempts, successful or not.
    pub fn attempts(&self) -> usize {
        self.attempts.lock().unwrap().len()
    }
}

#[async_trait]
impl ResultSink for MockResultSink {
    async fn submit(&self, result: &RecommendationResult) -> ClientResult<()> {
        self.attempts.lock().unwrap().push(result.clone());
        if self.fail {
            Err(ClientError::Api(
                "mock result endpoint returned 503".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}
