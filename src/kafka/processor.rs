//! Per-event processing pipeline
//!
//! The processor runs the five-step decision pipeline for a single candidate
//! event: extract identifiers, fetch faculty experience, fetch course
//! details, consult the LLM, report the result. Every step is best-effort;
//! `process` never fails and every event yields exactly one submit attempt.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::clients::{CourseSource, ExperienceSource, RecommendationEngine, ResultSink};
use crate::models::{
    AssignmentCandidateEvent, CourseDetails, FacultyExperience, RecommendationResult,
};

/// Orchestrates the collaborators for a single event.
#[derive(Clone)]
pub struct EventProcessor {
    experience: Arc<dyn ExperienceSource>,
    courses: Arc<dyn CourseSource>,
    engine: Arc<dyn RecommendationEngine>,
    sink: Arc<dyn ResultSink>,
}

/// Outcome of one processing pass, returned for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingReport {
    /// The recommendation that was submitted (or attempted)
    pub result: RecommendationResult,

    /// Whether the backend accepted the submission
    pub submitted: bool,
}

impl EventProcessor {
    /// Create a new event processor.
    pub fn new(
        experience: Arc<dyn ExperienceSource>,
        courses: Arc<dyn CourseSource>,
        engine: Arc<dyn RecommendationEngine>,
        sink: Arc<dyn ResultSink>,
    ) -> Self {
        Self {
            experience,
            courses,
            engine,
            sink,
        }
    }

    /// Run the pipeline for a single candidate event.
    ///
    /// Collaborator failures are logged and replaced with their documented
    /// defaults: empty enrichment data for the fetchers, a negative
    /// recommendation for the engine. A failed submission is logged and
    /// reflected in the report; the recommendation is not retried.
    pub async fn process(&self, event: &AssignmentCandidateEvent) -> ProcessingReport {
        let faculty_id = event.faculty_id_text();
        let course_id = event.course_id_text();

        info!(
            faculty_id = %faculty_id,
            course_id = %course_id,
            term_id = %event.term_id_text(),
            preference_rank = ?event.preference_rank,
            "Processing assignment candidate"
        );

        let faculty = match self.experience.fetch(&faculty_id).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(
                    error = %e,
                    faculty_id = %faculty_id,
                    "Faculty experience lookup failed, continuing with empty profile"
                );
                FacultyExperience::default()
            },
        };

        let course = match self.courses.fetch(&course_id).await {
            Ok(details) => details,
            Err(e) => {
                warn!(
                    error = %e,
                    course_id = %course_id,
                    "Course detail lookup failed, continuing without course metadata"
                );
                CourseDetails::default()
            },
        };

        // A failed consultation is recorded as a negative recommendation,
        // indistinguishable downstream from a genuine "NO".
        let recommended = match self.engine.recommend(&faculty, &course).await {
            Ok(decision) => decision,
            Err(e) => {
                warn!(
                    error = %e,
                    faculty_id = %faculty_id,
                    course_id = %course_id,
                    "LLM consultation failed, recording a negative recommendation"
                );
                false
            },
        };

        let result = RecommendationResult {
            faculty_id,
            course_id,
            recommended,
        };

        let submitted = match self.sink.submit(&result).await {
            Ok(()) => true,
            Err(e) => {
                error!(
                    error = %e,
                    faculty_id = %result.faculty_id,
                    course_id = %result.course_id,
                    "Failed to submit recommendation"
                );
                false
            },
        };

        ProcessingReport { result, submitted }
    }
}
