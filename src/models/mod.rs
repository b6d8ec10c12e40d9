//! Data models for CourseMatch
//!
//! This module contains the domain models used throughout the pipeline:
//! candidate events arriving from Kafka, enrichment data fetched from
//! external services, and the recommendation reported to the backend.

pub mod event;
pub mod recommendation;

// Re-export commonly used types
pub use event::AssignmentCandidateEvent;
pub use recommendation::{CourseDetails, FacultyExperience, RecommendationResult};
