//! CourseMatch Library
//!
//! This library exposes the core modules of CourseMatch for use in integration
//! tests and as a library for other applications.

pub mod clients;
pub mod config;
pub mod error;
pub mod kafka;
pub mod logging;
pub mod models;
pub mod test_utils;

// Re-export commonly used types at the crate root
pub use config::Config;
pub use error::{Error, Result};

// Re-export model types
pub use models::{AssignmentCandidateEvent, CourseDetails, FacultyExperience, RecommendationResult};

// Re-export pipeline types
pub use kafka::{shutdown_signal, EventConsumer, EventProcessor, ProcessingReport};
