//! Enrichment and recommendation models
//!
//! These structures carry the data fetched from the experience service and
//! the backend, and the final recommendation posted back. Enrichment data is
//! best-effort: both structures default to empty when a collaborator is
//! unavailable, which degrades prompt quality but never aborts the pipeline.

use serde::{Deserialize, Serialize};

/// A faculty member's teaching experience and publication record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FacultyExperience {
    /// Prior teaching/industry experience entries
    pub experience: Vec<String>,

    /// Publication titles
    pub publications: Vec<String>,
}

impl FacultyExperience {
    /// True when no enrichment data is available.
    pub fn is_empty(&self) -> bool {
        self.experience.is_empty() && self.publications.is_empty()
    }
}

/// Course metadata fetched from the backend.
///
/// The backend returns more fields than these; everything beyond the code
/// and name is irrelevant to prompt construction and ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CourseDetails {
    /// Course code, e.g. "CS401"
    pub code: Option<String>,

    /// Human-readable course name
    pub name: Option<String>,
}

/// The binary recommendation posted to the backend.
///
/// Always keyed by the identifiers of the originating event, never by values
/// derived from enrichment data.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    /// Faculty identifier from the candidate event
    pub faculty_id: String,

    /// Course identifier from the candidate event
    pub course_id: String,

    /// Whether the LLM recommended the assignment
    pub recommended: bool,
}
