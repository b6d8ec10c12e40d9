//! Candidate event model
//!
//! An assignment candidate event is a single faculty/course pairing proposed
//! for automated LLM-assisted review. Events are produced upstream, arrive
//! as UTF-8 JSON on the Kafka topic, and are immutable once received.

use serde::{Deserialize, Serialize};

/// A course-assignment candidate as received from Kafka.
///
/// All fields are optional on the wire: an event with missing identifiers is
/// still processed, with the missing fields rendered as the literal string
/// `"None"` downstream. Unknown fields in the payload are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentCandidateEvent {
    /// Faculty member under consideration
    #[serde(default)]
    pub faculty_id: Option<String>,

    /// Course proposed for assignment
    #[serde(default)]
    pub course_id: Option<String>,

    /// Academic term the assignment applies to
    #[serde(default)]
    pub term_id: Option<String>,

    /// Faculty's stated preference rank for this course, if any
    #[serde(default)]
    pub preference_rank: Option<i32>,
}

impl AssignmentCandidateEvent {
    /// Faculty identifier, or `"None"` when absent.
    pub fn faculty_id_text(&self) -> String {
        text_or_none(&self.faculty_id)
    }

    /// Course identifier, or `"None"` when absent.
    pub fn course_id_text(&self) -> String {
        text_or_none(&self.course_id)
    }

    /// Term identifier, or `"None"` when absent.
    pub fn term_id_text(&self) -> String {
        text_or_none(&self.term_id)
    }
}

fn text_or_none(field: &Option<String>) -> String {
    field.clone().unwrap_or_else(|| "None".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_event() {
        let json = r#"{
            "facultyId": "F1",
            "courseId": "C1",
            "termId": "2025-FALL",
            "preferenceRank": 2
        }"#;

        let event: AssignmentCandidateEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.faculty_id_text(), "F1");
        assert_eq!(event.course_id_text(), "C1");
        assert_eq!(event.term_id_text(), "2025-FALL");
        assert_eq!(event.preference_rank, Some(2));
    }

    #[test]
    fn test_deserialize_sparse_event() {
        let event: AssignmentCandidateEvent = serde_json::from_str("{}").unwrap();
        assert_eq!(event.faculty_id_text(), "None");
        assert_eq!(event.course_id_text(), "None");
        assert_eq!(event.term_id_text(), "None");
        assert_eq!(event.preference_rank, None);
    }

    #[test]
    fn test_deserialize_null_rank() {
        let json = r#"{"facultyId": "F1", "courseId": "C1", "preferenceRank": null}"#;
        let event: AssignmentCandidateEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.preference_rank, None);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{"facultyId": "F1", "courseId": "C1", "requestedBy": "scheduler"}"#;
        let event: AssignmentCandidateEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.faculty_id_text(), "F1");
    }

    #[test]
    fn test_serialize_camel_case() {
        let event = AssignmentCandidateEvent {
            faculty_id: Some("F1".to_string()),
            course_id: Some("C1".to_string()),
            term_id: None,
            preference_rank: Some(1),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"facultyId\":\"F1\""));
        assert!(json.contains("\"preferenceRank\":1"));
    }
}
