//! Integration tests for the CourseMatch decision pipeline
//!
//! These tests drive the event processor end-to-end against mock
//! collaborators, covering the healthy path and the failure modes of
//! each collaborator.

use std::sync::Arc;

use coursematch::kafka::EventProcessor;
use coursematch::test_utils::{
    MockCourseSource, MockExperienceSource, MockRecommendationEngine, MockResultSink,
};
use coursematch::{
    AssignmentCandidateEvent, CourseDetails, FacultyExperience, RecommendationResult,
};

fn candidate(faculty: &str, course: &str) -> AssignmentCandidateEvent {
    serde_json::from_str(&format!(
        r#"{{"facultyId": "{}", "courseId": "{}", "termId": "2025-FALL", "preferenceRank": 1}}"#,
        faculty, course
    ))
    .unwrap()
}

/// All collaborators healthy, model answers positively.
#[tokio::test]
async fn healthy_collaborators_report_positive_recommendation() {
    let experience = Arc::new(MockExperienceSource::returning(FacultyExperience {
        experience: vec!["ML".to_string()],
        publications: vec![],
    }));
    let courses = Arc::new(MockCourseSource::returning(CourseDetails {
        code: Some("CS401".to_string()),
        name: Some("Machine Learning".to_string()),
    }));
    let engine = Arc::new(MockRecommendationEngine::returning(true));
    let sink = Arc::new(MockResultSink::new());

    let processor = EventProcessor::new(experience.clone(), courses.clone(), engine, sink.clone());
    let report = processor.process(&candidate("F1", "C1")).await;

    assert!(report.submitted);
    assert_eq!(
        sink.submissions(),
        vec![RecommendationResult {
            faculty_id: "F1".to_string(),
            course_id: "C1".to_string(),
            recommended: true,
        }]
    );

    // Enrichment was keyed by the event's identifiers.
    assert_eq!(experience.requests(), vec!["F1".to_string()]);
    assert_eq!(courses.requests(), vec!["C1".to_string()]);
}

/// LLM endpoint fails; the reported recommendation is negative.
#[tokio::test]
async fn llm_failure_reports_negative_recommendation() {
    let sink = Arc::new(MockResultSink::new());

    let processor = EventProcessor::new(
        Arc::new(MockExperienceSource::returning(FacultyExperience {
            experience: vec!["ML".to_string()],
            publications: vec!["Paper A".to_string()],
        })),
        Arc::new(MockCourseSource::returning(CourseDetails {
            code: Some("CS401".to_string()),
            name: Some("Machine Learning".to_string()),
        })),
        Arc::new(MockRecommendationEngine::failing()),
        sink.clone(),
    );

    let report = processor.process(&candidate("F1", "C1")).await;

    assert!(!report.result.recommended);
    assert!(report.submitted);
    assert_eq!(sink.submissions().len(), 1);
    assert!(!sink.submissions()[0].recommended);
}

/// Experience service is down; the pipeline still consults the LLM with an
/// empty profile and reports a result.
#[tokio::test]
async fn enrichment_failure_does_not_skip_event() {
    let engine = Arc::new(MockRecommendationEngine::returning(true));
    let sink = Arc::new(MockResultSink::new());

    let processor = EventProcessor::new(
        Arc::new(MockExperienceSource::failing()),
        Arc::new(MockCourseSource::returning(CourseDetails {
            code: Some("CS401".to_string()),
            name: Some("Machine Learning".to_string()),
        })),
        engine.clone(),
        sink.clone(),
    );

    let report = processor.process(&candidate("F1", "C1")).await;

    assert_eq!(engine.consultation_count(), 1);
    let (faculty, course) = engine.last_consultation().unwrap();
    assert!(faculty.is_empty());
    assert_eq!(course.code.as_deref(), Some("CS401"));

    assert!(report.submitted);
    assert_eq!(sink.submissions().len(), 1);
}

/// Every event yields exactly one submit attempt, even when every
/// collaborator is down.
#[tokio::test]
async fn every_event_yields_exactly_one_submit_attempt() {
    let sink = Arc::new(MockResultSink::failing());

    let processor = EventProcessor::new(
        Arc::new(MockExperienceSource::failing()),
        Arc::new(MockCourseSource::failing()),
        Arc::new(MockRecommendationEngine::failing()),
        sink.clone(),
    );

    for i in 0..3 {
        let report = processor
            .process(&candidate(&format!("F{}", i), &format!("C{}", i)))
            .await;
        assert!(!report.submitted);
    }

    assert_eq!(sink.attempts(), 3);
}

/// An event with no identifiers is processed and reported with literal
/// "None" keys rather than dropped.
#[tokio::test]
async fn sparse_event_is_still_processed() {
    let sink = Arc::new(MockResultSink::new());

    let processor = EventProcessor::new(
        Arc::new(MockExperienceSource::returning(FacultyExperience::default())),
        Arc::new(MockCourseSource::returning(CourseDetails::default())),
        Arc::new(MockRecommendationEngine::returning(false)),
        sink.clone(),
    );

    let event: AssignmentCandidateEvent = serde_json::from_str("{}").unwrap();
    let report = processor.process(&event).await;

    assert!(report.submitted);
    assert_eq!(report.result.faculty_id, "None");
    assert_eq!(report.result.course_id, "None");
}
