//! After-10th stream advice assembled from the built-in stream catalog.

use std::sync::Arc;

use chrono::NaiveDate;
use pathway_advisor::recommendation::{
    InterestCode, InterestVector, MatchingEngine, ProfileStore, RecommendationService, StoreError,
    StudentId, StudentProfile, SubjectMark, TrackCatalog, TrackCategory, TrackKind,
};

struct SingleStudent(StudentProfile);

impl ProfileStore for SingleStudent {
    fn fetch(&self, id: &StudentId) -> Result<Option<StudentProfile>, StoreError> {
        Ok((id.0 == "stu-arts").then(|| self.0.clone()))
    }
}

fn arts_student() -> StudentProfile {
    StudentProfile {
        interests: InterestVector::from_pairs([
            (InterestCode::Artistic, 26.0),
            (InterestCode::Social, 22.0),
            (InterestCode::Investigative, 9.0),
            (InterestCode::Conventional, 3.0),
        ]),
        subject_marks: vec![
            SubjectMark::with_percentage("English", 92.0),
            SubjectMark::with_percentage("History", 88.0),
            SubjectMark::with_percentage("Political Science", 85.0),
            SubjectMark::with_percentage("Mathematics", 58.0),
        ],
        ..StudentProfile::default()
    }
}

fn service() -> RecommendationService<SingleStudent> {
    RecommendationService::new(
        Arc::new(SingleStudent(arts_student())),
        Arc::new(MatchingEngine::standard().expect("patterns compile")),
        Arc::new(TrackCatalog::builtin_courses()),
        Arc::new(TrackCatalog::builtin_streams()),
    )
}

fn evaluated_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 31).expect("valid date")
}

#[test]
fn arts_leaning_student_is_steered_to_an_arts_stream() {
    let service = service();
    let report = service
        .recommend_streams_for(&StudentId("stu-arts".to_string()), evaluated_on())
        .expect("stream report");

    let top = &report.all_scores[0];
    assert_eq!(top.track.category, TrackCategory::Arts, "top was {}", top.track.id);
    assert_eq!(report.confidence, top.score);
    assert!(report
        .college_types
        .contains(&"Central Universities".to_string()));
    assert!(!report.subjects_to_focus.is_empty());
    assert_eq!(
        report.score_analysis.riasec_top3,
        vec![
            InterestCode::Artistic,
            InterestCode::Social,
            InterestCode::Investigative
        ]
    );
    assert_eq!(report.all_scores.len(), service.catalog(TrackKind::Stream).len());
}

#[test]
fn stream_report_serializes_with_snake_case_fields() {
    let report = service()
        .recommend_streams(&arts_student(), evaluated_on())
        .expect("stream report");

    let json = serde_json::to_value(&report).expect("serializes");
    for field in [
        "recommended_stream",
        "stream_fit",
        "confidence",
        "reasoning",
        "score_analysis",
        "alternative_stream",
        "entrance_exams",
        "all_scores",
        "data_used",
    ] {
        assert!(json.get(field).is_some(), "missing {field}");
    }
    assert_eq!(json["evaluated_on"], "2025-03-31");
    assert_eq!(json["data_used"]["has_projects"], false);
}

#[test]
fn repeated_reports_are_identical() {
    let service = service();
    let first = service
        .recommend_streams(&arts_student(), evaluated_on())
        .expect("stream report");
    let second = service
        .recommend_streams(&arts_student(), evaluated_on())
        .expect("stream report");
    assert_eq!(first, second);
}
