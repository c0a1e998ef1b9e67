use super::common::*;
use crate::recommendation::catalog::TrackKind;
use crate::recommendation::domain::{SubjectMark, TrackCategory};
use crate::recommendation::repository::{StoreError, StudentId};
use crate::recommendation::RecommendationError;

#[test]
fn recommend_courses_reports_data_used() {
    let service = build_service(MemoryStore::default());
    let report = service
        .recommend_courses(&rich_profile(), None, evaluated_on())
        .expect("recommendations");

    assert_eq!(report.evaluated_on, evaluated_on());
    assert_eq!(report.recommendations.len(), service.catalog(TrackKind::Course).len());
    assert!(report.data_used.has_interests);
    assert!(report.data_used.has_academic_data);
    assert!(report.data_used.has_projects);
    assert!(report.data_used.has_experiences);
}

#[test]
fn recommend_courses_applies_category_filter() {
    let service = build_service(MemoryStore::default());
    let report = service
        .recommend_courses(&rich_profile(), Some("Arts"), evaluated_on())
        .expect("recommendations");

    assert!(!report.recommendations.is_empty());
    assert!(report
        .recommendations
        .iter()
        .all(|entry| entry.track.category == TrackCategory::Arts));
}

#[test]
fn invalid_profiles_are_rejected_before_scoring() {
    let service = build_service(MemoryStore::default());
    let mut profile = rich_profile();
    profile
        .subject_marks
        .push(SubjectMark::with_percentage("Biology", 140.0));

    match service.recommend_courses(&profile, None, evaluated_on()) {
        Err(RecommendationError::InvalidProfile(_)) => {}
        other => panic!("expected invalid profile, got {other:?}"),
    }
    assert!(matches!(
        service.recommend_streams(&profile, evaluated_on()),
        Err(RecommendationError::InvalidProfile(_))
    ));
}

#[test]
fn stored_profiles_are_looked_up_by_student() {
    let service = build_service(MemoryStore::with("stu-1", rich_profile()));

    let stored = service
        .recommend_courses_for(&StudentId("stu-1".to_string()), None, evaluated_on())
        .expect("stored profile");
    let inline = service
        .recommend_courses(&rich_profile(), None, evaluated_on())
        .expect("inline profile");
    assert_eq!(stored, inline);

    match service.recommend_streams_for(&StudentId("stu-2".to_string()), evaluated_on()) {
        Err(RecommendationError::StudentNotFound(id)) => assert_eq!(id.0, "stu-2"),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn store_failures_propagate() {
    let service = build_service(UnavailableStore);
    let err = service
        .recommend_courses_for(&StudentId("stu-1".to_string()), None, evaluated_on())
        .expect_err("store offline");

    assert!(matches!(
        err,
        RecommendationError::Store(StoreError::Unavailable(_))
    ));
    assert!(err.to_string().contains("offline"));
}
