use super::common::*;
use crate::recommendation::domain::{
    AptitudeScores, AssessmentResults, InterestCode, StudentProfile, TrackCategory,
};

#[test]
fn stream_report_is_built_around_the_top_stream() {
    let service = build_service(MemoryStore::default());
    let report = service
        .recommend_streams(&rich_profile(), evaluated_on())
        .expect("report builds");

    let top = report.all_scores.first().expect("streams ranked");
    let runner_up = report.all_scores.get(1).expect("second stream");

    assert_eq!(report.recommended_stream_id.as_ref(), Some(&top.track.id));
    assert_eq!(report.recommended_stream.as_deref(), Some(top.track.name.as_str()));
    assert_eq!(report.stream_fit, Some(top.band));
    assert_eq!(report.confidence, top.score);
    assert_eq!(report.alternative_stream.as_deref(), Some(runner_up.track.name.as_str()));
    assert_eq!(
        report.alternative_reason,
        Some(format!("Also a good fit with {}% match", runner_up.score))
    );
    assert_eq!(top.track.category, TrackCategory::Science);
    assert!(report.college_types.contains(&"IITs".to_string()));
    assert_eq!(report.entrance_exams, top.track.entrance_exams);
    assert_eq!(report.subjects_to_focus, top.track.focus_subjects);
    assert_eq!(report.career_paths, top.career_paths);
    assert_eq!(
        report.score_analysis.riasec_top3,
        vec![
            InterestCode::Investigative,
            InterestCode::Realistic,
            InterestCode::Conventional
        ]
    );
    assert_eq!(
        report.score_analysis.strong_aptitudes,
        vec!["mathematics (91%)".to_string(), "physics (86%)".to_string()]
    );
    assert_eq!(
        report.score_analysis.matching_pattern.as_deref(),
        Some("Science stream alignment")
    );
    assert!(report.data_used.has_experiences);
}

#[test]
fn stream_report_without_interests_recommends_nothing() {
    let service = build_service(MemoryStore::default());
    let profile = StudentProfile {
        interests: Default::default(),
        ..rich_profile()
    };
    let report = service
        .recommend_streams(&profile, evaluated_on())
        .expect("report builds");

    assert!(report.recommended_stream.is_none());
    assert!(report.stream_fit.is_none());
    assert_eq!(report.confidence, 0);
    assert!(report.all_scores.is_empty());
    assert!(report.college_types.is_empty());
    assert_eq!(report.reasoning.interests, "Based on your RIASEC profile");
    assert_eq!(report.reasoning.aptitude, "Based on your academic performance");
    assert_eq!(report.reasoning.activities, "Based on your activities");
    assert!(!report.data_used.has_interests);
    assert!(report.data_used.has_academic_data);

    let json = serde_json::to_value(&report).expect("serializes");
    assert!(json.get("recommended_stream").is_none());
    assert_eq!(json["evaluated_on"], "2025-06-02");
}

#[test]
fn reasoning_prefers_reasons_from_the_top_stream() {
    let service = build_service(MemoryStore::default());
    let report = service
        .recommend_streams(&rich_profile(), evaluated_on())
        .expect("report builds");

    assert!(report.reasoning.interests.contains("interests align"));
    let top_reasons = &report.all_scores[0].reasons;
    if let Some(aptitude) = top_reasons
        .iter()
        .find(|reason| reason.starts_with("Strong in") || reason.ends_with("performance"))
    {
        assert_eq!(&report.reasoning.aptitude, aptitude);
    }
}

#[test]
fn aptitude_results_fill_in_for_missing_marks() {
    let profile = StudentProfile {
        assessment: Some(AssessmentResults {
            riasec: scenario_interests(),
            aptitude: Some(AptitudeScores {
                numerical: Some(92.0),
                verbal: Some(50.0),
                logical: Some(70.0),
                spatial: Some(40.0),
                overall: None,
            }),
            knowledge: None,
        }),
        ..StudentProfile::default()
    };
    let service = build_service(MemoryStore::default());
    let report = service
        .recommend_streams(&profile, evaluated_on())
        .expect("report builds");

    assert!(report.recommended_stream.is_some());
    assert!(report.data_used.has_interests);
    assert!(report.data_used.has_academic_data);
    assert_eq!(
        report.score_analysis.strong_aptitudes,
        vec!["mathematics (92%)".to_string(), "chemistry (72%)".to_string()]
    );
}
