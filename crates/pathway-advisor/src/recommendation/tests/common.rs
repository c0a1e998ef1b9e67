use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::recommendation::catalog::{
    InterestModel, KeywordModel, SubjectModel, TrackCatalog, TrackId, TrackKind, TrackProfile,
    TrackTraits, WeightedSubject,
};
use crate::recommendation::domain::{
    ExperienceRecord, InterestCode, InterestVector, ProjectRecord, StudentProfile, SubjectMark,
    TrackCategory,
};
use crate::recommendation::evaluation::MatchingEngine;
use crate::recommendation::repository::{ProfileStore, StoreError, StudentId};
use crate::recommendation::RecommendationService;

pub(super) fn evaluated_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).expect("valid date")
}

pub(super) fn engine() -> MatchingEngine {
    MatchingEngine::standard().expect("builtin patterns compile")
}

pub(super) fn scenario_interests() -> InterestVector {
    InterestVector::from_pairs([
        (InterestCode::Realistic, 20.0),
        (InterestCode::Investigative, 15.0),
        (InterestCode::Artistic, 2.0),
        (InterestCode::Social, 3.0),
        (InterestCode::Enterprising, 4.0),
        (InterestCode::Conventional, 5.0),
    ])
}

pub(super) fn interests_only() -> StudentProfile {
    StudentProfile {
        interests: scenario_interests(),
        ..StudentProfile::default()
    }
}

pub(super) fn project(title: &str, description: &str) -> ProjectRecord {
    ProjectRecord {
        title: title.to_string(),
        description: Some(description.to_string()),
        tech_stack: None,
    }
}

pub(super) fn tech_projects() -> Vec<ProjectRecord> {
    vec![
        project("Library portal", "python and react front end with a database"),
        project("Attendance bot", "python service with react admin and database sync"),
        project("Quiz app", "react quiz with python scoring and database storage"),
    ]
}

/// Science student with projects and a verified internship.
pub(super) fn rich_profile() -> StudentProfile {
    StudentProfile {
        interests: InterestVector::from_pairs([
            (InterestCode::Realistic, 18.0),
            (InterestCode::Investigative, 22.0),
            (InterestCode::Artistic, 6.0),
            (InterestCode::Social, 5.0),
            (InterestCode::Enterprising, 9.0),
            (InterestCode::Conventional, 11.0),
        ]),
        subject_marks: vec![
            SubjectMark::with_percentage("Mathematics", 91.0),
            SubjectMark::with_percentage("Physics", 86.0),
            SubjectMark::with_marks("Chemistry", 78.0, 100.0),
            SubjectMark::with_percentage("English", 74.0),
        ],
        projects: tech_projects(),
        experiences: vec![ExperienceRecord {
            organization: "Byte Labs".to_string(),
            role: "Software development intern".to_string(),
            description: Some("Built internal tools for 3 months".to_string()),
            verified: Some(true),
            duration: Some("3 months".to_string()),
        }],
        assessment: None,
    }
}

/// Track with a single interest model and no subjects, keywords, or traits.
pub(super) fn synthetic_track(id: &str, primary: &[InterestCode], relevance: f32) -> TrackProfile {
    TrackProfile {
        id: TrackId::new(id),
        kind: TrackKind::Course,
        name: format!("Synthetic {id}"),
        category: TrackCategory::Science,
        description: None,
        interests: InterestModel {
            primary: primary.to_vec(),
            secondary: Vec::new(),
            weights: Default::default(),
        },
        subjects: SubjectModel {
            core: vec![WeightedSubject {
                name: "physics".to_string(),
                weight: 1.0,
            }],
            aliases: Vec::new(),
        },
        keywords: KeywordModel::default(),
        career_paths: Vec::new(),
        future_relevance: Some(relevance),
        traits: TrackTraits::default(),
        entrance_exams: Vec::new(),
        best_for: None,
        focus_subjects: Vec::new(),
    }
}

pub(super) fn course(id: &str) -> TrackProfile {
    TrackCatalog::builtin_courses()
        .get(&TrackId::new(id))
        .cloned()
        .expect("builtin course exists")
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    pub(super) profiles: Arc<Mutex<HashMap<StudentId, StudentProfile>>>,
}

impl MemoryStore {
    pub(super) fn with(id: &str, profile: StudentProfile) -> Self {
        let store = Self::default();
        store
            .profiles
            .lock()
            .expect("store mutex poisoned")
            .insert(StudentId(id.to_string()), profile);
        store
    }
}

impl ProfileStore for MemoryStore {
    fn fetch(&self, id: &StudentId) -> Result<Option<StudentProfile>, StoreError> {
        let guard = self.profiles.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableStore;

impl ProfileStore for UnavailableStore {
    fn fetch(&self, _id: &StudentId) -> Result<Option<StudentProfile>, StoreError> {
        Err(StoreError::Unavailable("assessment database offline".to_string()))
    }
}

pub(super) fn build_service<S: ProfileStore + 'static>(store: S) -> RecommendationService<S> {
    RecommendationService::new(
        Arc::new(store),
        Arc::new(engine()),
        Arc::new(TrackCatalog::builtin_courses()),
        Arc::new(TrackCatalog::builtin_streams()),
    )
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
