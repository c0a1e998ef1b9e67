use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use pathway_advisor::config::CatalogConfig;
use pathway_advisor::error::AppError;
use pathway_advisor::recommendation::{
    MarksImporter, MatchingEngine, ProfileStore, RecommendationService, StoreError, StudentId,
    StudentProfile, TrackCatalog, TrackKind,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Profiles keyed by student id, loaded once at startup.
#[derive(Debug, Default, Clone)]
pub(crate) struct InMemoryProfileStore {
    profiles: HashMap<StudentId, StudentProfile>,
}

impl InMemoryProfileStore {
    pub(crate) fn new(profiles: HashMap<StudentId, StudentProfile>) -> Self {
        Self { profiles }
    }

    /// Reads a JSON object mapping student ids to profiles.
    pub(crate) fn from_path(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        let profiles: HashMap<StudentId, StudentProfile> = serde_json::from_str(&raw)?;
        info!(path = %path.display(), students = profiles.len(), "loaded profile store");
        Ok(Self::new(profiles))
    }

    pub(crate) fn len(&self) -> usize {
        self.profiles.len()
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn fetch(&self, id: &StudentId) -> Result<Option<StudentProfile>, StoreError> {
        Ok(self.profiles.get(id).cloned())
    }
}

pub(crate) fn build_service<S>(
    store: S,
    catalogs: &CatalogConfig,
) -> Result<RecommendationService<S>, AppError>
where
    S: ProfileStore + 'static,
{
    let courses = TrackCatalog::load(TrackKind::Course, catalogs.courses_path.as_deref())?;
    let streams = TrackCatalog::load(TrackKind::Stream, catalogs.streams_path.as_deref())?;
    info!(
        courses = courses.len(),
        streams = streams.len(),
        custom_courses = catalogs.courses_path.is_some(),
        custom_streams = catalogs.streams_path.is_some(),
        "catalogs ready"
    );

    Ok(RecommendationService::new(
        Arc::new(store),
        Arc::new(MatchingEngine::standard()?),
        Arc::new(courses),
        Arc::new(streams),
    ))
}

/// Loads a profile document, optionally replacing its marks with a CSV export.
pub(crate) fn load_profile(
    profile_path: &Path,
    marks_csv: Option<&Path>,
) -> Result<StudentProfile, AppError> {
    let raw = std::fs::read_to_string(profile_path)?;
    let mut profile: StudentProfile = serde_json::from_str(&raw)?;
    if let Some(marks_path) = marks_csv {
        profile.subject_marks = MarksImporter::from_path(marks_path)?;
    }
    Ok(profile)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_kind(raw: &str) -> Result<TrackKind, String> {
    TrackKind::from_segment(raw).ok_or_else(|| format!("'{raw}' is not courses or streams"))
}
