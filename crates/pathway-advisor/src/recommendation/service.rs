use std::sync::Arc;

use chrono::NaiveDate;

use super::catalog::{TrackCatalog, TrackKind};
use super::domain::{ProfileError, StudentProfile};
use super::evaluation::{MatchingEngine, TrackFilter};
use super::report::{build_stream_recommendation, CourseRecommendation, StreamRecommendation};
use super::repository::{ProfileStore, StoreError, StudentId};

/// Service composing the profile store, the matching engine, and both catalogs.
pub struct RecommendationService<S> {
    store: Arc<S>,
    engine: Arc<MatchingEngine>,
    courses: Arc<TrackCatalog>,
    streams: Arc<TrackCatalog>,
}

impl<S> RecommendationService<S>
where
    S: ProfileStore + 'static,
{
    pub fn new(
        store: Arc<S>,
        engine: Arc<MatchingEngine>,
        courses: Arc<TrackCatalog>,
        streams: Arc<TrackCatalog>,
    ) -> Self {
        Self {
            store,
            engine,
            courses,
            streams,
        }
    }

    pub fn catalog(&self, kind: TrackKind) -> &TrackCatalog {
        match kind {
            TrackKind::Course => &self.courses,
            TrackKind::Stream => &self.streams,
        }
    }

    /// Ranks degree programs for an inline profile.
    pub fn recommend_courses(
        &self,
        profile: &StudentProfile,
        category: Option<&str>,
        evaluated_on: NaiveDate,
    ) -> Result<CourseRecommendation, RecommendationError> {
        profile.validate()?;
        let signals = self.engine.analyze(profile);
        let filter = TrackFilter::parse(category);
        let recommendations = self.engine.rank_signals(&signals, &self.courses, &filter);

        Ok(CourseRecommendation {
            evaluated_on,
            data_used: signals.data_used(),
            recommendations,
        })
    }

    /// Builds the after-10th stream report for an inline profile.
    pub fn recommend_streams(
        &self,
        profile: &StudentProfile,
        evaluated_on: NaiveDate,
    ) -> Result<StreamRecommendation, RecommendationError> {
        profile.validate()?;
        let signals = self.engine.analyze(profile);
        let ranked = self
            .engine
            .rank_signals(&signals, &self.streams, &TrackFilter::Any);
        Ok(build_stream_recommendation(&signals, ranked, evaluated_on))
    }

    pub fn recommend_courses_for(
        &self,
        student_id: &StudentId,
        category: Option<&str>,
        evaluated_on: NaiveDate,
    ) -> Result<CourseRecommendation, RecommendationError> {
        let profile = self.load(student_id)?;
        self.recommend_courses(&profile, category, evaluated_on)
    }

    pub fn recommend_streams_for(
        &self,
        student_id: &StudentId,
        evaluated_on: NaiveDate,
    ) -> Result<StreamRecommendation, RecommendationError> {
        let profile = self.load(student_id)?;
        self.recommend_streams(&profile, evaluated_on)
    }

    fn load(&self, student_id: &StudentId) -> Result<StudentProfile, RecommendationError> {
        self.store
            .fetch(student_id)?
            .ok_or_else(|| RecommendationError::StudentNotFound(student_id.clone()))
    }
}

/// Error raised by the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("invalid profile: {0}")]
    InvalidProfile(#[from] ProfileError),
    #[error("no assessment profile for student '{0}'")]
    StudentNotFound(StudentId),
    #[error(transparent)]
    Store(#[from] StoreError),
}
