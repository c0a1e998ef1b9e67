//! Explainable course and stream recommendations.
//!
//! A student profile is reduced to four signal layers (interests, academics, projects,
//! experience). Each candidate track in a catalog is then scored against those signals with
//! capped per-layer points, a cross-layer synergy bonus, and a future-readiness bonus.

pub mod catalog;
pub mod domain;
pub mod evaluation;
pub mod importer;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;
pub mod signals;

#[cfg(test)]
mod tests;

pub use catalog::{
    CareerPath, CatalogError, TrackCatalog, TrackId, TrackKind, TrackProfile, TrackTraits,
};
pub use domain::{
    AptitudeScores, AssessmentResults, ExperienceRecord, InterestCode, InterestVector,
    KnowledgeScore, ProfileError, ProjectRecord, StudentProfile, SubjectMark, TrackCategory,
};
pub use evaluation::{
    MatchBand, MatchingEngine, ScoreBreakdown, ScoredTrack, ScoringPolicy, TrackFilter,
};
pub use importer::{MarksImportError, MarksImporter};
pub use report::{CourseRecommendation, StreamRecommendation};
pub use repository::{ProfileStore, StoreError, StudentId};
pub use router::recommendation_router;
pub use service::{RecommendationError, RecommendationService};
pub use signals::{DataUsed, PatternError, SignalPatterns, SignalSet, SignalWeights};
