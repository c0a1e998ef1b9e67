use chrono::NaiveDate;
use serde::Serialize;

use crate::recommendation::catalog::TrackId;
use crate::recommendation::domain::InterestCode;
use crate::recommendation::evaluation::{MatchBand, ScoredTrack};
use crate::recommendation::signals::DataUsed;

/// Ranked degree programs for one student.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRecommendation {
    pub evaluated_on: NaiveDate,
    pub data_used: DataUsed,
    pub recommendations: Vec<ScoredTrack>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReasoningView {
    pub interests: String,
    pub aptitude: String,
    pub activities: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreAnalysisView {
    pub riasec_top3: Vec<InterestCode>,
    pub strong_aptitudes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_pattern: Option<String>,
}

/// After-10th stream advice built around the best-ranked stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamRecommendation {
    pub evaluated_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_stream_id: Option<TrackId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_stream: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_fit: Option<MatchBand>,
    pub confidence: u8,
    pub reasoning: ReasoningView,
    pub score_analysis: ScoreAnalysisView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_stream: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subjects_to_focus: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub career_paths: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entrance_exams: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub college_types: Vec<String>,
    pub all_scores: Vec<ScoredTrack>,
    pub data_used: DataUsed,
}
