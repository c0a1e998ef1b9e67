mod stream;
pub mod views;

pub use views::{CourseRecommendation, ReasoningView, ScoreAnalysisView, StreamRecommendation};

pub(crate) use stream::build_stream_recommendation;
