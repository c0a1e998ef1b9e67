use chrono::NaiveDate;

use super::views::{ReasoningView, ScoreAnalysisView, StreamRecommendation};
use crate::recommendation::domain::TrackCategory;
use crate::recommendation::evaluation::ScoredTrack;
use crate::recommendation::signals::SignalSet;

const STRONG_APTITUDE_LIMIT: usize = 2;

fn college_types(category: TrackCategory) -> &'static [&'static str] {
    match category {
        TrackCategory::Science => &["IITs", "NITs", "Medical Colleges", "Science Universities"],
        TrackCategory::Commerce => &["Top Commerce Colleges", "Business Schools", "CA Institutes"],
        TrackCategory::Arts => &[
            "Central Universities",
            "Law Schools",
            "Mass Communication Institutes",
        ],
    }
}

fn pick_reason<F>(top: Option<&ScoredTrack>, fallback: &str, wanted: F) -> String
where
    F: Fn(&str) -> bool,
{
    top.and_then(|entry| entry.reasons.iter().find(|reason| wanted(reason)))
        .cloned()
        .unwrap_or_else(|| fallback.to_string())
}

pub(crate) fn build_stream_recommendation(
    signals: &SignalSet,
    ranked: Vec<ScoredTrack>,
    evaluated_on: NaiveDate,
) -> StreamRecommendation {
    let top = ranked.first();
    let alternative = ranked.get(1);

    let reasoning = ReasoningView {
        interests: pick_reason(top, "Based on your RIASEC profile", |reason| {
            reason.contains("interest")
        }),
        aptitude: pick_reason(top, "Based on your academic performance", |reason| {
            reason.starts_with("Strong in") || reason.ends_with("performance")
        }),
        activities: pick_reason(top, "Based on your activities", |reason| {
            let lowered = reason.to_lowercase();
            lowered.contains("project") || lowered.contains("experience")
        }),
    };

    let strong_aptitudes = signals
        .academic
        .top_subjects
        .iter()
        .take(STRONG_APTITUDE_LIMIT)
        .map(|entry| format!("{} ({:.0}%)", entry.subject, entry.percentage))
        .collect();

    let score_analysis = ScoreAnalysisView {
        riasec_top3: signals.interest.dominant.clone(),
        strong_aptitudes,
        matching_pattern: top.map(|entry| {
            format!("{} stream alignment", entry.track.category.display_name())
        }),
    };

    let subjects_to_focus = match top {
        Some(entry) if !entry.track.focus_subjects.is_empty() => entry.track.focus_subjects.clone(),
        Some(_) => vec!["Core Subjects".to_string()],
        None => Vec::new(),
    };

    StreamRecommendation {
        evaluated_on,
        recommended_stream_id: top.map(|entry| entry.track.id.clone()),
        recommended_stream: top.map(|entry| entry.track.name.clone()),
        stream_fit: top.map(|entry| entry.band),
        confidence: top.map(|entry| entry.score).unwrap_or(0),
        reasoning,
        score_analysis,
        alternative_stream: alternative.map(|entry| entry.track.name.clone()),
        alternative_reason: alternative
            .map(|entry| format!("Also a good fit with {}% match", entry.score)),
        subjects_to_focus,
        career_paths: top.map(|entry| entry.career_paths.clone()).unwrap_or_default(),
        entrance_exams: top
            .map(|entry| entry.track.entrance_exams.clone())
            .unwrap_or_default(),
        college_types: top
            .map(|entry| {
                college_types(entry.track.category)
                    .iter()
                    .map(|name| (*name).to_string())
                    .collect()
            })
            .unwrap_or_default(),
        data_used: signals.data_used(),
        all_scores: ranked,
    }
}
