use super::config::ScoringPolicy;
use super::rules::LayerScore;
use crate::recommendation::catalog::TrackProfile;
use crate::recommendation::domain::TrackCategory;
use crate::recommendation::signals::SignalSet;

/// Categories whose graduates see the strongest demand.
const HIGH_VALUE_CATEGORIES: [TrackCategory; 2] = [TrackCategory::Science, TrackCategory::Commerce];

/// Small forward-looking adjustment from the track's static relevance.
///
/// Reasons list the triggered factors in evaluation order; the aggregator decides whether
/// the first one is shown.
pub(crate) fn forward_layer(
    signals: &SignalSet,
    track: &TrackProfile,
    emerging_terms: &[String],
    policy: &ScoringPolicy,
) -> LayerScore {
    let weights = &policy.forward;
    let relevance = track
        .future_relevance
        .unwrap_or(weights.default_relevance);
    let mut points = relevance * weights.relevance_scale;
    let mut reasons = Vec::new();

    if signals.projects.has_emerging_technology(emerging_terms) {
        points += weights.emerging_bonus;
        reasons.push("Emerging technology skills".to_string());
    }

    if signals.academic.strength >= weights.academic_threshold
        && HIGH_VALUE_CATEGORIES.contains(&track.category)
    {
        points += weights.academic_bonus;
        reasons.push("Strong academic foundation".to_string());
    }

    if track.traits.high_growth {
        points += weights.high_growth_bonus;
        reasons.push("High-growth industry".to_string());
    }

    LayerScore {
        points: points.clamp(0.0, policy.caps.forward),
        reasons,
    }
}
