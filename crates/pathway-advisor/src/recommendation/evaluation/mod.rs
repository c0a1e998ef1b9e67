mod config;
mod forward;
mod policy;
mod rules;
mod synergy;

pub use config::{
    AcademicWeights, BandThresholds, ExperienceWeights, ForwardWeights, InterestWeights,
    LayerCaps, ProjectWeights, ReasonPolicy, ScoringPolicy, SynergyWeights,
};
pub use policy::MatchBand;

use serde::Serialize;
use tracing::{debug, info};

use super::catalog::{TrackCatalog, TrackProfile};
use super::domain::{StudentProfile, TrackCategory};
use super::signals::{PatternError, SignalPatterns, SignalSet};
use rules::{LayerScore, TrackAlignment};

const FILTER_PLACEHOLDERS: [&str; 3] = ["", "n/a", "—"];

/// Restricts ranking to one broad category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackFilter {
    Any,
    Category(TrackCategory),
    /// A filter naming no known category; it matches no track.
    Unknown(String),
}

impl TrackFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return TrackFilter::Any;
        };
        let value = raw.trim().to_lowercase();
        if FILTER_PLACEHOLDERS.contains(&value.as_str()) {
            debug!(filter = raw, "ignoring placeholder category filter");
            return TrackFilter::Any;
        }
        TrackCategory::ALL
            .into_iter()
            .find(|category| category.label() == value)
            .map(TrackFilter::Category)
            .unwrap_or(TrackFilter::Unknown(value))
    }

    pub fn admits(&self, track: &TrackProfile) -> bool {
        match self {
            TrackFilter::Any => true,
            TrackFilter::Category(category) => track.category == *category,
            TrackFilter::Unknown(_) => false,
        }
    }
}

/// Rounded contribution of each layer. The score is the clamped sum of these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub interest: u8,
    pub academic: u8,
    pub projects: u8,
    pub experience: u8,
    pub synergy: u8,
    pub forward: u8,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u16 {
        [
            self.interest,
            self.academic,
            self.projects,
            self.experience,
            self.synergy,
            self.forward,
        ]
        .into_iter()
        .map(u16::from)
        .sum()
    }
}

/// A track evaluated against one student.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredTrack {
    pub track: TrackProfile,
    pub score: u8,
    pub band: MatchBand,
    pub reasons: Vec<String>,
    pub score_breakdown: ScoreBreakdown,
    pub career_paths: Vec<String>,
}

/// Stateless scorer: analyses a profile once, then evaluates every candidate track.
#[derive(Debug)]
pub struct MatchingEngine {
    policy: ScoringPolicy,
    patterns: SignalPatterns,
}

impl MatchingEngine {
    pub fn new(policy: ScoringPolicy, patterns: SignalPatterns) -> Self {
        Self { policy, patterns }
    }

    /// Default policy with the built-in pattern tables.
    pub fn standard() -> Result<Self, PatternError> {
        Ok(Self::new(ScoringPolicy::default(), SignalPatterns::builtin()?))
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    pub fn analyze(&self, profile: &StudentProfile) -> SignalSet {
        SignalSet::analyze(profile, &self.patterns, &self.policy.signals)
    }

    pub fn score_track(&self, signals: &SignalSet, track: &TrackProfile) -> ScoredTrack {
        let policy = &self.policy;
        let alignment =
            TrackAlignment::measure(signals, track, self.patterns.project_domains());

        let interest = rules::interest_layer(signals, &alignment, policy);
        let academic = rules::academic_layer(signals, track, &alignment, policy);
        let projects = rules::project_layer(signals, track, &alignment, policy);
        let experience = rules::experience_layer(signals, track, &alignment, policy);
        let synergy = synergy::synergy_layer(signals, track, &alignment, policy);
        let forward =
            forward::forward_layer(signals, track, self.patterns.emerging_terms(), policy);

        let breakdown = ScoreBreakdown {
            interest: rounded(&interest),
            academic: rounded(&academic),
            projects: rounded(&projects),
            experience: rounded(&experience),
            synergy: rounded(&synergy),
            forward: rounded(&forward),
        };
        let total = breakdown.total();
        let score = total.min(100) as u8;

        let mut reasons: Vec<String> = [interest, academic, projects, experience, synergy]
            .into_iter()
            .flat_map(|layer| layer.reasons)
            .collect();
        if total >= u16::from(policy.reasons.forward_note_threshold) {
            if let Some(first) = forward.reasons.into_iter().next() {
                reasons.push(first);
            }
        }
        if score >= policy.reasons.career_note_threshold && !track.career_paths.is_empty() {
            let careers: Vec<&str> = track
                .career_paths
                .iter()
                .take(policy.reasons.careers_in_note)
                .map(|path| path.role.as_str())
                .collect();
            reasons.push(format!("Careers: {}", careers.join(", ")));
        }
        reasons.truncate(policy.reasons.max_reasons);

        debug!(
            track = %track.id,
            score,
            interest = breakdown.interest,
            academic = breakdown.academic,
            projects = breakdown.projects,
            experience = breakdown.experience,
            synergy = breakdown.synergy,
            forward = breakdown.forward,
            "scored track"
        );

        ScoredTrack {
            track: track.clone(),
            score,
            band: MatchBand::classify(score, &policy.bands),
            reasons,
            score_breakdown: breakdown,
            career_paths: track.career_roles(),
        }
    }

    /// Scores every admitted track and sorts by descending score.
    ///
    /// Returns an empty list when no track passes the filter or the profile carries no
    /// interest signal. Ties keep catalog order.
    pub fn rank(
        &self,
        profile: &StudentProfile,
        catalog: &TrackCatalog,
        filter: &TrackFilter,
    ) -> Vec<ScoredTrack> {
        let signals = self.analyze(profile);
        self.rank_signals(&signals, catalog, filter)
    }

    pub fn rank_signals(
        &self,
        signals: &SignalSet,
        catalog: &TrackCatalog,
        filter: &TrackFilter,
    ) -> Vec<ScoredTrack> {
        let candidates: Vec<&TrackProfile> =
            catalog.iter().filter(|track| filter.admits(track)).collect();

        if candidates.is_empty() {
            info!(?filter, catalog_size = catalog.len(), "filter removed every track");
            return Vec::new();
        }
        if !signals.interest.has_data {
            info!(
                candidates = candidates.len(),
                "no interest signal; declining to rank"
            );
            return Vec::new();
        }

        let mut scored: Vec<ScoredTrack> = candidates
            .into_iter()
            .map(|track| self.score_track(signals, track))
            .collect();
        scored.sort_by(|left, right| right.score.cmp(&left.score));

        info!(
            candidates = scored.len(),
            top_track = scored.first().map(|entry| entry.track.id.as_str()),
            top_score = scored.first().map(|entry| entry.score),
            "ranked tracks"
        );
        scored
    }
}

fn rounded(layer: &LayerScore) -> u8 {
    layer.points.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_parsing() {
        assert_eq!(TrackFilter::parse(None), TrackFilter::Any);
        assert_eq!(TrackFilter::parse(Some("  ")), TrackFilter::Any);
        assert_eq!(TrackFilter::parse(Some("N/A")), TrackFilter::Any);
        assert_eq!(TrackFilter::parse(Some("—")), TrackFilter::Any);
        assert_eq!(
            TrackFilter::parse(Some("Commerce")),
            TrackFilter::Category(TrackCategory::Commerce)
        );
        assert_eq!(
            TrackFilter::parse(Some("vocational")),
            TrackFilter::Unknown("vocational".to_string())
        );
    }

    #[test]
    fn breakdown_total_sums_layers() {
        let breakdown = ScoreBreakdown {
            interest: 30,
            academic: 35,
            projects: 25,
            experience: 20,
            synergy: 20,
            forward: 15,
        };
        assert_eq!(breakdown.total(), 145);
    }
}
