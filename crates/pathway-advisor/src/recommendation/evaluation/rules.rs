use super::config::ScoringPolicy;
use crate::recommendation::catalog::TrackProfile;
use crate::recommendation::domain::{InterestCode, TrackCategory};
use crate::recommendation::signals::{CareerSignal, DomainMatcher, SignalSet};

/// Points and explanations produced by one scoring layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct LayerScore {
    pub points: f32,
    pub reasons: Vec<String>,
}

impl LayerScore {
    fn capped(points: f32, cap: f32, reasons: Vec<String>) -> Self {
        Self {
            points: points.clamp(0.0, cap),
            reasons,
        }
    }
}

/// Experience types that count toward each broad category.
pub(crate) fn experience_types_for(category: TrackCategory) -> &'static [&'static str] {
    match category {
        TrackCategory::Science => &["technology", "research", "healthcare"],
        TrackCategory::Commerce => &["business", "finance", "creative"],
        TrackCategory::Arts => &["creative", "social", "legal"],
    }
}

/// True when a student subject matches a core subject of the track or one of its aliases.
pub(crate) fn track_claims_subject(track: &TrackProfile, subject: &str) -> bool {
    track
        .subjects
        .core
        .iter()
        .map(|core| core.name.as_str())
        .chain(track.subjects.aliases.iter().map(String::as_str))
        .any(|alias| !alias.is_empty() && subject.contains(alias))
}

/// Per-track view of where the student's signals agree with the track.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct TrackAlignment {
    pub primary_matches: Vec<InterestCode>,
    pub secondary_matches: Vec<InterestCode>,
    pub academic_aligned: bool,
    pub relevant_domains: Vec<String>,
    pub relevant_types: Vec<String>,
    pub verified_in_relevant_type: bool,
}

impl TrackAlignment {
    pub(crate) fn measure(
        signals: &SignalSet,
        track: &TrackProfile,
        project_matcher: &dyn DomainMatcher,
    ) -> Self {
        let dominant = &signals.interest.dominant;
        let primary_matches = dominant
            .iter()
            .copied()
            .filter(|code| track.interests.primary.contains(code))
            .collect();
        let secondary_matches = dominant
            .iter()
            .copied()
            .filter(|code| track.interests.secondary.contains(code))
            .collect();

        let academic_aligned = signals
            .academic
            .dominant_category_claiming(track.category, |subject| {
                track_claims_subject(track, subject)
            })
            == Some(track.category);

        let relevant_types: Vec<String> = signals
            .experience
            .type_names()
            .filter(|kind| {
                experience_types_for(track.category)
                    .iter()
                    .any(|known| *known == *kind)
            })
            .map(str::to_string)
            .collect();
        let verified_in_relevant_type = relevant_types
            .iter()
            .any(|kind| signals.experience.verified_types.contains(kind));

        Self {
            primary_matches,
            secondary_matches,
            academic_aligned,
            relevant_domains: relevant_project_domains(signals, track, project_matcher),
            relevant_types,
            verified_in_relevant_type,
        }
    }

    /// How many of the four layers agree with the track.
    pub(crate) fn agreements(&self) -> usize {
        [
            !self.primary_matches.is_empty(),
            self.academic_aligned,
            !self.relevant_domains.is_empty(),
            !self.relevant_types.is_empty(),
        ]
        .into_iter()
        .filter(|agrees| *agrees)
        .count()
    }
}

/// Project domains that overlap the track's keywords, in ranked order.
///
/// A domain overlaps when its name and a keyword contain one another, or when the keyword
/// itself is classified into that domain.
pub(crate) fn relevant_project_domains(
    signals: &SignalSet,
    track: &TrackProfile,
    matcher: &dyn DomainMatcher,
) -> Vec<String> {
    if !signals.projects.has_data {
        return Vec::new();
    }

    let keyword_hits: Vec<Vec<usize>> = track
        .keywords
        .all()
        .map(|keyword| matcher.hits(keyword))
        .collect();

    signals
        .projects
        .domain_names()
        .filter(|domain| {
            let position = matcher.position(domain);
            track.keywords.all().zip(&keyword_hits).any(|(keyword, hits)| {
                let keyword = keyword.to_lowercase();
                domain.contains(keyword.as_str())
                    || keyword.contains(domain)
                    || position.is_some_and(|index| hits.get(index).copied().unwrap_or(0) > 0)
            })
        })
        .map(str::to_string)
        .collect()
}

pub(crate) fn interest_layer(
    signals: &SignalSet,
    alignment: &TrackAlignment,
    policy: &ScoringPolicy,
) -> LayerScore {
    let interest = &signals.interest;
    if !interest.has_data {
        return LayerScore::default();
    }

    let weights = &policy.interest;
    let base = alignment.primary_matches.len() as f32 * weights.per_primary_match
        + alignment.secondary_matches.len() as f32 * weights.per_secondary_match;
    let points = base * (1.0 + interest.strength / weights.strength_divisor);

    let mut reasons = Vec::new();
    if !alignment.primary_matches.is_empty() {
        let labels: Vec<&str> = alignment
            .primary_matches
            .iter()
            .map(|code| code.label())
            .collect();
        reasons.push(format!(
            "Strong {} interests align with this track",
            labels.join(", ")
        ));
    }

    LayerScore::capped(points, policy.caps.interest, reasons)
}

pub(crate) fn academic_layer(
    signals: &SignalSet,
    track: &TrackProfile,
    alignment: &TrackAlignment,
    policy: &ScoringPolicy,
) -> LayerScore {
    let academic = &signals.academic;
    if !academic.has_data {
        return LayerScore::default();
    }

    let weights = &policy.academic;
    let mut points = 0.0;
    let mut reasons = Vec::new();

    if alignment.academic_aligned {
        points += weights.category_alignment;
        reasons.push(format!(
            "Excellent {} performance",
            track.category.display_name()
        ));
    }

    let mut subject_points = 0.0;
    let mut strongest: Option<(&str, f32)> = None;
    for core in &track.subjects.core {
        let matches = |subject: &str| {
            (!core.name.is_empty() && subject.contains(core.name.as_str()))
                || track
                    .subjects
                    .aliases
                    .iter()
                    .any(|alias| !alias.is_empty() && subject.contains(alias.as_str()))
        };
        for entry in academic
            .subjects
            .iter()
            .filter(|entry| matches(&entry.subject))
        {
            subject_points += entry.percentage / 100.0 * core.weight * weights.subject_scale;
            let rounded = entry.percentage.round();
            if entry.percentage >= weights.strong_subject_threshold
                && strongest.map_or(true, |(_, best)| rounded > best)
            {
                strongest = Some((entry.subject.as_str(), rounded));
            }
        }
    }
    points += subject_points.min(weights.subject_cap);

    if let Some((subject, percentage)) = strongest {
        reasons.push(format!("Strong in {subject} ({percentage:.0}%)"));
    }

    if academic.strength >= weights.excellent_strength {
        points += weights.excellent_bonus;
    } else if academic.strength >= weights.good_strength {
        points += weights.good_bonus;
    }

    LayerScore::capped(points, policy.caps.academic, reasons)
}

pub(crate) fn project_layer(
    signals: &SignalSet,
    track: &TrackProfile,
    alignment: &TrackAlignment,
    policy: &ScoringPolicy,
) -> LayerScore {
    let projects = &signals.projects;
    if !projects.has_data {
        return LayerScore::default();
    }

    let weights = &policy.projects;
    let mut points = alignment.relevant_domains.len() as f32 * weights.per_relevant_domain;
    let mut reasons = Vec::new();

    if !alignment.relevant_domains.is_empty() {
        let shown: Vec<&str> = alignment
            .relevant_domains
            .iter()
            .take(policy.reasons.domains_in_note)
            .map(String::as_str)
            .collect();
        reasons.push(format!("Relevant projects in {}", shown.join(", ")));
    }

    points += projects.complexity / 100.0 * weights.complexity_scale;
    points += projects.practical_experience / 100.0 * weights.practical_scale;

    let tech_count = projects.technologies.len();
    if track.traits.technology_oriented && tech_count >= weights.min_technologies {
        points += (tech_count as f32 * weights.per_technology).min(weights.technology_cap);
        if tech_count >= weights.technology_reason_threshold {
            reasons.push(format!(
                "Tech skills: {}",
                leading_technologies(signals, policy.reasons.technologies_in_note)
            ));
        }
    }

    LayerScore::capped(points, policy.caps.projects, reasons)
}

pub(crate) fn experience_layer(
    signals: &SignalSet,
    track: &TrackProfile,
    alignment: &TrackAlignment,
    policy: &ScoringPolicy,
) -> LayerScore {
    let experience = &signals.experience;
    if !experience.has_data {
        return LayerScore::default();
    }

    let weights = &policy.experience;
    let mut points = alignment.relevant_types.len() as f32 * weights.per_relevant_type;
    let mut reasons = Vec::new();

    if let Some(kind) = alignment.relevant_types.first() {
        let label = if experience.verified_count > 0 {
            "Verified"
        } else {
            "Relevant"
        };
        reasons.push(format!("{label} experience in {kind}"));
    }

    points += experience.readiness / 100.0 * weights.readiness_scale;

    if experience.has_signal(CareerSignal::Leadership) {
        points += weights.leadership_bonus;
    }
    if track.traits.entrepreneurial && experience.has_signal(CareerSignal::Entrepreneurial) {
        points += weights.entrepreneurial_bonus;
    }

    LayerScore::capped(points, policy.caps.experience, reasons)
}

pub(crate) fn leading_technologies(signals: &SignalSet, limit: usize) -> String {
    signals
        .projects
        .technologies
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
