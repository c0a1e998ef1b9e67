use super::config::ScoringPolicy;
use super::rules::{leading_technologies, LayerScore, TrackAlignment};
use crate::recommendation::catalog::TrackProfile;
use crate::recommendation::signals::SignalSet;

/// Bonus for several independent signals pointing at the same track.
pub(crate) fn synergy_layer(
    signals: &SignalSet,
    track: &TrackProfile,
    alignment: &TrackAlignment,
    policy: &ScoringPolicy,
) -> LayerScore {
    let weights = &policy.synergy;
    let mut points = 0.0;
    let mut reasons = Vec::new();

    if signals.layers_with_data() >= weights.min_layers_with_data {
        match alignment.agreements() {
            0 => {}
            1 => {
                points += weights.one;
                reasons.push("Single-signal alignment".to_string());
            }
            2 => {
                points += weights.two;
                reasons.push("Good cross-factor alignment".to_string());
            }
            _ => {
                points += weights.three_or_more;
                reasons.push("Strong multi-dimensional alignment".to_string());
            }
        }
    }

    if alignment.verified_in_relevant_type {
        points += weights.verified_bonus;
        reasons.push("Verified practical experience".to_string());
    }

    if track.traits.technology_oriented
        && signals.projects.technologies.len() >= weights.tech_stack_min
    {
        points += weights.tech_stack_bonus;
        reasons.push(format!(
            "Tech stack: {}",
            leading_technologies(signals, policy.reasons.technologies_in_note)
        ));
    }

    LayerScore {
        points: points.min(policy.caps.synergy),
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::catalog::{TrackCatalog, TrackId};
    use crate::recommendation::domain::{
        ExperienceRecord, InterestCode, InterestVector, ProjectRecord, StudentProfile,
    };
    use crate::recommendation::signals::{SignalPatterns, SignalWeights};

    fn evaluate(profile: &StudentProfile, id: &str) -> LayerScore {
        let patterns = SignalPatterns::builtin().expect("patterns compile");
        let signals = SignalSet::analyze(profile, &patterns, &SignalWeights::default());
        let track = TrackCatalog::builtin_courses()
            .get(&TrackId::new(id))
            .cloned()
            .expect("course exists");
        let alignment = TrackAlignment::measure(&signals, &track, patterns.project_domains());
        synergy_layer(&signals, &track, &alignment, &ScoringPolicy::default())
    }

    fn interests() -> InterestVector {
        InterestVector::from_pairs([
            (InterestCode::Realistic, 9.0),
            (InterestCode::Investigative, 8.0),
        ])
    }

    #[test]
    fn lone_interest_signal_earns_nothing() {
        let profile = StudentProfile {
            interests: interests(),
            ..StudentProfile::default()
        };
        let layer = evaluate(&profile, "engineering");
        assert_eq!(layer.points, 0.0);
        assert!(layer.reasons.is_empty());
    }

    #[test]
    fn two_agreements_and_tech_stack_bonus() {
        let profile = StudentProfile {
            interests: interests(),
            projects: vec![ProjectRecord {
                title: "Tracker".to_string(),
                description: Some("python and react app on a database".to_string()),
                tech_stack: None,
            }],
            ..StudentProfile::default()
        };
        let layer = evaluate(&profile, "bca");
        assert_eq!(layer.points, 15.0);
        assert_eq!(
            layer.reasons,
            vec![
                "Good cross-factor alignment".to_string(),
                "Tech stack: database, python, react".to_string(),
            ]
        );
    }

    #[test]
    fn verified_bonus_needs_agreeing_type_and_total_is_capped() {
        let profile = StudentProfile {
            interests: interests(),
            projects: vec![ProjectRecord {
                title: "Robot".to_string(),
                description: Some("python java react software".to_string()),
                tech_stack: None,
            }],
            experiences: vec![ExperienceRecord {
                organization: "Tech Labs".to_string(),
                role: "Software developer".to_string(),
                description: None,
                verified: Some(true),
                duration: None,
            }],
            ..StudentProfile::default()
        };
        let bca = evaluate(&profile, "bca");
        assert_eq!(bca.points, 20.0);
        assert!(bca
            .reasons
            .contains(&"Verified practical experience".to_string()));

        let ba = evaluate(&profile, "ba");
        assert!(!ba
            .reasons
            .contains(&"Verified practical experience".to_string()));
    }
}
