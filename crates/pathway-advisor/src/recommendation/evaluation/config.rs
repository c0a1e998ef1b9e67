use serde::{Deserialize, Serialize};

use crate::recommendation::signals::SignalWeights;

/// Every cap, weight and threshold used when scoring a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub caps: LayerCaps,
    pub interest: InterestWeights,
    pub academic: AcademicWeights,
    pub projects: ProjectWeights,
    pub experience: ExperienceWeights,
    pub synergy: SynergyWeights,
    pub forward: ForwardWeights,
    pub bands: BandThresholds,
    pub reasons: ReasonPolicy,
    pub signals: SignalWeights,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerCaps {
    pub interest: f32,
    pub academic: f32,
    pub projects: f32,
    pub experience: f32,
    pub synergy: f32,
    pub forward: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestWeights {
    pub per_primary_match: f32,
    pub per_secondary_match: f32,
    /// Multiplier is `1 + strength / strength_divisor`.
    pub strength_divisor: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicWeights {
    pub category_alignment: f32,
    pub subject_scale: f32,
    pub subject_cap: f32,
    pub strong_subject_threshold: f32,
    pub excellent_strength: u8,
    pub excellent_bonus: f32,
    pub good_strength: u8,
    pub good_bonus: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectWeights {
    pub per_relevant_domain: f32,
    pub complexity_scale: f32,
    pub practical_scale: f32,
    pub per_technology: f32,
    pub technology_cap: f32,
    pub min_technologies: usize,
    pub technology_reason_threshold: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceWeights {
    pub per_relevant_type: f32,
    pub readiness_scale: f32,
    pub leadership_bonus: f32,
    pub entrepreneurial_bonus: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynergyWeights {
    pub three_or_more: f32,
    pub two: f32,
    pub one: f32,
    /// Layers that must carry data before the banded bonus applies.
    pub min_layers_with_data: usize,
    pub verified_bonus: f32,
    pub tech_stack_bonus: f32,
    pub tech_stack_min: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardWeights {
    pub default_relevance: f32,
    pub relevance_scale: f32,
    pub emerging_bonus: f32,
    pub academic_bonus: f32,
    pub academic_threshold: u8,
    pub high_growth_bonus: f32,
}

/// Lower bounds of each band, highest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandThresholds {
    pub exceptional: u8,
    pub excellent: u8,
    pub very_good: u8,
    pub good: u8,
    pub moderate: u8,
    pub fair: u8,
    pub low: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasonPolicy {
    pub max_reasons: usize,
    pub forward_note_threshold: u8,
    pub career_note_threshold: u8,
    pub careers_in_note: usize,
    pub domains_in_note: usize,
    pub technologies_in_note: usize,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            caps: LayerCaps {
                interest: 30.0,
                academic: 35.0,
                projects: 25.0,
                experience: 20.0,
                synergy: 20.0,
                forward: 15.0,
            },
            interest: InterestWeights {
                per_primary_match: 12.0,
                per_secondary_match: 6.0,
                strength_divisor: 200.0,
            },
            academic: AcademicWeights {
                category_alignment: 15.0,
                subject_scale: 20.0,
                subject_cap: 20.0,
                strong_subject_threshold: 70.0,
                excellent_strength: 80,
                excellent_bonus: 5.0,
                good_strength: 70,
                good_bonus: 3.0,
            },
            projects: ProjectWeights {
                per_relevant_domain: 8.0,
                complexity_scale: 8.0,
                practical_scale: 5.0,
                per_technology: 1.5,
                technology_cap: 5.0,
                min_technologies: 2,
                technology_reason_threshold: 3,
            },
            experience: ExperienceWeights {
                per_relevant_type: 6.0,
                readiness_scale: 8.0,
                leadership_bonus: 3.0,
                entrepreneurial_bonus: 3.0,
            },
            synergy: SynergyWeights {
                three_or_more: 15.0,
                two: 10.0,
                one: 5.0,
                min_layers_with_data: 2,
                verified_bonus: 5.0,
                tech_stack_bonus: 5.0,
                tech_stack_min: 3,
            },
            forward: ForwardWeights {
                default_relevance: 0.7,
                relevance_scale: 10.0,
                emerging_bonus: 5.0,
                academic_bonus: 3.0,
                academic_threshold: 75,
                high_growth_bonus: 3.0,
            },
            bands: BandThresholds {
                exceptional: 90,
                excellent: 80,
                very_good: 70,
                good: 60,
                moderate: 50,
                fair: 40,
                low: 25,
            },
            reasons: ReasonPolicy {
                max_reasons: 4,
                forward_note_threshold: 60,
                career_note_threshold: 65,
                careers_in_note: 2,
                domains_in_note: 2,
                technologies_in_note: 3,
            },
            signals: SignalWeights::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_round_trips_through_json() {
        let policy = ScoringPolicy::default();
        let json = serde_json::to_string(&policy).expect("serializes");
        let parsed: ScoringPolicy = serde_json::from_str(&json).expect("parses");
        assert_eq!(parsed, policy);
    }

    #[test]
    fn layer_caps_sum_above_full_score() {
        let caps = ScoringPolicy::default().caps;
        let total =
            caps.interest + caps.academic + caps.projects + caps.experience + caps.synergy + caps.forward;
        assert_eq!(total, 145.0);
    }
}
