//! Profile analysis layers.
//!
//! Each layer turns one slice of the student profile into a signal that degrades to a
//! `has_data = false` default instead of failing. Layers run once per request and are then
//! shared by every track evaluation.

mod academic;
mod experience;
mod interest;
pub mod patterns;
mod projects;

pub use academic::{classify_subject, AcademicSignal, AcademicSource, SubjectScore};
pub use experience::{CareerSignal, ExperienceRules, ExperienceSignal};
pub use interest::InterestSignal;
pub use patterns::{
    DomainCount, DomainMatcher, DomainPattern, PatternError, PatternTable, RegexDomainMatcher,
    TermExtractor,
};
pub use projects::ProjectSignal;

use serde::{Deserialize, Serialize};

use super::domain::StudentProfile;

/// Weights used while deriving complexity and readiness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalWeights {
    pub project_hit_cap: usize,
    pub complexity_per_hit: f32,
    pub practical_per_project: f32,
    pub practical_complexity_share: f32,
    pub readiness_per_record: f32,
    pub readiness_per_verified: f32,
    pub readiness_per_month: f32,
    pub readiness_per_signal: f32,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            project_hit_cap: 20,
            complexity_per_hit: 12.0,
            practical_per_project: 18.0,
            practical_complexity_share: 0.4,
            readiness_per_record: 12.0,
            readiness_per_verified: 18.0,
            readiness_per_month: 2.0,
            readiness_per_signal: 12.0,
        }
    }
}

/// Free-text classifiers used by the project and experience layers.
#[derive(Debug)]
pub struct SignalPatterns {
    project_domains: Box<dyn DomainMatcher>,
    experience_domains: Box<dyn DomainMatcher>,
    technologies: TermExtractor,
    emerging: Vec<String>,
    experience_rules: ExperienceRules,
}

impl SignalPatterns {
    pub fn builtin() -> Result<Self, PatternError> {
        let technology_terms: Vec<String> = patterns::TECHNOLOGY_TERMS
            .iter()
            .map(|term| (*term).to_string())
            .collect();

        Ok(Self {
            project_domains: Box::new(RegexDomainMatcher::new(&PatternTable::project_domains())?),
            experience_domains: Box::new(RegexDomainMatcher::new(
                &PatternTable::experience_domains(),
            )?),
            technologies: TermExtractor::new(&technology_terms)?,
            emerging: patterns::EMERGING_TERMS
                .iter()
                .map(|term| (*term).to_string())
                .collect(),
            experience_rules: ExperienceRules::standard()?,
        })
    }

    pub fn with_project_matcher(mut self, matcher: Box<dyn DomainMatcher>) -> Self {
        self.project_domains = matcher;
        self
    }

    pub fn with_experience_matcher(mut self, matcher: Box<dyn DomainMatcher>) -> Self {
        self.experience_domains = matcher;
        self
    }

    pub fn with_emerging_terms(mut self, terms: Vec<String>) -> Self {
        self.emerging = terms;
        self
    }

    pub fn project_domains(&self) -> &dyn DomainMatcher {
        self.project_domains.as_ref()
    }

    pub fn experience_domains(&self) -> &dyn DomainMatcher {
        self.experience_domains.as_ref()
    }

    pub fn technologies(&self) -> &TermExtractor {
        &self.technologies
    }

    pub fn emerging_terms(&self) -> &[String] {
        &self.emerging
    }

    pub fn experience_rules(&self) -> &ExperienceRules {
        &self.experience_rules
    }
}

/// Which profile sections contributed data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DataUsed {
    pub has_interests: bool,
    pub has_academic_data: bool,
    pub has_projects: bool,
    pub has_experiences: bool,
}

/// Output of the four analysis layers for one profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignalSet {
    pub interest: InterestSignal,
    pub academic: AcademicSignal,
    pub projects: ProjectSignal,
    pub experience: ExperienceSignal,
}

impl SignalSet {
    pub fn analyze(
        profile: &StudentProfile,
        patterns: &SignalPatterns,
        weights: &SignalWeights,
    ) -> Self {
        let mut academic = AcademicSignal::analyze(&profile.subject_marks);
        if !academic.has_data {
            if let Some(assessment) = &profile.assessment {
                academic = AcademicSignal::from_assessment(assessment);
            }
        }

        Self {
            interest: InterestSignal::analyze(profile.effective_interests()),
            academic,
            projects: ProjectSignal::analyze(&profile.projects, patterns, weights),
            experience: ExperienceSignal::analyze(&profile.experiences, patterns, weights),
        }
    }

    pub fn data_used(&self) -> DataUsed {
        DataUsed {
            has_interests: self.interest.has_data,
            has_academic_data: self.academic.has_data,
            has_projects: self.projects.has_data,
            has_experiences: self.experience.has_data,
        }
    }

    /// Number of layers that produced data.
    pub fn layers_with_data(&self) -> usize {
        [
            self.interest.has_data,
            self.academic.has_data,
            self.projects.has_data,
            self.experience.has_data,
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}
