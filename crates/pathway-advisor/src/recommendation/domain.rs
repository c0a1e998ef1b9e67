use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six RIASEC vocational-interest codes, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InterestCode {
    #[serde(rename = "R", alias = "realistic", alias = "Realistic")]
    Realistic,
    #[serde(rename = "I", alias = "investigative", alias = "Investigative")]
    Investigative,
    #[serde(rename = "A", alias = "artistic", alias = "Artistic")]
    Artistic,
    #[serde(rename = "S", alias = "social", alias = "Social")]
    Social,
    #[serde(rename = "E", alias = "enterprising", alias = "Enterprising")]
    Enterprising,
    #[serde(rename = "C", alias = "conventional", alias = "Conventional")]
    Conventional,
}

impl InterestCode {
    pub const ALL: [InterestCode; 6] = [
        InterestCode::Realistic,
        InterestCode::Investigative,
        InterestCode::Artistic,
        InterestCode::Social,
        InterestCode::Enterprising,
        InterestCode::Conventional,
    ];

    pub const fn letter(self) -> char {
        match self {
            InterestCode::Realistic => 'R',
            InterestCode::Investigative => 'I',
            InterestCode::Artistic => 'A',
            InterestCode::Social => 'S',
            InterestCode::Enterprising => 'E',
            InterestCode::Conventional => 'C',
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            InterestCode::Realistic => "Realistic",
            InterestCode::Investigative => "Investigative",
            InterestCode::Artistic => "Artistic",
            InterestCode::Social => "Social",
            InterestCode::Enterprising => "Enterprising",
            InterestCode::Conventional => "Conventional",
        }
    }
}

impl fmt::Display for InterestCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Raw interest-inventory scores keyed by code. Absent codes read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterestVector(pub BTreeMap<InterestCode, f32>);

impl InterestVector {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (InterestCode, f32)>,
    {
        Self(pairs.into_iter().collect())
    }

    pub fn score(&self, code: InterestCode) -> f32 {
        self.0.get(&code).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when at least one code carries a positive score.
    pub fn has_signal(&self) -> bool {
        self.0.values().any(|value| *value > 0.0)
    }
}

/// Broad academic field shared by tracks and subject classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackCategory {
    #[serde(alias = "Science")]
    Science,
    #[serde(alias = "Commerce")]
    Commerce,
    #[serde(alias = "Arts")]
    Arts,
}

impl TrackCategory {
    pub const ALL: [TrackCategory; 3] = [
        TrackCategory::Science,
        TrackCategory::Commerce,
        TrackCategory::Arts,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            TrackCategory::Science => "science",
            TrackCategory::Commerce => "commerce",
            TrackCategory::Arts => "arts",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            TrackCategory::Science => "Science",
            TrackCategory::Commerce => "Commerce",
            TrackCategory::Arts => "Arts",
        }
    }
}

impl fmt::Display for TrackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single subject result. `percentage` wins over the obtained/total pair when positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectMark {
    pub subject: String,
    #[serde(default)]
    pub percentage: Option<f32>,
    #[serde(default)]
    pub marks_obtained: Option<f32>,
    #[serde(default)]
    pub total_marks: Option<f32>,
}

impl SubjectMark {
    pub fn with_percentage(subject: impl Into<String>, percentage: f32) -> Self {
        Self {
            subject: subject.into(),
            percentage: Some(percentage),
            marks_obtained: None,
            total_marks: None,
        }
    }

    pub fn with_marks(subject: impl Into<String>, obtained: f32, total: f32) -> Self {
        Self {
            subject: subject.into(),
            percentage: None,
            marks_obtained: Some(obtained),
            total_marks: Some(total),
        }
    }

    /// Lower-cased, trimmed subject name used for alias matching.
    pub fn normalized_subject(&self) -> String {
        self.subject.trim().to_lowercase()
    }

    /// Effective percentage in (0, 100], or `None` when the record carries no usable score.
    pub fn effective_percentage(&self) -> Option<f32> {
        let direct = self
            .percentage
            .filter(|value| value.is_finite() && *value > 0.0);
        let derived = || match (self.marks_obtained, self.total_marks) {
            (Some(obtained), Some(total)) if obtained > 0.0 && total > 0.0 => {
                Some(obtained / total * 100.0)
            }
            _ => None,
        };

        direct
            .or_else(derived)
            .filter(|value| value.is_finite() && *value > 0.0)
            .map(|value| value.min(100.0))
    }
}

/// Student project with free-text description and optional explicit stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tech_stack: Option<Vec<String>>,
}

impl ProjectRecord {
    pub(crate) fn searchable_text(&self) -> String {
        format!(
            "{} {}",
            self.title,
            self.description.as_deref().unwrap_or_default()
        )
        .to_lowercase()
    }
}

/// Outside experience such as an internship, volunteering stint, or job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub verified: Option<bool>,
    #[serde(default)]
    pub duration: Option<String>,
}

impl ExperienceRecord {
    pub(crate) fn searchable_text(&self) -> String {
        format!(
            "{} {} {}",
            self.organization,
            self.role,
            self.description.as_deref().unwrap_or_default()
        )
        .to_lowercase()
    }

    pub fn is_verified(&self) -> bool {
        self.verified.unwrap_or(false)
    }
}

/// Everything the engine reads about one student.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(default)]
    pub interests: InterestVector,
    #[serde(default)]
    pub subject_marks: Vec<SubjectMark>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub experiences: Vec<ExperienceRecord>,
    /// Results of the in-app assessment, used where the profile itself has gaps.
    #[serde(default)]
    pub assessment: Option<AssessmentResults>,
}

impl StudentProfile {
    /// Profile interests, or the assessment's RIASEC scores when the profile has no
    /// positive score.
    pub fn effective_interests(&self) -> &InterestVector {
        match &self.assessment {
            Some(assessment) if !self.interests.has_signal() => &assessment.riasec,
            _ => &self.interests,
        }
    }

    /// Rejects values that break basic type contracts. Missing data is never an error.
    pub fn validate(&self) -> Result<(), ProfileError> {
        validate_interests(&self.interests)?;
        if let Some(assessment) = &self.assessment {
            validate_interests(&assessment.riasec)?;
            assessment.validate()?;
        }

        for mark in &self.subject_marks {
            if let Some(percentage) = mark.percentage {
                if !percentage.is_finite() || !(0.0..=100.0).contains(&percentage) {
                    return Err(ProfileError::PercentageOutOfRange {
                        subject: mark.subject.clone(),
                        value: percentage,
                    });
                }
            }
            if let (Some(obtained), Some(total)) = (mark.marks_obtained, mark.total_marks) {
                if obtained < 0.0 || total < 0.0 || obtained > total {
                    return Err(ProfileError::InconsistentMarks {
                        subject: mark.subject.clone(),
                        obtained,
                        total,
                    });
                }
            }
        }

        Ok(())
    }
}

fn validate_interests(interests: &InterestVector) -> Result<(), ProfileError> {
    for (code, value) in &interests.0 {
        if !value.is_finite() {
            return Err(ProfileError::NonFiniteInterest { code: *code });
        }
        if *value < 0.0 {
            return Err(ProfileError::NegativeInterest {
                code: *code,
                value: *value,
            });
        }
    }
    Ok(())
}

/// Aptitude section percentages from the assessment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AptitudeScores {
    #[serde(default)]
    pub numerical: Option<f32>,
    #[serde(default)]
    pub verbal: Option<f32>,
    #[serde(default)]
    pub logical: Option<f32>,
    #[serde(default)]
    pub spatial: Option<f32>,
    /// Overall aptitude percentage; the mean of the sections when absent.
    #[serde(default)]
    pub overall: Option<f32>,
}

impl AptitudeScores {
    pub fn overall_score(&self) -> Option<f32> {
        if self.overall.is_some() {
            return self.overall;
        }
        let sections: Vec<f32> = self.sections().into_iter().flatten().collect();
        if sections.is_empty() {
            return None;
        }
        Some(sections.iter().sum::<f32>() / sections.len() as f32)
    }

    fn sections(&self) -> [Option<f32>; 4] {
        [self.numerical, self.verbal, self.logical, self.spatial]
    }
}

/// Stream-knowledge test outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeScore {
    #[serde(default)]
    pub score: Option<f32>,
    #[serde(default)]
    pub dominant_area: Option<TrackCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResults {
    #[serde(default)]
    pub riasec: InterestVector,
    #[serde(default)]
    pub aptitude: Option<AptitudeScores>,
    #[serde(default)]
    pub knowledge: Option<KnowledgeScore>,
}

impl AssessmentResults {
    fn validate(&self) -> Result<(), ProfileError> {
        let aptitude = self.aptitude.unwrap_or_default();
        let scores = [
            ("numerical", aptitude.numerical),
            ("verbal", aptitude.verbal),
            ("logical", aptitude.logical),
            ("spatial", aptitude.spatial),
            ("overall", aptitude.overall),
            ("knowledge", self.knowledge.and_then(|knowledge| knowledge.score)),
        ];
        for (section, value) in scores {
            if let Some(value) = value {
                if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                    return Err(ProfileError::AssessmentOutOfRange {
                        section: section.to_string(),
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("interest score for {code} must be finite")]
    NonFiniteInterest { code: InterestCode },
    #[error("interest score for {code} is negative ({value})")]
    NegativeInterest { code: InterestCode, value: f32 },
    #[error("percentage for '{subject}' must be within 0-100 (got {value})")]
    PercentageOutOfRange { subject: String, value: f32 },
    #[error("marks for '{subject}' are inconsistent ({obtained}/{total})")]
    InconsistentMarks {
        subject: String,
        obtained: f32,
        total: f32,
    },
    #[error("assessment {section} score must be within 0-100 (got {value})")]
    AssessmentOutOfRange { section: String, value: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_prefers_direct_value() {
        let mark = SubjectMark {
            subject: "Physics".to_string(),
            percentage: Some(82.0),
            marks_obtained: Some(40.0),
            total_marks: Some(100.0),
        };
        assert_eq!(mark.effective_percentage(), Some(82.0));
    }

    #[test]
    fn percentage_derives_from_marks_when_missing_or_zero() {
        let mark = SubjectMark {
            subject: "Chemistry".to_string(),
            percentage: Some(0.0),
            marks_obtained: Some(45.0),
            total_marks: Some(50.0),
        };
        assert_eq!(mark.effective_percentage(), Some(90.0));
        assert_eq!(
            SubjectMark::with_marks("Biology", 0.0, 80.0).effective_percentage(),
            None
        );
    }

    #[test]
    fn interest_vector_deserializes_letters_and_names() {
        let vector: InterestVector =
            serde_json::from_str(r#"{"R": 4, "investigative": 7, "Social": 0}"#)
                .expect("interest vector parses");
        assert_eq!(vector.score(InterestCode::Realistic), 4.0);
        assert_eq!(vector.score(InterestCode::Investigative), 7.0);
        assert_eq!(vector.score(InterestCode::Conventional), 0.0);
        assert!(vector.has_signal());
    }

    #[test]
    fn validate_rejects_negative_interest() {
        let profile = StudentProfile {
            interests: InterestVector::from_pairs([(InterestCode::Artistic, -1.0)]),
            ..StudentProfile::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::NegativeInterest {
                code: InterestCode::Artistic,
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_percentage() {
        let profile = StudentProfile {
            subject_marks: vec![SubjectMark::with_percentage("English", 104.0)],
            ..StudentProfile::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::PercentageOutOfRange { .. })
        ));
    }

    #[test]
    fn assessment_interests_fill_an_empty_profile() {
        let assessment = AssessmentResults {
            riasec: InterestVector::from_pairs([(InterestCode::Social, 18.0)]),
            ..AssessmentResults::default()
        };
        let mut profile = StudentProfile {
            assessment: Some(assessment),
            ..StudentProfile::default()
        };
        assert_eq!(
            profile.effective_interests().score(InterestCode::Social),
            18.0
        );

        profile.interests = InterestVector::from_pairs([(InterestCode::Realistic, 3.0)]);
        assert_eq!(profile.effective_interests().score(InterestCode::Social), 0.0);
    }

    #[test]
    fn validate_rejects_out_of_range_aptitude() {
        let json = r#"{ "assessment": { "aptitude": { "verbal": 140 } } }"#;
        let profile: StudentProfile = serde_json::from_str(json).expect("profile parses");
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::AssessmentOutOfRange { ref section, .. }) if section == "verbal"
        ));
    }

    #[test]
    fn overall_aptitude_defaults_to_section_mean() {
        let aptitude = AptitudeScores {
            numerical: Some(80.0),
            verbal: Some(60.0),
            ..AptitudeScores::default()
        };
        assert_eq!(aptitude.overall_score(), Some(70.0));
        assert_eq!(AptitudeScores::default().overall_score(), None);
    }

    #[test]
    fn category_parses_either_case() {
        let lower: TrackCategory = serde_json::from_str("\"commerce\"").expect("lowercase");
        let title: TrackCategory = serde_json::from_str("\"Arts\"").expect("title case");
        assert_eq!(lower, TrackCategory::Commerce);
        assert_eq!(title, TrackCategory::Arts);
    }
}
