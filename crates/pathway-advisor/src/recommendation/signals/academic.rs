use std::collections::BTreeMap;

use serde::Serialize;

use crate::recommendation::domain::{AssessmentResults, SubjectMark, TrackCategory};

const TOP_SUBJECT_LIMIT: usize = 5;

const SCIENCE_ALIASES: &[&str] = &[
    "physics",
    "phy",
    "chemistry",
    "chem",
    "biology",
    "bio",
    "mathematics",
    "maths",
    "math",
    "science",
    "computer",
    "cs",
    "it",
    "zoology",
    "botany",
];

const COMMERCE_ALIASES: &[&str] = &[
    "accountancy",
    "accounts",
    "accounting",
    "economics",
    "eco",
    "commerce",
    "business",
    "finance",
    "taxation",
    "management",
];

const ARTS_ALIASES: &[&str] = &[
    "english",
    "eng",
    "history",
    "hist",
    "political",
    "civics",
    "sociology",
    "psychology",
    "philosophy",
    "geography",
    "hindi",
    "literature",
];

fn category_aliases(category: TrackCategory) -> &'static [&'static str] {
    match category {
        TrackCategory::Science => SCIENCE_ALIASES,
        TrackCategory::Commerce => COMMERCE_ALIASES,
        TrackCategory::Arts => ARTS_ALIASES,
    }
}

/// Attributes a lower-cased subject name to one broad category.
///
/// The category owning the longest alias contained in the name wins; equal lengths keep
/// declared category order.
pub fn classify_subject(subject: &str) -> Option<TrackCategory> {
    let mut best: Option<(usize, TrackCategory)> = None;
    for category in TrackCategory::ALL {
        let longest = category_aliases(category)
            .iter()
            .filter(|alias| subject.contains(**alias))
            .map(|alias| alias.len())
            .max();
        if let Some(length) = longest {
            if best.map_or(true, |(current, _)| length > current) {
                best = Some((length, category));
            }
        }
    }
    best.map(|(_, category)| category)
}

/// Where the academic signal came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AcademicSource {
    #[default]
    Marks,
    Assessment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectScore {
    pub subject: String,
    pub percentage: f32,
}

/// Academic strengths folded from subject marks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AcademicSignal {
    pub has_data: bool,
    pub source: AcademicSource,
    /// Best percentage per normalized subject name, in first-seen order. Category
    /// affinities are averaged over these entries.
    pub subjects: Vec<SubjectScore>,
    pub category_affinity: BTreeMap<TrackCategory, u8>,
    pub dominant_category: Option<TrackCategory>,
    /// Rounded mean over `subjects`.
    pub strength: u8,
    pub top_subjects: Vec<SubjectScore>,
}

impl AcademicSignal {
    pub fn analyze(marks: &[SubjectMark]) -> Self {
        let mut subjects: Vec<SubjectScore> = Vec::new();

        for mark in marks {
            let name = mark.normalized_subject();
            if name.is_empty() {
                continue;
            }
            let Some(percentage) = mark.effective_percentage() else {
                continue;
            };

            match subjects.iter_mut().find(|entry| entry.subject == name) {
                Some(entry) if entry.percentage < percentage => entry.percentage = percentage,
                Some(_) => {}
                None => subjects.push(SubjectScore {
                    subject: name,
                    percentage,
                }),
            }
        }

        if subjects.is_empty() {
            return Self::default();
        }

        let (category_affinity, dominant_category) = fold_categories(&subjects, classify_subject);

        let percentages: Vec<f32> = subjects.iter().map(|entry| entry.percentage).collect();
        let strength = rounded_mean(&percentages);
        let top_subjects = top_subjects(&subjects);

        Self {
            has_data: true,
            source: AcademicSource::Marks,
            subjects,
            category_affinity,
            dominant_category,
            strength,
            top_subjects,
        }
    }

    /// Academic estimate from aptitude and stream-knowledge results, for students with no
    /// marks on file. Without aptitude results there is no data.
    ///
    /// Aptitude sections stand in for subjects (numerical for mathematics, verbal for
    /// english) and science subjects are blended from the logical, numerical, verbal and
    /// knowledge scores. Category affinity blends two aptitude sections (70%) with the
    /// knowledge score (30%).
    pub fn from_assessment(assessment: &AssessmentResults) -> Self {
        let Some(aptitude) = assessment.aptitude else {
            return Self::default();
        };
        let knowledge = assessment.knowledge.unwrap_or_default();

        let numerical = aptitude.numerical.unwrap_or(0.0);
        let verbal = aptitude.verbal.unwrap_or(0.0);
        let logical = aptitude.logical.unwrap_or(0.0);
        let spatial = aptitude.spatial.unwrap_or(0.0);
        let known = knowledge.score.unwrap_or(0.0);

        let subjects: Vec<SubjectScore> = [
            ("mathematics", numerical),
            ("english", verbal),
            ("logical reasoning", logical),
            ("spatial reasoning", spatial),
            (
                "physics",
                (logical * 0.6 + numerical * 0.3 + known * 0.1).round(),
            ),
            (
                "chemistry",
                (logical * 0.5 + numerical * 0.4 + known * 0.1).round(),
            ),
            (
                "biology",
                (verbal * 0.4 + logical * 0.4 + known * 0.2).round(),
            ),
            ("stream knowledge", known),
        ]
        .into_iter()
        .filter(|(_, percentage)| *percentage > 0.0)
        .map(|(subject, percentage)| SubjectScore {
            subject: subject.to_string(),
            percentage: percentage.min(100.0),
        })
        .collect();

        let blend = |first: f32, second: f32| {
            ((first + second) / 2.0 * 0.7 + known * 0.3)
                .round()
                .clamp(0.0, 100.0) as u8
        };
        let category_affinity: BTreeMap<TrackCategory, u8> = [
            (TrackCategory::Science, blend(numerical, logical)),
            (TrackCategory::Commerce, blend(numerical, verbal)),
            (TrackCategory::Arts, blend(verbal, spatial)),
        ]
        .into_iter()
        .collect();

        let dominant_category = knowledge.dominant_area.or_else(|| {
            TrackCategory::ALL
                .iter()
                .filter(|category| category_affinity[*category] > 0)
                .fold(None::<TrackCategory>, |best, category| match best {
                    Some(current) if category_affinity[&current] >= category_affinity[category] => {
                        Some(current)
                    }
                    _ => Some(*category),
                })
        });

        let overall = aptitude.overall_score().unwrap_or(50.0);
        let strength = match knowledge.score {
            Some(score) => (overall + score) / 2.0,
            None => overall,
        }
        .round()
        .clamp(0.0, 100.0) as u8;

        let top_subjects = top_subjects(&subjects);

        Self {
            has_data: true,
            source: AcademicSource::Assessment,
            subjects,
            category_affinity,
            dominant_category,
            strength,
            top_subjects,
        }
    }

    pub fn affinity(&self, category: TrackCategory) -> u8 {
        self.category_affinity.get(&category).copied().unwrap_or(0)
    }

    /// Dominant category when subjects accepted by `claims` are read as `category`.
    ///
    /// Used per track: a subject the track lists as core always counts toward the track's
    /// own category, so a better mark in it never moves dominance away from that track.
    pub fn dominant_category_claiming<F>(
        &self,
        category: TrackCategory,
        claims: F,
    ) -> Option<TrackCategory>
    where
        F: Fn(&str) -> bool,
    {
        if !self.has_data {
            return None;
        }
        if self.source == AcademicSource::Assessment {
            return self.dominant_category;
        }
        let classify = |subject: &str| {
            if claims(subject) {
                Some(category)
            } else {
                classify_subject(subject)
            }
        };
        fold_categories(&self.subjects, classify).1
    }
}

fn top_subjects(subjects: &[SubjectScore]) -> Vec<SubjectScore> {
    let mut top: Vec<SubjectScore> = subjects
        .iter()
        .map(|entry| SubjectScore {
            subject: entry.subject.clone(),
            percentage: entry.percentage.round(),
        })
        .collect();
    top.sort_by(|left, right| right.percentage.total_cmp(&left.percentage));
    top.truncate(TOP_SUBJECT_LIMIT);
    top
}

/// Mean percentage per category and the highest one; ties keep declared category order.
fn fold_categories<F>(
    subjects: &[SubjectScore],
    classify: F,
) -> (BTreeMap<TrackCategory, u8>, Option<TrackCategory>)
where
    F: Fn(&str) -> Option<TrackCategory>,
{
    let mut scores: BTreeMap<TrackCategory, Vec<f32>> = BTreeMap::new();
    for entry in subjects {
        if let Some(category) = classify(&entry.subject) {
            scores.entry(category).or_default().push(entry.percentage);
        }
    }

    let affinity: BTreeMap<TrackCategory, u8> = TrackCategory::ALL
        .iter()
        .map(|category| {
            let mean = scores.get(category).map(|values| rounded_mean(values)).unwrap_or(0);
            (*category, mean)
        })
        .collect();

    let dominant = TrackCategory::ALL
        .iter()
        .filter(|category| scores.contains_key(category))
        .fold(None::<TrackCategory>, |best, category| match best {
            Some(current) if affinity[&current] >= affinity[category] => Some(current),
            _ => Some(*category),
        });

    (affinity, dominant)
}

fn rounded_mean(values: &[f32]) -> u8 {
    if values.is_empty() {
        return 0;
    }
    let mean = values.iter().sum::<f32>() / values.len() as f32;
    mean.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::domain::{AptitudeScores, KnowledgeScore};

    #[test]
    fn longest_alias_decides_category() {
        assert_eq!(
            classify_subject("political science"),
            Some(TrackCategory::Arts)
        );
        assert_eq!(
            classify_subject("computer science"),
            Some(TrackCategory::Science)
        );
        assert_eq!(classify_subject("literature"), Some(TrackCategory::Arts));
        assert_eq!(
            classify_subject("business studies"),
            Some(TrackCategory::Commerce)
        );
        assert_eq!(classify_subject("physical education"), Some(TrackCategory::Science));
        assert_eq!(classify_subject("music"), None);
    }

    #[test]
    fn no_marks_means_no_data() {
        let signal = AcademicSignal::analyze(&[]);
        assert!(!signal.has_data);
        assert_eq!(signal.dominant_category, None);
        assert_eq!(signal.strength, 0);
    }

    #[test]
    fn duplicates_keep_best_percentage() {
        let marks = vec![
            SubjectMark::with_percentage("Physics", 70.0),
            SubjectMark::with_percentage(" physics ", 88.0),
            SubjectMark::with_marks("Chemistry", 45.0, 50.0),
        ];
        let signal = AcademicSignal::analyze(&marks);
        assert_eq!(signal.subjects.len(), 2);
        assert_eq!(signal.subjects[0].percentage, 88.0);
        assert_eq!(signal.strength, 89);
        assert_eq!(signal.dominant_category, Some(TrackCategory::Science));
        assert_eq!(signal.top_subjects[0].subject, "chemistry");
    }

    #[test]
    fn dominant_category_is_highest_affinity() {
        let marks = vec![
            SubjectMark::with_percentage("Mathematics", 60.0),
            SubjectMark::with_percentage("Accountancy", 91.0),
            SubjectMark::with_percentage("Economics", 85.0),
            SubjectMark::with_percentage("English", 72.0),
        ];
        let signal = AcademicSignal::analyze(&marks);
        assert_eq!(signal.affinity(TrackCategory::Commerce), 88);
        assert_eq!(signal.affinity(TrackCategory::Science), 60);
        assert_eq!(signal.dominant_category, Some(TrackCategory::Commerce));
    }

    #[test]
    fn unmatched_subjects_leave_no_dominant_category() {
        let marks = vec![SubjectMark::with_percentage("Music", 95.0)];
        let signal = AcademicSignal::analyze(&marks);
        assert!(signal.has_data);
        assert_eq!(signal.dominant_category, None);
        assert_eq!(signal.strength, 95);
    }

    #[test]
    fn claimed_subjects_count_toward_the_claiming_category() {
        let marks = vec![
            SubjectMark::with_percentage("Physics", 70.0),
            SubjectMark::with_percentage("English", 95.0),
        ];
        let signal = AcademicSignal::analyze(&marks);
        assert_eq!(signal.dominant_category, Some(TrackCategory::Arts));
        let claimed = signal.dominant_category_claiming(TrackCategory::Science, |subject| {
            subject.contains("english")
        });
        assert_eq!(claimed, Some(TrackCategory::Science));
    }

    fn aptitude(numerical: f32, verbal: f32, logical: f32, spatial: f32) -> AptitudeScores {
        AptitudeScores {
            numerical: Some(numerical),
            verbal: Some(verbal),
            logical: Some(logical),
            spatial: Some(spatial),
            overall: None,
        }
    }

    #[test]
    fn assessment_maps_aptitude_onto_subjects() {
        let assessment = AssessmentResults {
            aptitude: Some(aptitude(80.0, 60.0, 100.0, 40.0)),
            knowledge: Some(KnowledgeScore {
                score: Some(70.0),
                dominant_area: None,
            }),
            ..AssessmentResults::default()
        };
        let signal = AcademicSignal::from_assessment(&assessment);

        assert!(signal.has_data);
        assert_eq!(signal.source, AcademicSource::Assessment);
        let score = |name: &str| {
            signal
                .subjects
                .iter()
                .find(|entry| entry.subject == name)
                .map(|entry| entry.percentage)
        };
        assert_eq!(score("mathematics"), Some(80.0));
        assert_eq!(score("english"), Some(60.0));
        assert_eq!(score("physics"), Some(91.0));
        assert_eq!(score("chemistry"), Some(89.0));
        assert_eq!(score("biology"), Some(78.0));

        assert_eq!(signal.affinity(TrackCategory::Science), 84);
        assert_eq!(signal.affinity(TrackCategory::Commerce), 70);
        assert_eq!(signal.affinity(TrackCategory::Arts), 56);
        assert_eq!(signal.dominant_category, Some(TrackCategory::Science));
        assert_eq!(signal.strength, 70);
        assert_eq!(signal.top_subjects[0].subject, "logical reasoning");
    }

    #[test]
    fn knowledge_area_overrides_affinity_and_claiming() {
        let assessment = AssessmentResults {
            aptitude: Some(aptitude(90.0, 50.0, 90.0, 50.0)),
            knowledge: Some(KnowledgeScore {
                score: None,
                dominant_area: Some(TrackCategory::Commerce),
            }),
            ..AssessmentResults::default()
        };
        let signal = AcademicSignal::from_assessment(&assessment);
        assert_eq!(signal.dominant_category, Some(TrackCategory::Commerce));
        assert_eq!(signal.strength, 70);
        assert_eq!(
            signal.dominant_category_claiming(TrackCategory::Science, |_| true),
            Some(TrackCategory::Commerce)
        );
    }

    #[test]
    fn assessment_without_aptitude_has_no_data() {
        let assessment = AssessmentResults {
            knowledge: Some(KnowledgeScore {
                score: Some(88.0),
                dominant_area: Some(TrackCategory::Arts),
            }),
            ..AssessmentResults::default()
        };
        assert!(!AcademicSignal::from_assessment(&assessment).has_data);
    }

    #[test]
    fn keeps_five_top_subjects() {
        let marks: Vec<_> = ["a", "b", "c", "d", "e", "f", "g"]
            .iter()
            .enumerate()
            .map(|(index, name)| SubjectMark::with_percentage(*name, 50.0 + index as f32))
            .collect();
        let signal = AcademicSignal::analyze(&marks);
        assert_eq!(signal.top_subjects.len(), 5);
        assert_eq!(signal.top_subjects[0].subject, "g");
    }
}
