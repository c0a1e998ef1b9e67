use std::collections::BTreeSet;

use regex::Regex;
use serde::Serialize;

use super::patterns::{DomainCount, DomainTally, PatternError};
use super::{SignalPatterns, SignalWeights};
use crate::recommendation::domain::ExperienceRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerSignal {
    Internship,
    Leadership,
    Entrepreneurial,
}

/// Duration and career-signal regexes applied to experience records.
#[derive(Debug, Clone)]
pub struct ExperienceRules {
    months: Regex,
    years: Regex,
    signals: Vec<(CareerSignal, Regex)>,
}

impl ExperienceRules {
    pub fn standard() -> Result<Self, PatternError> {
        let compile = |name: &str, source: &str| {
            Regex::new(source).map_err(|source| PatternError::InvalidPattern {
                name: name.to_string(),
                source,
            })
        };

        Ok(Self {
            months: compile("months", r"(?i)(\d+)\s*(?:month|mon)")?,
            years: compile("years", r"(?i)(\d+)\s*(?:year|yr)")?,
            signals: vec![
                (CareerSignal::Internship, compile("internship", r"(?i)intern")?),
                (
                    CareerSignal::Leadership,
                    compile("leadership", r"(?i)lead|manager|head")?,
                ),
                (
                    CareerSignal::Entrepreneurial,
                    compile("entrepreneurial", r"(?i)founder|startup")?,
                ),
            ],
        })
    }

    /// Months named by the first month token plus twelve per year of the first year token.
    pub fn months_in(&self, duration: &str) -> u32 {
        let first_number = |pattern: &Regex| {
            pattern
                .captures(duration)
                .and_then(|captures| captures.get(1))
                .and_then(|number| number.as_str().parse::<u32>().ok())
                .unwrap_or(0)
        };
        first_number(&self.months).saturating_add(first_number(&self.years).saturating_mul(12))
    }

    pub fn signals_in<'a>(&'a self, text: &'a str) -> impl Iterator<Item = CareerSignal> + 'a {
        self.signals
            .iter()
            .filter(move |(_, pattern)| pattern.is_match(text))
            .map(|(signal, _)| *signal)
    }
}

/// Experience-derived readiness and career signals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExperienceSignal {
    pub has_data: bool,
    pub record_count: usize,
    pub types: Vec<DomainCount>,
    pub verified_count: usize,
    /// Types hit by at least one verified record.
    pub verified_types: BTreeSet<String>,
    pub total_months: u32,
    pub career_signals: BTreeSet<CareerSignal>,
    pub readiness: f32,
}

impl ExperienceSignal {
    pub fn analyze(
        records: &[ExperienceRecord],
        patterns: &SignalPatterns,
        weights: &SignalWeights,
    ) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let matcher = patterns.experience_domains();
        let rules = patterns.experience_rules();
        let mut tally = DomainTally::new(matcher.domains().len());
        let mut verified_types = BTreeSet::new();
        let mut verified_count = 0usize;
        let mut total_months = 0u32;
        let mut career_signals = BTreeSet::new();

        for record in records {
            let text = record.searchable_text();
            let hits = matcher.hits(&text);
            tally.add(&hits);

            if record.is_verified() {
                verified_count += 1;
                verified_types.extend(
                    matcher
                        .domains()
                        .iter()
                        .zip(&hits)
                        .filter(|(_, hits)| **hits > 0)
                        .map(|(domain, _)| domain.clone()),
                );
            }
            if let Some(duration) = &record.duration {
                total_months = total_months.saturating_add(rules.months_in(duration));
            }
            career_signals.extend(rules.signals_in(&text));
        }

        let readiness = (records.len() as f32 * weights.readiness_per_record
            + verified_count as f32 * weights.readiness_per_verified
            + total_months as f32 * weights.readiness_per_month
            + career_signals.len() as f32 * weights.readiness_per_signal)
            .min(100.0);

        Self {
            has_data: true,
            record_count: records.len(),
            types: tally.ranked(matcher.domains()),
            verified_count,
            verified_types,
            total_months,
            career_signals,
            readiness,
        }
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|count| count.domain.as_str())
    }

    pub fn has_signal(&self, signal: CareerSignal) -> bool {
        self.career_signals.contains(&signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(organization: &str, role: &str, verified: bool, duration: &str) -> ExperienceRecord {
        ExperienceRecord {
            organization: organization.to_string(),
            role: role.to_string(),
            description: None,
            verified: Some(verified),
            duration: Some(duration.to_string()),
        }
    }

    fn analyze(records: &[ExperienceRecord]) -> ExperienceSignal {
        let patterns = SignalPatterns::builtin().expect("builtin patterns compile");
        ExperienceSignal::analyze(records, &patterns, &SignalWeights::default())
    }

    #[test]
    fn durations_add_months_and_years() {
        let rules = ExperienceRules::standard().expect("rules compile");
        assert_eq!(rules.months_in("6 months"), 6);
        assert_eq!(rules.months_in("1 Year 3 mon"), 15);
        assert_eq!(rules.months_in("2yrs"), 24);
        assert_eq!(rules.months_in("summer"), 0);
    }

    #[test]
    fn no_records_means_no_data() {
        let signal = analyze(&[]);
        assert!(!signal.has_data);
        assert_eq!(signal.readiness, 0.0);
    }

    #[test]
    fn readiness_combines_counts_and_signals() {
        let signal = analyze(&[
            record("Acme Software", "Developer Intern", true, "3 months"),
            record("City NGO", "Volunteer", false, ""),
        ]);
        assert_eq!(signal.record_count, 2);
        assert_eq!(signal.verified_count, 1);
        assert_eq!(signal.total_months, 3);
        assert!(signal.has_signal(CareerSignal::Internship));
        assert!(!signal.has_signal(CareerSignal::Leadership));
        // 2*12 + 1*18 + 3*2 + 1*12
        assert_eq!(signal.readiness, 60.0);
        assert!(signal.verified_types.contains("technology"));
        assert!(!signal.verified_types.contains("social"));
        let types: Vec<_> = signal.type_names().collect();
        assert_eq!(types, vec!["technology", "social"]);
    }

    #[test]
    fn readiness_is_capped() {
        let records: Vec<_> = (0..6)
            .map(|_| record("Startup Labs", "Founder and team lead", true, "2 years"))
            .collect();
        let signal = analyze(&records);
        assert_eq!(signal.readiness, 100.0);
        assert!(signal.has_signal(CareerSignal::Entrepreneurial));
        assert!(signal.has_signal(CareerSignal::Leadership));
    }
}
