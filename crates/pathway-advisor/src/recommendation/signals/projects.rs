use std::collections::BTreeSet;

use serde::Serialize;

use super::patterns::{DomainCount, DomainTally};
use super::{SignalPatterns, SignalWeights};
use crate::recommendation::domain::ProjectRecord;

/// What a student's projects say about their skills.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectSignal {
    pub has_data: bool,
    pub project_count: usize,
    /// Domains ranked by accumulated hits.
    pub domains: Vec<DomainCount>,
    pub technologies: BTreeSet<String>,
    pub complexity: f32,
    pub practical_experience: f32,
}

impl ProjectSignal {
    pub fn analyze(
        projects: &[ProjectRecord],
        patterns: &SignalPatterns,
        weights: &SignalWeights,
    ) -> Self {
        if projects.is_empty() {
            return Self::default();
        }

        let matcher = patterns.project_domains();
        let mut tally = DomainTally::new(matcher.domains().len());
        let mut technologies = BTreeSet::new();
        let mut capped_hits = 0usize;

        for project in projects {
            let text = project.searchable_text();
            let hits = matcher.hits(&text);
            capped_hits += hits.iter().sum::<usize>().min(weights.project_hit_cap);
            tally.add(&hits);

            technologies.extend(patterns.technologies().extract(&text));
            if let Some(stack) = &project.tech_stack {
                technologies.extend(
                    stack
                        .iter()
                        .map(|tag| tag.trim().to_lowercase())
                        .filter(|tag| !tag.is_empty()),
                );
            }
        }

        let count = projects.len() as f32;
        let complexity =
            (capped_hits as f32 / count * weights.complexity_per_hit).min(100.0);
        let practical_experience = (count * weights.practical_per_project
            + complexity * weights.practical_complexity_share)
            .min(100.0);

        Self {
            has_data: true,
            project_count: projects.len(),
            domains: tally.ranked(matcher.domains()),
            technologies,
            complexity,
            practical_experience,
        }
    }

    pub fn domain_names(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(|count| count.domain.as_str())
    }

    /// Emerging terms are matched as substrings of each technology.
    pub fn has_emerging_technology(&self, emerging: &[String]) -> bool {
        self.technologies
            .iter()
            .any(|tech| emerging.iter().any(|term| tech.contains(term.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, description: &str) -> ProjectRecord {
        ProjectRecord {
            title: title.to_string(),
            description: Some(description.to_string()),
            tech_stack: None,
        }
    }

    fn analyze(projects: &[ProjectRecord]) -> ProjectSignal {
        let patterns = SignalPatterns::builtin().expect("builtin patterns compile");
        ProjectSignal::analyze(projects, &patterns, &SignalWeights::default())
    }

    #[test]
    fn no_projects_means_no_data() {
        let signal = analyze(&[]);
        assert!(!signal.has_data);
        assert_eq!(signal.complexity, 0.0);
        assert!(signal.technologies.is_empty());
    }

    #[test]
    fn extracts_domains_and_technologies() {
        let signal = analyze(&[
            project("Campus app", "A react web app backed by a python api and a database"),
            project("Survey study", "Data analysis for a research survey"),
        ]);
        let domains: Vec<_> = signal.domain_names().collect();
        assert_eq!(domains, vec!["technology", "research"]);
        assert!(signal.technologies.contains("python"));
        assert!(signal.technologies.contains("react"));
        assert!(signal.technologies.contains("database"));
        assert_eq!(signal.project_count, 2);
    }

    #[test]
    fn complexity_caps_hits_per_project() {
        let dense = "python ".repeat(40);
        let signal = analyze(&[project("Scripts", &dense)]);
        assert_eq!(signal.complexity, 100.0);
        assert_eq!(signal.practical_experience, 58.0);
    }

    #[test]
    fn tech_stack_tags_are_normalized() {
        let mut record = project("Portfolio", "personal site");
        record.tech_stack = Some(vec![" Rust ".to_string(), "".to_string(), "Vue".to_string()]);
        let signal = analyze(&[record]);
        assert!(signal.technologies.contains("rust"));
        assert!(signal.technologies.contains("vue"));
        assert_eq!(signal.technologies.len(), 2);
    }

    #[test]
    fn emerging_terms_match_substrings() {
        let mut record = project("Notebook", "");
        record.tech_stack = Some(vec!["pandas".to_string(), "Google Cloud".to_string()]);
        let signal = analyze(&[record]);
        let emerging = vec!["cloud".to_string()];
        assert!(signal.has_emerging_technology(&emerging));
        assert!(!signal.has_emerging_technology(&["kotlin".to_string()]));
    }
}
