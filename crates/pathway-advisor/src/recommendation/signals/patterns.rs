use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Classifies free text into named domains.
///
/// The engine only depends on this trait, so a regex table can be replaced by another
/// classifier without touching the scoring rules.
pub trait DomainMatcher: Send + Sync + fmt::Debug {
    /// Domain names in declared order.
    fn domains(&self) -> &[String];

    /// Hit count per domain, aligned with [`DomainMatcher::domains`].
    fn hits(&self, text: &str) -> Vec<usize>;

    fn position(&self, domain: &str) -> Option<usize> {
        self.domains().iter().position(|name| name == domain)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainPattern {
    pub domain: String,
    pub terms: Vec<String>,
}

/// Named domain -> term list table. Terms match case-insensitively on word boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternTable {
    pub domains: Vec<DomainPattern>,
}

impl PatternTable {
    fn from_static(entries: &[(&str, &[&str])]) -> Self {
        Self {
            domains: entries
                .iter()
                .map(|(domain, terms)| DomainPattern {
                    domain: (*domain).to_string(),
                    terms: terms.iter().map(|term| (*term).to_string()).collect(),
                })
                .collect(),
        }
    }

    pub fn project_domains() -> Self {
        Self::from_static(&[
            (
                "technology",
                &[
                    "software",
                    "app",
                    "web",
                    "mobile",
                    "python",
                    "java",
                    "react",
                    "node",
                    "database",
                    "api",
                    "machine learning",
                    "ai",
                    "ml",
                    "backend",
                    "frontend",
                    "fullstack",
                    "coding",
                    "programming",
                ],
            ),
            (
                "business",
                &[
                    "startup",
                    "entrepreneur",
                    "business",
                    "marketing",
                    "sales",
                    "strategy",
                    "consulting",
                    "venture",
                    "product",
                    "growth",
                ],
            ),
            (
                "research",
                &[
                    "research",
                    "experiment",
                    "scientific",
                    "hypothesis",
                    "thesis",
                    "publication",
                    "analysis",
                    "survey",
                    "data",
                ],
            ),
            (
                "creative",
                &[
                    "design",
                    "art",
                    "creative",
                    "content",
                    "media",
                    "video",
                    "graphic",
                    "animation",
                    "ui",
                    "ux",
                    "visual",
                    "brand",
                ],
            ),
            (
                "social",
                &[
                    "ngo",
                    "volunteer",
                    "community",
                    "social",
                    "charity",
                    "nonprofit",
                    "humanitarian",
                    "awareness",
                ],
            ),
            (
                "finance",
                &[
                    "investment",
                    "stock",
                    "trading",
                    "portfolio",
                    "fintech",
                    "banking",
                    "financial",
                    "accounting",
                    "budget",
                    "audit",
                ],
            ),
            (
                "healthcare",
                &[
                    "medical",
                    "clinical",
                    "patient",
                    "healthcare",
                    "diagnosis",
                    "treatment",
                    "pharma",
                    "health",
                    "hospital",
                ],
            ),
        ])
    }

    pub fn experience_domains() -> Self {
        Self::from_static(&[
            (
                "technology",
                &[
                    "tech",
                    "software",
                    "it",
                    "developer",
                    "engineer",
                    "programmer",
                    "data",
                    "analyst",
                    "web",
                    "app",
                ],
            ),
            (
                "business",
                &[
                    "business",
                    "marketing",
                    "sales",
                    "management",
                    "executive",
                    "consultant",
                    "strategy",
                ],
            ),
            (
                "research",
                &[
                    "research",
                    "lab",
                    "scientist",
                    "analyst",
                    "academic",
                    "university",
                ],
            ),
            (
                "creative",
                &[
                    "design", "content", "media", "writer", "editor", "creative", "artist",
                    "video",
                ],
            ),
            (
                "social",
                &[
                    "volunteer",
                    "ngo",
                    "social",
                    "community",
                    "teaching",
                    "tutor",
                    "nonprofit",
                ],
            ),
            (
                "finance",
                &[
                    "finance",
                    "bank",
                    "accounting",
                    "audit",
                    "investment",
                    "ca",
                    "chartered",
                ],
            ),
            (
                "healthcare",
                &[
                    "hospital", "clinic", "medical", "health", "pharma", "doctor", "nurse",
                ],
            ),
            (
                "legal",
                &["legal", "law", "court", "advocate", "paralegal", "lawyer"],
            ),
        ])
    }
}

pub const TECHNOLOGY_TERMS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "node",
    "angular",
    "vue",
    "sql",
    "database",
    "mongodb",
    "aws",
    "azure",
    "docker",
    "tensorflow",
    "pytorch",
    "pandas",
    "excel",
    "tableau",
    "figma",
    "photoshop",
];

pub const EMERGING_TERMS: &[&str] = &[
    "ai",
    "ml",
    "machine learning",
    "python",
    "data",
    "cloud",
    "react",
    "node",
];

fn word_pattern(terms: &[String]) -> Result<String, PatternError> {
    let alternatives: Vec<String> = terms
        .iter()
        .map(|term| term.trim())
        .filter(|term| !term.is_empty())
        .map(regex::escape)
        .collect();
    if alternatives.is_empty() {
        return Err(PatternError::EmptyTerms);
    }
    Ok(format!(r"(?i)\b(?:{})\b", alternatives.join("|")))
}

/// Regex-backed [`DomainMatcher`]; one alternation per domain.
#[derive(Debug, Clone)]
pub struct RegexDomainMatcher {
    domains: Vec<String>,
    patterns: Vec<Regex>,
}

impl RegexDomainMatcher {
    pub fn new(table: &PatternTable) -> Result<Self, PatternError> {
        if table.domains.is_empty() {
            return Err(PatternError::EmptyTable);
        }

        let mut domains = Vec::with_capacity(table.domains.len());
        let mut patterns = Vec::with_capacity(table.domains.len());
        for entry in &table.domains {
            let source = word_pattern(&entry.terms).map_err(|_| PatternError::EmptyDomain {
                domain: entry.domain.clone(),
            })?;
            let regex = Regex::new(&source).map_err(|source| PatternError::InvalidPattern {
                name: entry.domain.clone(),
                source,
            })?;
            domains.push(entry.domain.clone());
            patterns.push(regex);
        }

        Ok(Self { domains, patterns })
    }
}

impl DomainMatcher for RegexDomainMatcher {
    fn domains(&self) -> &[String] {
        &self.domains
    }

    fn hits(&self, text: &str) -> Vec<usize> {
        self.patterns
            .iter()
            .map(|pattern| pattern.find_iter(text).count())
            .collect()
    }
}

/// Pulls known technology names out of free text.
#[derive(Debug, Clone)]
pub struct TermExtractor {
    pattern: Regex,
}

impl TermExtractor {
    pub fn new(terms: &[String]) -> Result<Self, PatternError> {
        let source = word_pattern(terms)?;
        let pattern = Regex::new(&source).map_err(|source| PatternError::InvalidPattern {
            name: "technologies".to_string(),
            source,
        })?;
        Ok(Self { pattern })
    }

    /// Lower-cased matches in order of appearance, duplicates included.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|found| found.as_str().to_lowercase())
            .collect()
    }
}

/// Domain name with its accumulated hit count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainCount {
    pub domain: String,
    pub hits: usize,
}

/// Sums per-domain hits across records.
#[derive(Debug, Clone)]
pub(crate) struct DomainTally {
    counts: Vec<usize>,
}

impl DomainTally {
    pub(crate) fn new(width: usize) -> Self {
        Self {
            counts: vec![0; width],
        }
    }

    pub(crate) fn add(&mut self, hits: &[usize]) {
        for (count, hit) in self.counts.iter_mut().zip(hits) {
            *count += hit;
        }
    }

    /// Domains with at least one hit, most hits first; ties keep declared order.
    pub(crate) fn ranked(&self, names: &[String]) -> Vec<DomainCount> {
        let mut ranked: Vec<DomainCount> = names
            .iter()
            .zip(&self.counts)
            .filter(|(_, hits)| **hits > 0)
            .map(|(domain, hits)| DomainCount {
                domain: domain.clone(),
                hits: *hits,
            })
            .collect();
        ranked.sort_by(|left, right| right.hits.cmp(&left.hits));
        ranked
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("pattern table has no domains")]
    EmptyTable,
    #[error("domain '{domain}' has no terms")]
    EmptyDomain { domain: String },
    #[error("term list is empty")]
    EmptyTerms,
    #[error("pattern for '{name}' failed to compile: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|term| (*term).to_string()).collect()
    }

    #[test]
    fn counts_hits_on_word_boundaries() {
        let matcher =
            RegexDomainMatcher::new(&PatternTable::project_domains()).expect("table compiles");
        let hits = matcher.hits("built a react app with python and an api; apple pie");
        let technology = matcher.position("technology").expect("technology domain");
        assert_eq!(hits[technology], 4);
    }

    #[test]
    fn multi_word_terms_match() {
        let matcher =
            RegexDomainMatcher::new(&PatternTable::project_domains()).expect("table compiles");
        let hits = matcher.hits("A Machine Learning survey");
        let technology = matcher.position("technology").expect("technology domain");
        let research = matcher.position("research").expect("research domain");
        assert_eq!(hits[technology], 1);
        assert_eq!(hits[research], 1);
    }

    #[test]
    fn rejects_domain_without_terms() {
        let table = PatternTable {
            domains: vec![DomainPattern {
                domain: "robotics".to_string(),
                terms: vec!["  ".to_string()],
            }],
        };
        match RegexDomainMatcher::new(&table) {
            Err(PatternError::EmptyDomain { domain }) => assert_eq!(domain, "robotics"),
            other => panic!("expected empty domain error, got {other:?}"),
        }
    }

    #[test]
    fn terms_are_escaped() {
        let extractor = TermExtractor::new(&owned(&["c++", "node.js"])).expect("compiles");
        assert!(extractor.extract("nodexjs").is_empty());
        assert_eq!(extractor.extract("Node.js backend"), vec!["node.js"]);
    }

    #[test]
    fn extractor_lowercases_matches() {
        let extractor = TermExtractor::new(&owned(TECHNOLOGY_TERMS)).expect("compiles");
        assert_eq!(
            extractor.extract("Python + React on a SQL Database"),
            vec!["python", "react", "sql", "database"]
        );
    }

    #[test]
    fn tally_ranks_by_hits_then_declared_order() {
        let names = owned(&["technology", "business", "research"]);
        let mut tally = DomainTally::new(names.len());
        tally.add(&[1, 2, 0]);
        tally.add(&[1, 0, 2]);
        let ranked: Vec<_> = tally
            .ranked(&names)
            .into_iter()
            .map(|count| count.domain)
            .collect();
        assert_eq!(ranked, vec!["technology", "business", "research"]);
    }
}
