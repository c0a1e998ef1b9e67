//! Static knowledge base of candidate tracks.
//!
//! A catalog is loaded once (built-in tables or a JSON file) and then shared read-only across
//! requests. Catalog order is meaningful: ranking ties keep it.

mod courses;
mod streams;

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::{InterestCode, TrackCategory};

/// Stable identifier of a track inside its catalog (e.g. `bca`, `pcms`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(pub String);

impl TrackId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackKind {
    Course,
    Stream,
}

impl TrackKind {
    pub const fn label(self) -> &'static str {
        match self {
            TrackKind::Course => "course",
            TrackKind::Stream => "stream",
        }
    }

    /// Accepts singular or plural path segments (`course`, `streams`).
    pub fn from_segment(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "course" | "courses" => Some(TrackKind::Course),
            "stream" | "streams" => Some(TrackKind::Stream),
            _ => None,
        }
    }
}

/// RIASEC affinity of a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestModel {
    pub primary: Vec<InterestCode>,
    #[serde(default)]
    pub secondary: Vec<InterestCode>,
    #[serde(default)]
    pub weights: BTreeMap<InterestCode, f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedSubject {
    pub name: String,
    pub weight: f32,
}

/// Core subjects with weights, plus aliases that count toward every core subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectModel {
    pub core: Vec<WeightedSubject>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordModel {
    #[serde(default)]
    pub high: Vec<String>,
    #[serde(default)]
    pub medium: Vec<String>,
}

impl KeywordModel {
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.high.iter().chain(self.medium.iter()).map(String::as_str)
    }
}

/// Annual salary band in lakhs per annum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f32,
    pub max: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPath {
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_lpa: Option<SalaryRange>,
}

impl CareerPath {
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            salary_lpa: None,
        }
    }

    pub fn with_salary(role: impl Into<String>, min: f32, max: f32) -> Self {
        Self {
            role: role.into(),
            salary_lpa: Some(SalaryRange { min, max }),
        }
    }
}

/// Flags that unlock narrow bonuses in the scoring rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackTraits {
    #[serde(default)]
    pub technology_oriented: bool,
    #[serde(default)]
    pub high_growth: bool,
    #[serde(default)]
    pub entrepreneurial: bool,
}

/// A course or stream candidate as described by the knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackProfile {
    pub id: TrackId,
    pub kind: TrackKind,
    pub name: String,
    pub category: TrackCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub interests: InterestModel,
    pub subjects: SubjectModel,
    #[serde(default)]
    pub keywords: KeywordModel,
    #[serde(default)]
    pub career_paths: Vec<CareerPath>,
    #[serde(default)]
    pub future_relevance: Option<f32>,
    #[serde(default)]
    pub traits: TrackTraits,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entrance_exams: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_for: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub focus_subjects: Vec<String>,
}

impl TrackProfile {
    pub fn career_roles(&self) -> Vec<String> {
        self.career_paths
            .iter()
            .map(|path| path.role.clone())
            .collect()
    }
}

/// Immutable, ordered table of tracks keyed by [`TrackId`].
#[derive(Debug, Clone)]
pub struct TrackCatalog {
    tracks: Vec<TrackProfile>,
    index: HashMap<TrackId, usize>,
}

impl TrackCatalog {
    /// Validates and indexes externally supplied tracks.
    pub fn new(mut tracks: Vec<TrackProfile>) -> Result<Self, CatalogError> {
        if tracks.is_empty() {
            return Err(CatalogError::Empty);
        }

        for track in &mut tracks {
            normalize_terms(track);
            validate_track(track)?;
        }

        let mut index = HashMap::with_capacity(tracks.len());
        for (position, track) in tracks.iter().enumerate() {
            if index.insert(track.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(track.id.clone()));
            }
        }

        Ok(Self { tracks, index })
    }

    /// Built-in degree programs for after-12th students.
    pub fn builtin_courses() -> Self {
        Self::from_builtin(courses::course_profiles())
    }

    /// Built-in 11th/12th streams for after-10th students.
    pub fn builtin_streams() -> Self {
        Self::from_builtin(streams::stream_profiles())
    }

    pub fn builtin(kind: TrackKind) -> Self {
        match kind {
            TrackKind::Course => Self::builtin_courses(),
            TrackKind::Stream => Self::builtin_streams(),
        }
    }

    /// Loads `path` when given, otherwise the built-in catalog for `kind`.
    pub fn load(kind: TrackKind, path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => {
                let catalog = Self::from_path(path)?;
                if let Some(track) = catalog.iter().find(|track| track.kind != kind) {
                    return Err(CatalogError::KindMismatch {
                        id: track.id.clone(),
                        expected: kind,
                    });
                }
                Ok(catalog)
            }
            None => Ok(Self::builtin(kind)),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads a JSON array of track profiles.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let tracks: Vec<TrackProfile> = serde_json::from_reader(reader)?;
        Self::new(tracks)
    }

    fn from_builtin(tracks: Vec<TrackProfile>) -> Self {
        let index = tracks
            .iter()
            .enumerate()
            .map(|(position, track)| (track.id.clone(), position))
            .collect();
        Self { tracks, index }
    }

    pub fn get(&self, id: &TrackId) -> Option<&TrackProfile> {
        self.index.get(id).map(|position| &self.tracks[*position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackProfile> {
        self.tracks.iter()
    }

    pub fn tracks(&self) -> &[TrackProfile] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

/// Subject names, aliases and keywords are matched against lower-cased student text.
fn normalize_terms(track: &mut TrackProfile) {
    let normalize = |term: &mut String| *term = term.trim().to_lowercase();
    for subject in &mut track.subjects.core {
        normalize(&mut subject.name);
    }
    track.subjects.aliases.iter_mut().for_each(normalize);
    track.keywords.high.iter_mut().for_each(normalize);
    track.keywords.medium.iter_mut().for_each(normalize);
}

fn validate_track(track: &TrackProfile) -> Result<(), CatalogError> {
    if track.id.0.trim().is_empty() {
        return Err(CatalogError::InvalidTrack {
            id: track.id.clone(),
            reason: "identifier is blank".to_string(),
        });
    }

    if let Some(relevance) = track.future_relevance {
        if !(0.0..=1.0).contains(&relevance) {
            return Err(CatalogError::RelevanceOutOfRange {
                id: track.id.clone(),
                value: relevance,
            });
        }
    }

    if track.interests.primary.is_empty() {
        return Err(CatalogError::InvalidTrack {
            id: track.id.clone(),
            reason: "no primary interest codes".to_string(),
        });
    }

    let blank_term = track
        .subjects
        .core
        .iter()
        .map(|subject| subject.name.as_str())
        .chain(track.subjects.aliases.iter().map(String::as_str))
        .chain(track.keywords.all())
        .any(|term| term.trim().is_empty());
    if blank_term {
        return Err(CatalogError::InvalidTrack {
            id: track.id.clone(),
            reason: "subject names, aliases and keywords must not be blank".to_string(),
        });
    }

    let negative_weight = track
        .subjects
        .core
        .iter()
        .any(|subject| !subject.weight.is_finite() || subject.weight < 0.0)
        || track
            .interests
            .weights
            .values()
            .any(|weight| !weight.is_finite() || *weight < 0.0);
    if negative_weight {
        return Err(CatalogError::InvalidTrack {
            id: track.id.clone(),
            reason: "weights must be finite and non-negative".to_string(),
        });
    }

    Ok(())
}

fn interest_model(
    primary: &[InterestCode],
    secondary: &[InterestCode],
    weights: &[(InterestCode, f32)],
) -> InterestModel {
    InterestModel {
        primary: primary.to_vec(),
        secondary: secondary.to_vec(),
        weights: weights.iter().copied().collect(),
    }
}

fn subject_model(core: &[(&str, f32)], aliases: &[&str]) -> SubjectModel {
    SubjectModel {
        core: core
            .iter()
            .map(|(name, weight)| WeightedSubject {
                name: (*name).to_string(),
                weight: *weight,
            })
            .collect(),
        aliases: strings(aliases),
    }
}

fn keyword_model(high: &[&str], medium: &[&str]) -> KeywordModel {
    KeywordModel {
        high: strings(high),
        medium: strings(medium),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog contains no tracks")]
    Empty,
    #[error("duplicate track id '{0}'")]
    DuplicateId(TrackId),
    #[error("track '{id}' has future relevance {value} outside 0..=1")]
    RelevanceOutOfRange { id: TrackId, value: f32 },
    #[error("track '{id}' is invalid: {reason}")]
    InvalidTrack { id: TrackId, reason: String },
    #[error("track '{id}' is not a {}", expected.label())]
    KindMismatch { id: TrackId, expected: TrackKind },
}
