use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::StudentProfile;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub String);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only lookup of assessment profiles owned by an external system.
pub trait ProfileStore: Send + Sync {
    fn fetch(&self, id: &StudentId) -> Result<Option<StudentProfile>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("profile store unavailable: {0}")]
    Unavailable(String),
    #[error("stored profile is malformed: {0}")]
    Malformed(String),
}
