use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::BandThresholds;

/// Qualitative label for a 0-100 match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchBand {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Fair,
    Moderate,
    Good,
    #[serde(rename = "Very Good")]
    VeryGood,
    Excellent,
    Exceptional,
}

impl MatchBand {
    pub fn classify(score: u8, thresholds: &BandThresholds) -> Self {
        match score {
            s if s >= thresholds.exceptional => MatchBand::Exceptional,
            s if s >= thresholds.excellent => MatchBand::Excellent,
            s if s >= thresholds.very_good => MatchBand::VeryGood,
            s if s >= thresholds.good => MatchBand::Good,
            s if s >= thresholds.moderate => MatchBand::Moderate,
            s if s >= thresholds.fair => MatchBand::Fair,
            s if s >= thresholds.low => MatchBand::Low,
            _ => MatchBand::VeryLow,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MatchBand::Exceptional => "Exceptional",
            MatchBand::Excellent => "Excellent",
            MatchBand::VeryGood => "Very Good",
            MatchBand::Good => "Good",
            MatchBand::Moderate => "Moderate",
            MatchBand::Fair => "Fair",
            MatchBand::Low => "Low",
            MatchBand::VeryLow => "Very Low",
        }
    }
}

impl fmt::Display for MatchBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
