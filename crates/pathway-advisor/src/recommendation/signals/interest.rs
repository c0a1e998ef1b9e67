use std::collections::BTreeMap;

use serde::Serialize;

use crate::recommendation::domain::{InterestCode, InterestVector};

const DOMINANT_LIMIT: usize = 3;

/// Normalized interest profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InterestSignal {
    pub has_data: bool,
    /// 0-100 per code, relative to the strongest code. All six codes are present.
    pub normalized: BTreeMap<InterestCode, u8>,
    /// Up to three codes with a non-zero normalized value, strongest first.
    pub dominant: Vec<InterestCode>,
    /// How peaked the profile is, 0-100.
    pub strength: f32,
}

impl InterestSignal {
    pub fn analyze(vector: &InterestVector) -> Self {
        let raw = |code: InterestCode| {
            let value = vector.score(code);
            if value.is_finite() && value > 0.0 {
                value
            } else {
                0.0
            }
        };

        let total: f32 = InterestCode::ALL.iter().map(|code| raw(*code)).sum();
        if total <= 0.0 {
            return Self::default();
        }

        let peak = InterestCode::ALL
            .iter()
            .map(|code| raw(*code))
            .fold(1.0_f32, f32::max);

        let normalized: BTreeMap<InterestCode, u8> = InterestCode::ALL
            .iter()
            .map(|code| {
                let scaled = (raw(*code) / peak * 100.0).round().clamp(0.0, 100.0);
                (*code, scaled as u8)
            })
            .collect();

        let mut ranked: Vec<(InterestCode, u8)> = normalized
            .iter()
            .filter(|(_, value)| **value > 0)
            .map(|(code, value)| (*code, *value))
            .collect();
        ranked.sort_by(|left, right| right.1.cmp(&left.1));
        let dominant = ranked
            .into_iter()
            .take(DOMINANT_LIMIT)
            .map(|(code, _)| code)
            .collect();

        Self {
            has_data: true,
            strength: peakedness(normalized.values().map(|value| f32::from(*value))),
            normalized,
            dominant,
        }
    }

    pub fn primary(&self) -> Option<InterestCode> {
        self.dominant.first().copied()
    }
}

/// `min(100, 3 * population standard deviation)`.
fn peakedness(values: impl Iterator<Item = f32> + Clone) -> f32 {
    let count = values.clone().count();
    if count == 0 {
        return 0.0;
    }
    let mean = values.clone().sum::<f32>() / count as f32;
    let variance = values.map(|value| (value - mean).powi(2)).sum::<f32>() / count as f32;
    (variance.sqrt() * 3.0).min(100.0)
}
