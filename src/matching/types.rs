//! Match output types.

use serde::Serialize;
use thiserror::Error;

/// Rejected threshold percentage.
#[derive(Debug, Error, PartialEq)]
#[error("threshold must be a percentage in [0, 100], got {value}")]
pub struct InvalidThreshold {
    pub value: f64,
}

/// Minimum similarity required for a match to be reported.
///
/// Constructed from a percentage, applied as a fractional ratio. Supplied
/// per matching run, never global state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    ratio: f32,
}

impl Threshold {
    /// Builds a threshold from a percentage in `[0, 100]`.
    pub fn from_percent(percent: f64) -> Result<Self, InvalidThreshold> {
        if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
            return Err(InvalidThreshold { value: percent });
        }
        Ok(Self {
            ratio: (percent / 100.0) as f32,
        })
    }

    /// The threshold as a fraction in `[0.0, 1.0]`.
    pub fn ratio(&self) -> f32 {
        self.ratio
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self {
            ratio: (crate::constants::DEFAULT_THRESHOLD_PERCENT / 100.0) as f32,
        }
    }
}

/// One flagged candidate sentence paired with its best-matching reference
/// sentence at or above the threshold in effect when it was produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuspicionRecord {
    /// The candidate sentence, as segmented.
    pub sentence: String,
    /// The best-matching reference sentence.
    pub source: String,
    /// Similarity as a percentage, rounded to 2 decimal places.
    pub similarity_percent: f64,
}

/// Result of one matching run.
///
/// Records are ordered by candidate sentence position. `overall_percent`
/// is `None` when no records were produced: an absent summary is not the
/// same as a 0% one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub records: Vec<SuspicionRecord>,
    pub overall_percent: Option<f64>,
}
