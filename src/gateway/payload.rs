//! Wire types for the check endpoint.

use serde::{Deserialize, Serialize};

use crate::matching::SuspicionRecord;
use crate::scoring::ScorerKind;

/// Body of `POST /v1/check`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    /// Document under examination.
    pub candidate_text: String,
    /// Reference corpus to compare against.
    pub reference_text: String,
    /// Match threshold in percent; defaults to 80.
    #[serde(default)]
    pub threshold_percent: Option<f64>,
    /// Scorer selection; defaults to lexical.
    #[serde(default)]
    pub mode: ScorerKind,
}

/// Response of `POST /v1/check`.
///
/// Only the record list is returned; an overall percentage is a
/// client-side derivation over `similarityPercent` values.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub records: Vec<SuspicionRecord>,
}
