//! Best-match selection and aggregation.
//!
//! The matcher is the shared core of both scoring strategies: it owns the
//! exhaustive candidate-by-reference scan, threshold filtering, tie
//! breaking, and record rounding, while the actual pairwise score comes in
//! as a closure over sentence indices. The lexical path passes a bigram
//! closure; the semantic path passes a cosine lookup over embeddings
//! batched ahead of the scan.

pub mod types;


pub use types::{InvalidThreshold, MatchResult, SuspicionRecord, Threshold};

/// Scans all `references` for every candidate and emits one record per
/// candidate whose best score reaches the threshold ratio.
///
/// `score` is called with `(candidate_index, reference_index)` and must
/// return a similarity in `[0.0, 1.0]`. Cost is `candidates.len() *
/// references.len()` scorer invocations; inherent to exhaustive
/// best-match search.
///
/// Records preserve candidate order. Within one candidate's scan the first
/// reference achieving the maximum score wins ties; the running best is
/// only replaced on a strictly greater score. Candidates with no reference
/// at or above the threshold are skipped silently.
pub fn best_matches<F>(
    candidates: &[&str],
    references: &[&str],
    threshold: Threshold,
    mut score: F,
) -> Vec<SuspicionRecord>
where
    F: FnMut(usize, usize) -> f32,
{
    let mut records = Vec::new();

    for (i, candidate) in candidates.iter().enumerate() {
        let mut best: Option<(usize, f32)> = None;

        for j in 0..references.len() {
            let similarity = score(i, j);
            if best.is_none_or(|(_, best_score)| similarity > best_score) {
                best = Some((j, similarity));
            }
        }

        if let Some((j, similarity)) = best {
            if similarity >= threshold.ratio() {
                records.push(SuspicionRecord {
                    sentence: (*candidate).to_string(),
                    source: references[j].to_string(),
                    similarity_percent: round_percent(similarity),
                });
            }
        }
    }

    records
}

/// Mean of all record percentages rounded to 2 decimals, or `None` when
/// there are no records to summarize.
pub fn aggregate(records: &[SuspicionRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }

    let sum: f64 = records.iter().map(|r| r.similarity_percent).sum();
    Some(round_two(sum / records.len() as f64))
}

/// Converts a fractional score to a percentage rounded to 2 decimals.
fn round_percent(score: f32) -> f64 {
    round_two(score as f64 * 100.0)
}

fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
