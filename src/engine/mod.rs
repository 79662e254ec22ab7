//! Similarity check runs: segmentation, scoring, matching, aggregation.

mod error;


pub use error::EngineError;

use std::sync::Arc;

use tracing::debug;

use crate::embedding::EmbeddingModel;
use crate::matching::{MatchResult, Threshold, aggregate, best_matches};
use crate::scoring::{ScorerKind, bigram_similarity, embedding_similarity};
use crate::segment::split_sentences;

/// Stateless matching engine over an injected embedding capability.
///
/// The embedder is loaded once and shared; everything else is a pure
/// function of the per-run inputs, so one engine instance serves
/// concurrent runs without locking.
pub struct SimilarityEngine {
    embedder: Arc<dyn EmbeddingModel>,
}

impl SimilarityEngine {
    pub fn new(embedder: Arc<dyn EmbeddingModel>) -> Self {
        Self { embedder }
    }

    /// Runs a check with the scorer selected by the caller.
    pub async fn check(
        &self,
        scorer: ScorerKind,
        candidate_text: &str,
        reference_text: &str,
        threshold: Threshold,
    ) -> Result<MatchResult, EngineError> {
        match scorer {
            ScorerKind::Lexical => Ok(self.check_lexical(candidate_text, reference_text, threshold)),
            ScorerKind::Semantic => {
                self.check_semantic(candidate_text, reference_text, threshold)
                    .await
            }
        }
    }

    /// Flags candidate sentences by character-bigram overlap.
    ///
    /// Pure and synchronous; cannot fail for string input.
    pub fn check_lexical(
        &self,
        candidate_text: &str,
        reference_text: &str,
        threshold: Threshold,
    ) -> MatchResult {
        let candidates = split_sentences(candidate_text);
        let references = split_sentences(reference_text);

        debug!(
            candidates = candidates.len(),
            references = references.len(),
            "Running lexical check"
        );

        let records = best_matches(&candidates, &references, threshold, |i, j| {
            bigram_similarity(candidates[i], references[j])
        });

        finish(records)
    }

    /// Flags candidate sentences by embedding cosine similarity.
    ///
    /// Issues exactly two batched embed calls (all candidates, then all
    /// references); the O(n × m) scan afterwards only touches vectors
    /// already in memory. An embed failure aborts the whole run.
    pub async fn check_semantic(
        &self,
        candidate_text: &str,
        reference_text: &str,
        threshold: Threshold,
    ) -> Result<MatchResult, EngineError> {
        let candidates = split_sentences(candidate_text);
        let references = split_sentences(reference_text);

        debug!(
            candidates = candidates.len(),
            references = references.len(),
            "Running semantic check"
        );

        if candidates.is_empty() || references.is_empty() {
            return Ok(finish(Vec::new()));
        }

        let candidate_vectors = self.embedder.embed(&candidates).await?;
        let reference_vectors = self.embedder.embed(&references).await?;

        let records = best_matches(&candidates, &references, threshold, |i, j| {
            embedding_similarity(&candidate_vectors[i], &reference_vectors[j])
        });

        Ok(finish(records))
    }
}

fn finish(records: Vec<crate::matching::SuspicionRecord>) -> MatchResult {
    let overall_percent = aggregate(&records);
    MatchResult {
        records,
        overall_percent,
    }
}
