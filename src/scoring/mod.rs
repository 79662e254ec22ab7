//! Pairwise sentence scorers.
//!
//! - [`lexical`] compares surface form via character-bigram overlap.
//! - [`semantic`] compares meaning via cosine similarity of embedding
//!   vectors produced by [`crate::embedding`].
//!
//! Both produce scores in `[0.0, 1.0]` and feed the same matcher in
//! [`crate::matching`].

pub mod lexical;
pub mod semantic;

#[cfg(test)]
mod tests;

pub use lexical::bigram_similarity;
pub use semantic::{cosine_similarity, embedding_similarity};

use serde::Deserialize;

/// Scorer selected by the caller for a matching run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorerKind {
    /// Character-bigram Dice coefficient; no model required.
    #[default]
    Lexical,
    /// Embedding cosine similarity; requires a loaded embedding model.
    Semantic,
}
