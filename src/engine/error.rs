use thiserror::Error;

use crate::embedding::EmbeddingError;

/// Failures of a matching run.
///
/// Segmentation and lexical scoring cannot fail for string input, so the
/// only failure surface is the semantic path's embedding model. A failed
/// run produces no partial results and is never silently downgraded to
/// lexical scoring.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("embedding model unavailable: {0}")]
    Embedding(#[from] EmbeddingError),
}
