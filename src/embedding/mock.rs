//! Fixture embedder for tests: preset vectors keyed by sentence text.

use std::collections::HashMap;

use async_trait::async_trait;

use super::{EmbeddingError, EmbeddingModel};

/// Test double returning hand-picked vectors, so cosine scores between
/// specific sentence pairs can be forced exactly.
pub struct FixtureEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    dim: usize,
    fail: bool,
}

impl FixtureEmbedder {
    pub fn new(dim: usize) -> Self {
        Self {
            vectors: HashMap::new(),
            dim,
            fail: false,
        }
    }

    /// Registers the vector returned for `sentence`.
    pub fn with_vector(mut self, sentence: &str, vector: Vec<f32>) -> Self {
        assert_eq!(vector.len(), self.dim, "fixture vector dimension mismatch");
        self.vectors.insert(sentence.to_string(), vector);
        self
    }

    /// An embedder whose every `embed` call fails.
    pub fn failing(dim: usize) -> Self {
        Self {
            vectors: HashMap::new(),
            dim,
            fail: true,
        }
    }
}

#[async_trait]
impl EmbeddingModel for FixtureEmbedder {
    async fn embed(&self, sentences: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if self.fail {
            return Err(EmbeddingError::InferenceFailed {
                reason: "fixture embedder configured to fail".to_string(),
            });
        }

        sentences
            .iter()
            .map(|sentence| {
                self.vectors.get(*sentence).cloned().ok_or_else(|| {
                    EmbeddingError::InferenceFailed {
                        reason: format!("no fixture vector for sentence: {sentence}"),
                    }
                })
            })
            .collect()
    }

    fn embedding_dim(&self) -> usize {
        self.dim
    }
}
