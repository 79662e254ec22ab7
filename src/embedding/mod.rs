//! Sentence embedding generation.
//!
//! The semantic scorer depends on an [`EmbeddingModel`], an injected
//! read-only capability: loading it is expensive and happens once, after
//! which it is shared freely across concurrent matching runs. The default
//! implementation, [`SentenceEmbedder`], runs a BERT checkpoint through
//! candle with masked mean pooling, or a deterministic stub when no model
//! directory is configured.
//!
//! Use [`EmbedderConfig::stub`] for tests/examples without model files.

/// BERT encoder wrapper.
pub mod bert;
/// Embedder configuration.
pub mod config;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;

#[cfg(any(test, feature = "mock"))]
mod mock;


pub use config::EmbedderConfig;
pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::FixtureEmbedder;

use std::sync::Arc;

use async_trait::async_trait;
use candle_core::{DType, Device, Tensor};
use tokenizers::{Tokenizer, TruncationParams};
use tracing::{debug, info, warn};

use crate::embedding::bert::BertEncoder;
use crate::embedding::device::select_device;

/// External capability mapping sentences to fixed-dimension vectors.
///
/// Implementations must preserve input order and return one vector per
/// input. A failed call is fatal for the semantic matching run that issued
/// it; the lexical path is unaffected.
#[async_trait]
pub trait EmbeddingModel: Send + Sync {
    /// Embeds a batch of sentences, one vector per input, in input order.
    async fn embed(&self, sentences: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError>;

    /// Dimension of every vector returned by [`embed`](Self::embed).
    fn embedding_dim(&self) -> usize;
}

enum EmbedderBackend {
    Model {
        encoder: BertEncoder,
        tokenizer: Arc<Tokenizer>,
        device: Device,
    },
    Stub {
        device: Device,
    },
}

/// Embedding generator for semantic matching (supports stub mode).
pub struct SentenceEmbedder {
    backend: EmbedderBackend,
    config: EmbedderConfig,
}

impl std::fmt::Debug for SentenceEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceEmbedder")
            .field(
                "backend",
                &match &self.backend {
                    EmbedderBackend::Model { device, .. } => format!("Model({:?})", device),
                    EmbedderBackend::Stub { device } => format!("Stub({:?})", device),
                },
            )
            .field("embedding_dim", &self.config.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl SentenceEmbedder {
    /// Loads the embedder from a config (stub mode is supported).
    pub fn load(config: EmbedderConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        let device = select_device()?;
        debug!(?device, "Selected compute device for embedder");

        if config.testing_stub {
            warn!("Sentence embedder running in STUB mode (testing only)");
            return Ok(Self {
                backend: EmbedderBackend::Stub { device },
                config,
            });
        }

        if !config.model_available() {
            return Err(EmbeddingError::ModelNotFound {
                path: config.model_dir.clone(),
            });
        }

        let (encoder, tokenizer) = Self::load_model(&config, &device)?;

        // Mean pooling yields hidden-size vectors; the configured dim is
        // only authoritative for the stub backend.
        let mut config = config;
        config.embedding_dim = encoder.hidden_size();

        info!(
            model_dir = %config.model_dir.display(),
            embedding_dim = config.embedding_dim,
            max_seq_len = config.max_seq_len,
            "Sentence embedder loaded"
        );

        Ok(Self {
            backend: EmbedderBackend::Model {
                encoder,
                tokenizer: Arc::new(tokenizer),
                device,
            },
            config,
        })
    }

    fn load_model(
        config: &EmbedderConfig,
        device: &Device,
    ) -> Result<(BertEncoder, Tokenizer), EmbeddingError> {
        let mut tokenizer = Tokenizer::from_file(config.tokenizer_path()).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            }
        })?;

        let truncation = TruncationParams {
            max_length: config.max_seq_len,
            ..Default::default()
        };
        tokenizer
            .with_truncation(Some(truncation))
            .map_err(|e| EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to configure truncation: {}", e),
            })?;

        let encoder = BertEncoder::load(&config.model_dir, device).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load BERT model: {}", e),
            }
        })?;

        Ok((encoder, tokenizer))
    }

    /// Generates embeddings for a batch of sentences.
    ///
    /// One tokenizer/model invocation per batch: inputs are padded to the
    /// longest sequence, pooled with the attention mask, and L2-normalized.
    pub fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        match &self.backend {
            EmbedderBackend::Model {
                encoder,
                tokenizer,
                device,
            } => self.embed_batch_with_model(texts, encoder, tokenizer, device),
            EmbedderBackend::Stub { .. } => Ok(texts.iter().map(|text| self.embed_stub(text)).collect()),
        }
    }

    fn embed_batch_with_model(
        &self,
        texts: &[&str],
        encoder: &BertEncoder,
        tokenizer: &Tokenizer,
        device: &Device,
    ) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let encodings = tokenizer.encode_batch(texts.to_vec(), true).map_err(|e| {
            EmbeddingError::TokenizationFailed {
                reason: e.to_string(),
            }
        })?;

        let batch = encodings.len();
        let max_len = encodings
            .iter()
            .map(|e| e.get_ids().len())
            .max()
            .unwrap_or(0);
        if max_len == 0 {
            return Err(EmbeddingError::TokenizationFailed {
                reason: "tokenizer produced no tokens for the batch".to_string(),
            });
        }

        debug!(
            batch = batch,
            max_len = max_len,
            "Generating embeddings (batched forward pass)"
        );

        let mut ids = Vec::with_capacity(batch * max_len);
        let mut type_ids = Vec::with_capacity(batch * max_len);
        let mut mask = Vec::with_capacity(batch * max_len);
        for encoding in &encodings {
            let len = encoding.get_ids().len();
            ids.extend_from_slice(encoding.get_ids());
            type_ids.extend_from_slice(encoding.get_type_ids());
            mask.extend_from_slice(encoding.get_attention_mask());
            for _ in len..max_len {
                ids.push(0);
                type_ids.push(0);
                mask.push(0);
            }
        }

        let input_ids = Tensor::from_vec(ids, (batch, max_len), device)?;
        let token_type_ids = Tensor::from_vec(type_ids, (batch, max_len), device)?;
        let attention_mask = Tensor::from_vec(mask, (batch, max_len), device)?;

        // [batch, seq, hidden]
        let hidden = encoder.forward(&input_ids, &token_type_ids, Some(&attention_mask))?;

        // Masked mean pooling: padding tokens must not dilute the average.
        let mask_f = attention_mask.to_dtype(DType::F32)?.unsqueeze(2)?;
        let summed = hidden.broadcast_mul(&mask_f)?.sum(1)?;
        let counts = mask_f.sum(1)?;
        let pooled = summed.broadcast_div(&counts)?;

        let rows = pooled.to_vec2::<f32>()?;
        Ok(rows.into_iter().map(l2_normalize).collect())
    }

    fn embed_stub(&self, text: &str) -> Vec<f32> {
        use std::hash::{DefaultHasher, Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let seed = hasher.finish();

        let mut embedding = Vec::with_capacity(self.config.embedding_dim);
        let mut state = seed;

        for _ in 0..self.config.embedding_dim {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let value = ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0;
            embedding.push(value);
        }

        l2_normalize(embedding)
    }

    /// Returns the output embedding dimension.
    pub fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Stub { .. })
    }

    /// Returns `true` if a model checkpoint is loaded.
    pub fn has_model(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Model { .. })
    }

    /// Returns the embedder configuration.
    pub fn config(&self) -> &EmbedderConfig {
        &self.config
    }
}

#[async_trait]
impl EmbeddingModel for SentenceEmbedder {
    async fn embed(&self, sentences: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.embed_batch(sentences)
    }

    fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }
}

fn l2_normalize(mut embedding: Vec<f32>) -> Vec<f32> {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 {
        for x in &mut embedding {
            *x /= norm;
        }
    }

    embedding
}
