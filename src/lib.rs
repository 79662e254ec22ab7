//! Simscan library crate (used by the server and integration tests).
//!
//! Simscan flags sentences in a candidate document that closely match
//! sentences in a reference text. Two interchangeable scorers drive the
//! same exhaustive matcher:
//!
//! - **Lexical**: character-bigram Dice coefficient. Pure, synchronous,
//!   sub-millisecond per comparison.
//! - **Semantic**: cosine similarity over sentence embeddings produced by
//!   an [`EmbeddingModel`]. Embeddings are batched (one call per sentence
//!   list, never per pair) since model inference dominates latency.
//!
//! # Public API Surface
//!
//! ## Core Engine
//! - [`SimilarityEngine`] - lexical / semantic check runs
//! - [`MatchResult`], [`SuspicionRecord`], [`Threshold`] - match output
//! - [`ScorerKind`] - scorer selection
//!
//! ## Embedding
//! - [`EmbeddingModel`] - injected embedding capability
//! - [`SentenceEmbedder`], [`EmbedderConfig`] - candle-backed embedder
//!   (deterministic stub mode when no model files are configured)
//!
//! ## Server Support
//! - [`Config`], [`ConfigError`] - env-driven server configuration
//! - [`gateway`] - axum router and handlers
//!
//! ## Test/Mock Support
//! Fixture embedders are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod embedding;
pub mod engine;
pub mod gateway;
pub mod matching;
pub mod scoring;
pub mod segment;

pub use config::{Config, ConfigError};
pub use constants::{DEFAULT_EMBEDDING_DIM, DEFAULT_THRESHOLD_PERCENT};
#[cfg(any(test, feature = "mock"))]
pub use embedding::FixtureEmbedder;
pub use embedding::{EmbedderConfig, EmbeddingError, EmbeddingModel, SentenceEmbedder};
pub use engine::{EngineError, SimilarityEngine};
pub use matching::{MatchResult, SuspicionRecord, Threshold, aggregate, best_matches};
pub use scoring::{ScorerKind, bigram_similarity, cosine_similarity, embedding_similarity};
pub use segment::split_sentences;
