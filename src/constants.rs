//! Shared constants.

/// Threshold applied when a request does not specify one, in percent.
pub const DEFAULT_THRESHOLD_PERCENT: f64 = 80.0;

/// Default output dimension of the sentence embedder.
///
/// Matches the hidden size of the MiniLM-class BERT checkpoints the server
/// is expected to run with; the stub embedder uses it as-is.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Default max tokens per sentence fed to the embedding model.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Sentence boundary used by the segmenter. Any occurrence is a hard
/// boundary, including decimal points and abbreviations.
pub const SENTENCE_DELIMITER: char = '.';
