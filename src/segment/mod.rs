//! Sentence segmentation.
//!
//! Splitting is intentionally naive: every [`SENTENCE_DELIMITER`] is a hard
//! boundary, so decimal numbers and abbreviations are cut too. Changing
//! this would change matching results, so the limitation is kept rather
//! than papered over.


use crate::constants::SENTENCE_DELIMITER;

/// Splits `text` into trimmed, non-empty sentence slices in input order.
///
/// Text without a delimiter yields a single slice (the whole trimmed text)
/// when non-empty, otherwise an empty vector.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_DELIMITER)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}
