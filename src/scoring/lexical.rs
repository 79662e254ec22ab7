//! Character-bigram Dice coefficient.

use std::collections::HashMap;

/// Scores string overlap between `a` and `b` in `[0.0, 1.0]`.
///
/// The score is `2 * |shared bigrams| / (|bigrams(a)| + |bigrams(b)|)`,
/// counted with multiplicity: a bigram occurring twice in both inputs
/// contributes twice, bounded by its minimum count on either side.
///
/// Identical non-empty strings score 1.0. When either input has fewer than
/// two characters and the strings differ, the score is 0.0. Comparison is
/// case- and whitespace-sensitive; the segmenter's trim is the only
/// normalization applied upstream.
pub fn bigram_similarity(a: &str, b: &str) -> f32 {
    if a == b {
        return if a.is_empty() { 0.0 } else { 1.0 };
    }

    let counts_a = bigram_counts(a);
    let counts_b = bigram_counts(b);

    let total_a: usize = counts_a.values().sum();
    let total_b: usize = counts_b.values().sum();
    if total_a == 0 || total_b == 0 {
        return 0.0;
    }

    let shared: usize = counts_a
        .iter()
        .map(|(bigram, count)| count.min(counts_b.get(bigram).unwrap_or(&0)))
        .sum();

    (2 * shared) as f32 / (total_a + total_b) as f32
}

/// Multiset of adjacent character pairs.
fn bigram_counts(s: &str) -> HashMap<(char, char), usize> {
    let chars: Vec<char> = s.chars().collect();
    let mut counts = HashMap::new();
    for pair in chars.windows(2) {
        *counts.entry((pair[0], pair[1])).or_insert(0) += 1;
    }
    counts
}
