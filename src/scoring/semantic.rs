//! Cosine similarity over embedding vectors.

/// Raw cosine similarity `dot(a, b) / (||a|| * ||b||)`.
///
/// Returns 0.0 on dimension mismatch, empty input, or a zero-norm vector.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Cosine similarity reinterpreted as a suspicion score in `[0.0, 1.0]`.
///
/// Raw cosine ranges over `[-1, 1]`; the matching policy treats negative
/// similarity as zero suspicion, so the value is clamped.
#[inline]
pub fn embedding_similarity(a: &[f32], b: &[f32]) -> f32 {
    cosine_similarity(a, b).clamp(0.0, 1.0)
}
