use super::*;

mod lexical_tests {
    use super::*;

    #[test]
    fn test_identical_non_empty_is_one() {
        for s in ["a", "ab", "The system works efficiently", "çok iyi"] {
            assert_eq!(bigram_similarity(s, s), 1.0, "identity failed for {s:?}");
        }
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ("night", "nacht"),
            ("AI is used in medicine", "AI applications in medicine"),
            ("a", "abc"),
            ("", "xyz"),
        ];
        for (a, b) in pairs {
            assert_eq!(
                bigram_similarity(a, b),
                bigram_similarity(b, a),
                "asymmetric for {a:?} / {b:?}"
            );
        }
    }

    #[test]
    fn test_short_non_identical_is_zero() {
        assert_eq!(bigram_similarity("a", "b"), 0.0);
        assert_eq!(bigram_similarity("a", "abc"), 0.0);
        assert_eq!(bigram_similarity("", "abc"), 0.0);
        assert_eq!(bigram_similarity("x", ""), 0.0);
    }

    #[test]
    fn test_both_empty_is_zero() {
        assert_eq!(bigram_similarity("", ""), 0.0);
    }

    #[test]
    fn test_disjoint_bigrams_score_zero() {
        assert_eq!(bigram_similarity("abab", "cdcd"), 0.0);
    }

    #[test]
    fn test_known_dice_value() {
        // "night" -> {ni, ig, gh, ht}, "nacht" -> {na, ac, ch, ht}
        // shared = {ht} -> 2 * 1 / (4 + 4) = 0.25
        let score = bigram_similarity("night", "nacht");
        assert!((score - 0.25).abs() < 1e-6, "got {score}");
    }

    #[test]
    fn test_multiplicity_bounded_by_minimum() {
        // "aaa" -> {aa: 2}, "aa" -> {aa: 1}; shared = 1 -> 2 / 3
        let score = bigram_similarity("aaa", "aa");
        assert!((score - 2.0 / 3.0).abs() < 1e-6, "got {score}");
    }

    #[test]
    fn test_repeated_bigrams_count_twice() {
        // "aaaa" -> {aa: 3}, "aaab" -> {aa: 2, ab: 1}; shared = 2 -> 4 / 6
        let score = bigram_similarity("aaaa", "aaab");
        assert!((score - 4.0 / 6.0).abs() < 1e-6, "got {score}");
    }

    #[test]
    fn test_case_sensitive() {
        assert!(bigram_similarity("Hello", "hello") < 1.0);
    }

    #[test]
    fn test_whitespace_sensitive() {
        assert!(bigram_similarity("a b", "ab") < 1.0);
    }

    #[test]
    fn test_score_bounded() {
        let pairs = [
            ("completely different", "words entirely"),
            ("almost the same text", "almost the same test"),
            ("aaaa", "aaab"),
        ];
        for (a, b) in pairs {
            let score = bigram_similarity(a, b);
            assert!((0.0..=1.0).contains(&score), "{score} out of range");
        }
    }

    #[test]
    fn test_paraphrase_stays_below_default_threshold() {
        // A paraphrase shares meaning but little surface form, so the
        // lexical score must stay low.
        let score = bigram_similarity(
            "AI is used in medicine",
            "AI applications in medicine are increasingly common",
        );
        assert!(score < 0.8, "paraphrase scored {score}");
    }
}

mod semantic_tests {
    use super::*;

    #[test]
    fn test_cosine_identical_vectors() {
        let v = [0.6, 0.8, 0.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let a = [1.0, 0.0];
        let b = [0.0, 1.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_opposite_vectors() {
        let a = [1.0, 0.0];
        let b = [-1.0, 0.0];
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_scale_invariant() {
        let a = [1.0, 2.0, 3.0];
        let b = [10.0, 20.0, 30.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_dimension_mismatch_is_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0]), 0.0);
    }

    #[test]
    fn test_cosine_empty_is_zero() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_cosine_zero_norm_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_embedding_similarity_clamps_negative() {
        let a = [1.0, 0.0];
        let b = [-1.0, 0.0];
        assert_eq!(embedding_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_embedding_similarity_preserves_positive() {
        let a = [0.6, 0.8];
        let b = [0.6, 0.8];
        assert!((embedding_similarity(&a, &b) - 1.0).abs() < 1e-6);
    }
}

mod scorer_kind_tests {
    use super::*;

    #[test]
    fn test_default_is_lexical() {
        assert_eq!(ScorerKind::default(), ScorerKind::Lexical);
    }

    #[test]
    fn test_deserialize_lowercase() {
        let lexical: ScorerKind = serde_json::from_str("\"lexical\"").unwrap();
        let semantic: ScorerKind = serde_json::from_str("\"semantic\"").unwrap();
        assert_eq!(lexical, ScorerKind::Lexical);
        assert_eq!(semantic, ScorerKind::Semantic);
    }

    #[test]
    fn test_deserialize_unknown_variant_fails() {
        assert!(serde_json::from_str::<ScorerKind>("\"hybrid\"").is_err());
    }
}
