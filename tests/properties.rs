//! Property tests for the bag of patterns.
//!
//! Documents are drawn from a small alphabet of token hashes so that
//! patterns and queries overlap often.

use patternbag::{BagBuilder, BagOfPatterns, Query, Result, Token, Tokenizer};
use proptest::prelude::*;

/// Whitespace separated numbers used directly as token hashes.
struct NumberTokenizer;

impl Tokenizer for NumberTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        text.split_whitespace()
            .map(|word| word.parse::<u64>()
                 .map(|hash| Token { hash })
                 .map_err(patternbag::Error::tokenizer))
            .collect()
    }
}

fn text(hashes: &[u64]) -> String {
    hashes.iter().map(|h| h.to_string()).collect::<Vec<_>>().join(" ")
}

fn document_strategy() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..12, 0..10)
}

fn corpus_strategy() -> impl Strategy<Value = Vec<Vec<u64>>> {
    prop::collection::vec(document_strategy(), 0..8)
}

/// Patterns get identifiers 1..=N in corpus order.
fn build(corpus: &[Vec<u64>]) -> BagOfPatterns<NumberTokenizer> {
    let mut builder = BagBuilder::new(NumberTokenizer);
    for (idx, doc) in corpus.iter().enumerate() {
        builder.add_pattern(idx as u64 + 1, &text(doc)).unwrap();
    }
    builder.finish()
}

proptest! {
    /// Property: scores are in [0, 1] with at most 4 decimal digits.
    #[test]
    fn prop_score_in_range(corpus in corpus_strategy(), query in document_strategy()) {
        let bag = build(&corpus);
        let result = bag.best_for(&text(&query)).unwrap();

        prop_assert!(result.score >= 0.0 && result.score <= 1.0, "score {}", result.score);
        let scaled = result.score * 10000.0;
        prop_assert!((scaled - scaled.round()).abs() < 1e-6, "score {} not truncated", result.score);
        if result.score > 0.0 {
            prop_assert!(result.index >= 1 && result.index <= corpus.len() as u64);
        }
    }

    /// Property: a query equal to a weighted pattern scores 1.0.
    #[test]
    fn prop_self_similarity(corpus in corpus_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!corpus.is_empty());
        let bag = build(&corpus);
        let idx = pick.index(corpus.len());
        prop_assume!(bag.patterns()[idx].vector.norm() > 0.0);

        let result = bag.best_for(&text(&corpus[idx])).unwrap();
        prop_assert_eq!(result.score, 1.0);
    }

    /// Property: the same query twice gives the same answer.
    #[test]
    fn prop_idempotent(corpus in corpus_strategy(), query in document_strategy()) {
        let bag = build(&corpus);
        let snippet = text(&query);
        prop_assert_eq!(bag.best_for(&snippet).unwrap(), bag.best_for(&snippet).unwrap());
    }

    /// Property: pattern vectors are sorted, unique, non-zero and their
    /// norm matches the weights.
    #[test]
    fn prop_vectors_well_formed(corpus in corpus_strategy()) {
        let bag = build(&corpus);
        prop_assert_eq!(bag.len(), corpus.len());
        for pattern in bag.patterns() {
            let terms = pattern.vector.terms();
            for pair in terms.windows(2) {
                prop_assert!(pair[0].hash < pair[1].hash);
            }
            let mut square_sum = 0.0;
            for term in terms {
                prop_assert!(term.weight > 0.0);
                prop_assert!(bag.idf().contains(term.hash));
                square_sum += term.weight * term.weight;
            }
            prop_assert!((pattern.vector.norm() - square_sum.sqrt()).abs() < 1e-9);
        }
    }

    /// Property: repeating tokens in place changes nothing.
    #[test]
    fn prop_consecutive_duplicates_ignored(corpus in corpus_strategy(),
                                           repeat in 1usize..4) {
        let stretched: Vec<Vec<u64>> = corpus.iter()
            .map(|doc| doc.iter().flat_map(|&h| std::iter::repeat(h).take(repeat)).collect())
            .collect();
        let bag = build(&corpus);
        let stretched_bag = build(&stretched);
        prop_assert_eq!(bag.patterns(), stretched_bag.patterns());
    }

    /// Property: tokens outside every pattern don't contribute.
    #[test]
    fn prop_disjoint_scores_zero(corpus in corpus_strategy(), query in prop::collection::vec(100u64..120, 0..6)) {
        let bag = build(&corpus);
        let result = bag.best_for(&text(&query)).unwrap();
        prop_assert_eq!(result.index, 0);
        prop_assert_eq!(result.score, 0.0);
    }

    /// Property: the first search result is the best match.
    #[test]
    fn prop_search_agrees_with_best(corpus in corpus_strategy(), query in document_strategy()) {
        let bag = build(&corpus);
        let snippet = text(&query);
        let best = bag.best_for(&snippet).unwrap();
        let results = bag.search(&Query::new(&snippet).limit(Some(1))).unwrap();

        if best.index == 0 {
            prop_assert!(results.is_empty());
        } else {
            prop_assert_eq!(results.len(), 1);
            prop_assert_eq!(results[0], best);
        }
    }
}
