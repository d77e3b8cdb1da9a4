use std::cmp::Ordering;
use itertools::Itertools;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tokenizer::Tokenizer;
use super::query::Query;
use super::stats::TermCounts;
use super::vector::SparseVector;
use super::{BagOfPatterns, Pattern};

/* Final scores keep 4 decimal digits */
const SCORE_SCALE: f64 = 10000.0;
/* Floating point noise tolerated below a digit boundary before truncation,
 * in SCORE_SCALE units. A pattern compared with itself must score 1.0. */
const SCORE_SLACK: f64 = 1e-7;

/// Query result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Identifier of the matched pattern, 0 when nothing matched.
    pub index: u64,
    /// Similarity in [0, 1], truncated to 4 decimal places.
    pub score: f64,
}

impl Match {
    /// Returned when no pattern shares a weighted term with the snippet.
    pub const NONE: Match = Match { index: 0, score: 0.0 };
}

impl Pattern {
    /// Ranking score against a query: dot(query, pattern) / |pattern|.
    /// Patterns without weighted terms never match.
    pub fn score(&self, query: &SparseVector) -> f64 {
        let norm = self.vector.norm();
        if norm > 0.0 {
            query.dot(&self.vector) / norm
        } else {
            0.0
        }
    }
}

/// Normalize a ranking score by the query norm, truncating (not rounding)
/// to 4 decimal places.
fn final_score(raw: f64, query_norm: f64) -> f64 {
    let score = (raw * SCORE_SCALE / query_norm + SCORE_SLACK).trunc() / SCORE_SCALE;
    score.min(1.0)
}

/// First pattern with the strictly highest ranking score, or (0, 0.0).
fn best_pattern(patterns: &[Pattern], query: &SparseVector) -> (u64, f64) {
    let mut best: u64 = 0;
    let mut best_score: f64 = 0.0;
    for pattern in patterns {
        let score = pattern.score(query);
        if score > best_score {
            best_score = score;
            best = pattern.index;
        }
    }
    (best, best_score)
}

impl<T: Tokenizer> BagOfPatterns<T> {

    /// Tokenize and weight a snippet with the corpus IDF table.
    fn vectorize(&self, snippet: &str) -> Result<SparseVector> {
        let tokens = self.tokenizer.tokenize(snippet)?;
        Ok(SparseVector::from_counts(&TermCounts::from_tokens(&tokens), &self.idf))
    }

    /// Find the pattern most similar to the snippet.
    ///
    /// Ties keep the pattern inserted first. A snippet without any term
    /// weighted by the corpus (empty, or only unseen tokens) gives
    /// `Match::NONE`, as does an empty corpus.
    pub fn best_for(&self, snippet: &str) -> Result<Match> {
        let query = self.vectorize(snippet)?;
        if query.norm() == 0.0 {
            return Ok(Match::NONE);
        }

        let (index, raw) = best_pattern(&self.patterns, &query);
        trace!("best match {} with raw score {} (query norm {})", index, raw, query.norm());
        Ok(Match {
            index,
            score: final_score(raw, query.norm()),
        })
    }

    /// Rank all patterns sharing terms with the snippet, best first. Equal
    /// scores are kept in corpus order.
    pub fn search(&self, query: &Query) -> Result<Vec<Match>> {
        let vector = self.vectorize(&query.snippet)?;
        if vector.norm() == 0.0 {
            return Ok(Vec::new());
        }
        let limit: usize = query.limit.unwrap_or(usize::MAX);

        let results = self.patterns
            .iter()
            .map(|pattern| (pattern.index, pattern.score(&vector)))
            .filter(|&(_, score)| score > 0.0)
            /* Stable sort, ties stay in corpus order */
            .sorted_by(|(_, score_a), (_, score_b)| {
                score_b.partial_cmp(score_a).unwrap_or(Ordering::Equal)
            })
            .map(|(index, raw)| Match {
                index,
                score: final_score(raw, vector.norm()),
            })
            .filter(|result| result.score >= query.min_score)
            .take(limit)
            .collect();

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_truncates_scores() {
        assert_eq!(final_score(0.99999, 1.0), 0.9999);
        assert_eq!(final_score(0.12345678, 1.0), 0.1234);
        assert_eq!(final_score(1.0, 2.0), 0.5);
        /* Rounding noise around 1 is absorbed */
        assert_eq!(final_score(1.0 + 1e-12, 1.0), 1.0);
        assert_eq!(final_score(1.0 - 1e-15, 1.0), 1.0);
    }

    #[test]
    fn it_skips_empty_patterns() {
        let pattern = Pattern { index: 3, vector: SparseVector::default() };
        assert_eq!(pattern.score(&SparseVector::default()), 0.0);
        assert_eq!(best_pattern(&[pattern], &SparseVector::default()), (0, 0.0));
    }
}
