use std::cmp::Ordering;
use serde::{Deserialize, Serialize};

use super::stats::{IdfTable, TermCounts};

/// Single TF-IDF weighted dimension of a sparse vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TermWeight {
    pub hash: u64,
    /// term frequency * idf
    pub weight: f64,
}

/// Sparse TF-IDF vector. Terms are sorted ascending by hash with unique
/// keys, and only non-zero weights are stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    terms: Vec<TermWeight>,
    /// Euclidean norm of the weights.
    norm: f64,
}

impl SparseVector {
    /// Weight document term counts with the corpus IDF table. Terms missing
    /// from the table weigh 0 and are left out.
    pub fn from_counts(counts: &TermCounts, idf: &IdfTable) -> SparseVector {
        let mut square_sum = 0.0;
        /* Counts are already sorted by hash, order carries over */
        let terms: Vec<TermWeight> = counts.iter()
            .filter_map(|&(hash, count)| {
                let weight = count as f64 * idf.get(hash);
                if weight == 0.0 {
                    return None;
                }
                square_sum += weight * weight;
                Some(TermWeight { hash, weight })
            })
            .collect();

        SparseVector {
            terms,
            norm: f64::sqrt(square_sum),
        }
    }

    pub fn terms(&self) -> &[TermWeight] {
        &self.terms
    }

    pub fn norm(&self) -> f64 {
        self.norm
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Dot product over hashes present in both vectors. Both are sorted,
    /// so a single merge pass is enough.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut left, mut right) = (self.terms.iter(), other.terms.iter());
        let (mut a, mut b) = (left.next(), right.next());
        let mut sum = 0.0;

        while let (Some(term_a), Some(term_b)) = (a, b) {
            match term_a.hash.cmp(&term_b.hash) {
                Ordering::Less => a = left.next(),
                Ordering::Greater => b = right.next(),
                Ordering::Equal => {
                    sum += term_a.weight * term_b.weight;
                    a = left.next();
                    b = right.next();
                }
            }
        }
        sum
    }
}
