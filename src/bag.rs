use std::collections::HashSet;

use crate::tokenizer::Tokenizer;

pub mod query;
mod builder;
mod ranker;
mod stats;
mod vector;


pub use query::Query;
pub use ranker::Match;
pub use stats::{IdfTable, TermCounts};
pub use vector::{SparseVector, TermWeight};

/* Fast hashing, but requires AES-ni extensions */
type FastHash = ahash::RandomState;

/// A known pattern of the corpus and its TF-IDF vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    /// Identifier of the pattern as given by the corpus.
    pub index: u64,
    /// Vector sorted by token hash, with a precomputed norm.
    pub vector: SparseVector,
}

/// Initial builder state that can gather patterns, but can't be queried.
///
/// Texts are tokenized as they are added; IDF weights need the whole corpus
/// and are computed by `finish()`.
#[derive(Debug)]
pub struct BagBuilder<T: Tokenizer> {
    tokenizer: T,
    /// Pattern identifiers and term counts, in insertion order.
    entries: Vec<(u64, TermCounts)>,
    /// Identifiers seen so far.
    ids: HashSet<u64, FastHash>,
}

/// Produced by `BagBuilder::finish()`. Immutable and can be queried,
/// also from many threads at once.
#[derive(Debug)]
pub struct BagOfPatterns<T: Tokenizer> {
    tokenizer: T,
    /// IDF weights of every token seen in the corpus.
    idf: IdfTable,
    /// Patterns in corpus order; the order only decides ties.
    patterns: Vec<Pattern>,
}

impl<T: Tokenizer> BagOfPatterns<T> {
    /// Number of patterns in the corpus.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn idf(&self) -> &IdfTable {
        &self.idf
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }
}
