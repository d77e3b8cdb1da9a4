use std::collections::HashMap;
use itertools::Itertools;

use crate::tokenizer::Token;
use super::FastHash;

/// Term frequencies of a single document: (token hash, count) pairs sorted
/// by hash, unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermCounts(Vec<(u64, u32)>);

impl TermCounts {
    /// Count tokens of a document. Immediately repeated tokens count once,
    /// so runs like "=======" don't dominate the document.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut hashes: Vec<u64> = tokens.iter()
            .map(|token| token.hash)
            .dedup()
            .collect();
        hashes.sort_unstable();
        let counts = hashes.into_iter()
            .dedup_with_count()
            .map(|(count, hash)| (hash, count as u32))
            .collect();
        TermCounts(counts)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(u64, u32)> {
        self.0.iter()
    }

    pub fn get(&self, hash: u64) -> Option<u32> {
        self.0.binary_search_by_key(&hash, |&(h, _)| h)
            .ok()
            .map(|pos| self.0[pos].1)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Inverse document frequency of every token seen in a corpus:
/// ln(N / df), where df is the count of documents containing the token.
#[derive(Debug, Clone, Default)]
pub struct IdfTable {
    weights: HashMap<u64, f64, FastHash>,
    /// Number of corpus documents (N).
    documents: usize,
}

impl IdfTable {
    /// Compute the table from term counts of all corpus documents. An empty
    /// corpus gives an empty table.
    pub fn from_documents<'a, I>(documents: I) -> IdfTable
    where
        I: IntoIterator<Item = &'a TermCounts>,
    {
        let mut doc_freq: HashMap<u64, u32, FastHash> = HashMap::with_hasher(FastHash::new());
        let mut total: usize = 0;
        for counts in documents {
            total += 1;
            /* Keys are unique within a document */
            for &(hash, _) in counts.iter() {
                *doc_freq.entry(hash).or_insert(0) += 1;
            }
        }

        /* df >= 1 and df <= N by construction, so weights are finite and >= 0 */
        let n = total as f64;
        let weights = doc_freq.into_iter()
            .map(|(hash, df)| (hash, (n / df as f64).ln()))
            .collect();

        IdfTable { weights, documents: total }
    }

    /// IDF weight of a token; tokens unseen in the corpus weigh 0.
    pub fn get(&self, hash: u64) -> f64 {
        self.weights.get(&hash).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, hash: u64) -> bool {
        self.weights.contains_key(&hash)
    }

    /// Number of distinct tokens in the corpus.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn documents(&self) -> usize {
        self.documents
    }
}
