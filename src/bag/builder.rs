use std::collections::HashSet;
use log::{debug, warn};

use crate::error::{Error, Result};
use crate::tokenizer::Tokenizer;
use super::stats::{IdfTable, TermCounts};
use super::vector::SparseVector;
use super::{BagBuilder, BagOfPatterns, FastHash, Pattern};

/// Corpus keys are non-negative base-10 integers.
fn parse_index(key: &str) -> Option<u64> {
    key.trim().parse::<u64>().ok()
}

impl<T: Tokenizer> BagBuilder<T> {
    /// Create a new empty builder in a "gathering" state.
    pub fn new(tokenizer: T) -> BagBuilder<T> {
        Self::with_capacity(tokenizer, 0)
    }

    /// Create a builder with room for `capacity` patterns.
    pub fn with_capacity(tokenizer: T, capacity: usize) -> BagBuilder<T> {
        BagBuilder {
            tokenizer,
            entries: Vec::with_capacity(capacity),
            ids: HashSet::with_capacity_and_hasher(capacity, FastHash::new()),
        }
    }

    /// Add a pattern text under an identifier. The identifier must be
    /// unique within the builder (or Err is returned). Empty text is
    /// accepted and produces a pattern that never matches.
    pub fn add_pattern(&mut self, index: u64, text: &str) -> Result<()> {
        if self.ids.contains(&index) {
            return Err(Error::DuplicateId(index));
        }
        let tokens = self.tokenizer.tokenize(text)?;
        self.ids.insert(index);
        self.entries.push((index, TermCounts::from_tokens(&tokens)));
        Ok(())
    }

    /// Add a corpus entry keyed by a textual identifier. Entries whose key
    /// is not a non-negative integer are skipped and `Ok(false)` returned.
    pub fn add_entry(&mut self, key: &str, text: &str) -> Result<bool> {
        match parse_index(key) {
            Some(index) => {
                self.add_pattern(index, text)?;
                Ok(true)
            }
            None => {
                warn!("skipping corpus entry with malformed identifier {:?}", key);
                Ok(false)
            }
        }
    }

    /// Number of patterns gathered so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the builder and return a queryable bag: compute IDF weights
    /// over all gathered patterns and vectorize each of them.
    pub fn finish(self) -> BagOfPatterns<T> {
        let idf = IdfTable::from_documents(self.entries.iter().map(|(_, counts)| counts));

        let patterns: Vec<Pattern> = self.entries
            .iter()
            .map(|(index, counts)| Pattern {
                index: *index,
                vector: SparseVector::from_counts(counts, &idf),
            })
            .collect();

        debug!("built bag of {} patterns with {} distinct terms", patterns.len(), idf.len());
        BagOfPatterns {
            tokenizer: self.tokenizer,
            idf,
            patterns,
        }
    }
}

impl<T: Tokenizer> BagOfPatterns<T> {
    /// Build a bag from a whole corpus of (identifier, text) entries.
    ///
    /// Malformed identifiers are skipped, as are later entries repeating an
    /// identifier. Only tokenizer failures abort the construction.
    pub fn from_corpus<I, K, V>(tokenizer: T, corpus: I) -> Result<BagOfPatterns<T>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let corpus = corpus.into_iter();
        let mut builder = BagBuilder::with_capacity(tokenizer, corpus.size_hint().0);
        for (key, text) in corpus {
            match builder.add_entry(key.as_ref(), text.as_ref()) {
                Ok(_) => {}
                Err(Error::DuplicateId(index)) => {
                    warn!("skipping corpus entry {:?}, identifier {} already used", key.as_ref(), index);
                }
                Err(err) => return Err(err),
            }
        }
        Ok(builder.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_identifiers() {
        assert_eq!(parse_index("12"), Some(12));
        assert_eq!(parse_index(" 7\n"), Some(7));
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("12abc"), None);
        assert_eq!(parse_index(""), None);
    }
}
