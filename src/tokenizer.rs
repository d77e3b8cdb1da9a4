use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

use crate::error::Result;
use crate::utils;

/* Fixed seeds keep token hashes stable for the lifetime of the process */
const HASH_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// Token descriptor. Equal hashes are treated as equal tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub hash: u64,
}

/// Converts raw text into an ordered sequence of tokens.
///
/// Must be deterministic for identical input. Implementations are shared
/// between the build phase and concurrent queries, so they can't hold
/// per-call mutable state.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        (**self).tokenize(text)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        (**self).tokenize(text)
    }
}

/// Default tokenizer: word runs and single punctuation characters,
/// optionally lowercased and stripped of accents.
#[derive(Clone)]
pub struct WordTokenizer {
    lowercase: bool,
    fold_accents: bool,
    /// Tokens shorter than this (in characters) are dropped.
    min_length: usize,
    state: ahash::RandomState,
}

impl WordTokenizer {
    pub fn new() -> Self {
        Self {
            lowercase: true,
            fold_accents: true,
            min_length: 1,
            state: ahash::RandomState::with_seeds(
                HASH_SEEDS[0], HASH_SEEDS[1], HASH_SEEDS[2], HASH_SEEDS[3]),
        }
    }

    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn fold_accents(mut self, fold_accents: bool) -> Self {
        self.fold_accents = fold_accents;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Normalized form of a single raw token.
    fn normalize(&self, raw: &str) -> String {
        let token = if self.fold_accents {
            utils::fold_accents(raw)
        } else {
            raw.to_string()
        };
        if self.lowercase {
            token.to_lowercase()
        } else {
            token
        }
    }

    fn hash(&self, token: &str) -> u64 {
        let mut hasher = self.state.build_hasher();
        token.hash(&mut hasher);
        hasher.finish()
    }
}

impl fmt::Debug for WordTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordTokenizer")
            .field("lowercase", &self.lowercase)
            .field("fold_accents", &self.fold_accents)
            .field("min_length", &self.min_length)
            .finish()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        let tokens = utils::split(text)
            .into_iter()
            .map(|raw| self.normalize(raw))
            .filter(|token| !token.is_empty() && token.chars().count() >= self.min_length)
            .map(|token| Token { hash: self.hash(&token) })
            .collect();
        Ok(tokens)
    }
}
