//! Bag of patterns: find the known text pattern most similar to a snippet
//! using TF-IDF weighted sparse vectors.
//!
//! ```
//! use patternbag::{BagOfPatterns, WordTokenizer};
//!
//! let corpus = [
//!     ("1", "error: disk full"),
//!     ("2", "network timeout"),
//!     ("3", "kernel panic"),
//! ];
//! let bag = BagOfPatterns::from_corpus(WordTokenizer::new(), corpus).unwrap();
//! let best = bag.best_for("Disk full!").unwrap();
//! assert_eq!(best.index, 1);
//! ```
pub mod error;
pub mod utils;
pub mod tokenizer;
pub mod bag;

#[cfg(feature = "python")]
mod python;

pub use bag::{BagBuilder, BagOfPatterns, Match, Pattern, Query};
pub use error::{Error, Result};
pub use tokenizer::{Token, Tokenizer, WordTokenizer};
