use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Tokenizer could not process the text. Never recovered internally.
    #[error("tokenizer failed: {0}")]
    Tokenizer(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Pattern identifier was already added to the builder.
    #[error("duplicate pattern identifier {0}")]
    DuplicateId(u64),
}

impl Error {
    /// Wrap any error raised by a custom tokenizer.
    pub fn tokenizer<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Tokenizer(err.into())
    }
}
