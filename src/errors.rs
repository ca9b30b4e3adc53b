use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Invalid time expression: {0}")]
    InvalidTimeExpression(String),

    #[error("Unknown interval: {0}")]
    UnknownInterval(String),

    #[error("Index pattern error at position {position}: {message}")]
    PatternParse { position: usize, message: String },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Helper for mapping a validation or parse failure into an invalid query error
pub fn invalid_query<E: ToString>(err: E) -> ResolveError {
    ResolveError::InvalidQuery(err.to_string())
}

impl ResolveError {
    pub(crate) fn pattern(position: usize, message: impl Into<String>) -> Self {
        ResolveError::PatternParse {
            position,
            message: message.into(),
        }
    }
}
