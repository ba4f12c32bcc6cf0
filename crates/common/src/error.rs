use std::time::Duration;

/// HomeMatch error types
#[derive(Debug, thiserror::Error)]
pub enum HomeMatchError {
    /// Invalid argument (empty query, non-positive top-k, empty record set)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Embeddings of differing dimensionality were compared
    #[error("Embedding length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// An operation that requires at least one element received none
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Search attempted before an embedding provider was acquired
    #[error("Search engine not initialized")]
    NotInitialized,

    /// Embedding provider failure, propagated unchanged
    #[error("Embedding provider error: {0}")]
    Provider(String),

    /// Embedding request exceeded the caller's deadline
    #[error("Embedding request timed out after {0:?}")]
    Timeout(Duration),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HomeMatchError {
    /// Create invalid argument error
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create length mismatch error
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        Self::LengthMismatch { left, right }
    }

    /// Create empty input error
    pub fn empty_input<S: Into<String>>(msg: S) -> Self {
        Self::EmptyInput(msg.into())
    }

    /// Create provider error
    pub fn provider<S: Into<String>>(msg: S) -> Self {
        Self::Provider(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_message() {
        let err = HomeMatchError::length_mismatch(384, 768);
        assert_eq!(err.to_string(), "Embedding length mismatch: 384 vs 768");
    }

    #[test]
    fn test_helper_constructors() {
        assert!(matches!(
            HomeMatchError::invalid_argument("top_k must be positive"),
            HomeMatchError::InvalidArgument(_)
        ));
        assert!(matches!(
            HomeMatchError::empty_input("no query embeddings"),
            HomeMatchError::EmptyInput(_)
        ));
        assert!(matches!(
            HomeMatchError::provider("connection refused"),
            HomeMatchError::Provider(_)
        ));
    }
}
