use async_trait::async_trait;
use homematch_common::Result;

/// Common trait for embedding providers
///
/// Any backend that turns arbitrary text into a fixed-length numeric vector
/// satisfies this contract. All embeddings used together in one ranking
/// operation must share the same dimensionality; the provider is the source
/// of that dimensionality.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding for a single text
    async fn embed(&self, text: &str) -> Result<Vec<f64>>;

    /// Test connection/availability
    async fn test_connection(&self) -> Result<bool>;
}
