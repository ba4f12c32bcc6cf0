//! HomeMatch Embedding Providers
//!
//! Trait for text-to-vector capabilities and the Ollama API implementation

mod ollama;
mod provider;
mod types;

pub use ollama::OllamaProvider;
pub use provider::EmbeddingProvider;
pub use types::{EmbedRequest, EmbedResponse};
