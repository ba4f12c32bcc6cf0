use async_trait::async_trait;
use homematch_common::{AppConfig, HomeMatchError, Result};
use reqwest::Client;
use tracing::{debug, info};

use crate::provider::EmbeddingProvider;
use crate::types::{EmbedRequest, EmbedResponse};

/// Ollama embedding API client
#[derive(Debug, Clone)]
pub struct OllamaProvider {
    base_url: String,
    model: String,
    client: Client,
}

impl OllamaProvider {
    /// Create new Ollama provider
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self> {
        let base_url = base_url.into();
        let model = model.into();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| HomeMatchError::provider(format!("Failed to create HTTP client: {}", e)))?;

        info!("Ollama provider initialized: {} (model: {})", base_url, model);
        Ok(Self {
            base_url,
            model,
            client,
        })
    }

    /// Create provider from application configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            &config.ollama_base_url,
            &config.embedding_model,
            config.embed_timeout_secs,
        )
    }

    /// Model name this provider embeds with
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate embedding with exponential-backoff retry
    async fn embed_with_retry(&self, text: &str, max_retries: u32) -> Result<Vec<f64>> {
        let url = format!("{}/api/embeddings", self.base_url);

        debug!(
            "Generating embedding - Model: {}, Text length: {}",
            self.model,
            text.len()
        );

        let request = EmbedRequest {
            model: self.model.clone(),
            prompt: text.to_string(),
        };

        let mut last_error = None;

        for attempt in 1..=max_retries {
            match self.try_embed(&url, &request).await {
                Ok(embedding) => {
                    debug!("Received embedding - Dimension: {}", embedding.len());
                    return Ok(embedding);
                }
                Err(e) => {
                    last_error = Some(e);
                    if attempt < max_retries {
                        let delay = std::time::Duration::from_secs(2u64.pow(attempt - 1));
                        tracing::warn!(
                            "Embedding request failed (attempt {}/{}). Retrying in {:?}...",
                            attempt,
                            max_retries,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| HomeMatchError::provider("All retries failed")))
    }

    /// Single attempt to generate an embedding
    async fn try_embed(&self, url: &str, request: &EmbedRequest) -> Result<Vec<f64>> {
        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| HomeMatchError::provider(format!("Failed to send embedding request: {}", e)))?
            .error_for_status()
            .map_err(|e| HomeMatchError::provider(format!("Ollama embedding API error: {}", e)))?;

        let result: EmbedResponse = response
            .json()
            .await
            .map_err(|e| HomeMatchError::provider(format!("Failed to parse embedding response: {}", e)))?;

        if result.embedding.is_empty() {
            return Err(HomeMatchError::provider("Empty embedding from Ollama"));
        }

        Ok(result.embedding)
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f64>> {
        self.embed_with_retry(text, 3).await
    }

    async fn test_connection(&self) -> Result<bool> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| HomeMatchError::provider(format!("Failed to connect to Ollama: {}", e)))?;
        Ok(response.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = AppConfig::default();
        let provider = OllamaProvider::from_config(&config).unwrap();
        assert_eq!(provider.model(), "all-minilm");
    }
}
