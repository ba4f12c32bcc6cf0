use homematch_common::{AppConfig, HomeMatchError, Result};
use homematch_embedding::{EmbeddingProvider, OllamaProvider};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::filter::filter;
use crate::rank::{rank, rank_multi};
use crate::types::{Embedding, FilterSpec, PropertyRecord, SearchOptions, SearchOutcome};

/// Property search facade
///
/// Combines the injected embedding provider with filtering and ranking.
/// Starts uninitialized; `initialize` must run once before any search. The
/// record collections passed to searches are read-only and never retained,
/// so independent searches may run concurrently over the same slice.
pub struct PropertySearchEngine {
    provider: RwLock<Option<Arc<dyn EmbeddingProvider>>>,
}

impl PropertySearchEngine {
    /// Create new engine in the uninitialized state
    pub fn new() -> Self {
        Self {
            provider: RwLock::new(None),
        }
    }

    /// Acquire the embedding provider and transition to ready
    ///
    /// A second call is a no-op; the first provider wins.
    pub async fn initialize(&self, provider: Arc<dyn EmbeddingProvider>) {
        let mut slot = self.provider.write().await;
        if slot.is_some() {
            debug!("Engine already initialized, ignoring redundant initialize");
            return;
        }
        *slot = Some(provider);
        info!("Property search engine initialized");
    }

    /// Build an Ollama provider from configuration and initialize with it
    pub async fn initialize_ollama(&self, config: &AppConfig) -> Result<()> {
        let provider = OllamaProvider::from_config(config)?;
        self.initialize(Arc::new(provider)).await;
        Ok(())
    }

    /// Whether `initialize` has run
    pub async fn is_ready(&self) -> bool {
        self.provider.read().await.is_some()
    }

    /// Search records by a single free-text query
    ///
    /// Embeds the query, applies the optional attribute filter, then ranks
    /// the survivors by cosine similarity. An empty filtered set yields an
    /// empty result list, not an error.
    pub async fn search<'a>(
        &self,
        query: &str,
        records: &'a [PropertyRecord],
        options: &SearchOptions,
    ) -> Result<SearchOutcome<'a>> {
        if query.trim().is_empty() {
            return Err(HomeMatchError::invalid_argument("query cannot be empty"));
        }
        if records.is_empty() {
            return Err(HomeMatchError::invalid_argument(
                "record collection cannot be empty",
            ));
        }

        let provider = self.acquired_provider().await?;

        debug!("Searching for: {} (top_k={})", query, options.top_k);
        let query_embedding = self.embed_text(&provider, query, options.deadline).await?;

        let candidates = self.apply_filter(records, options);
        let outcome = rank(&query_embedding, &candidates, options.top_k)?;

        info!(
            "Search completed - {} results (filtered {} -> {} candidates)",
            outcome.results.len(),
            records.len(),
            candidates.len()
        );
        Ok(outcome)
    }

    /// Search records by several query texts combined into one centroid
    ///
    /// One embedding per query text; any single provider failure fails the
    /// whole call, there are no partial results.
    pub async fn multi_search<'a>(
        &self,
        queries: &[String],
        records: &'a [PropertyRecord],
        options: &SearchOptions,
    ) -> Result<SearchOutcome<'a>> {
        if queries.is_empty() {
            return Err(HomeMatchError::invalid_argument(
                "query list cannot be empty",
            ));
        }
        if queries.iter().any(|q| q.trim().is_empty()) {
            return Err(HomeMatchError::invalid_argument(
                "query list cannot contain empty queries",
            ));
        }
        if records.is_empty() {
            return Err(HomeMatchError::invalid_argument(
                "record collection cannot be empty",
            ));
        }

        let provider = self.acquired_provider().await?;

        debug!(
            "Multi-searching {} queries (top_k={})",
            queries.len(),
            options.top_k
        );
        let mut query_embeddings: Vec<Embedding> = Vec::with_capacity(queries.len());
        for query in queries {
            let embedding = self.embed_text(&provider, query, options.deadline).await?;
            query_embeddings.push(embedding);
        }

        let candidates = self.apply_filter(records, options);
        let outcome = rank_multi(&query_embeddings, &candidates, options.top_k)?;

        info!(
            "Multi-search completed - {} results (filtered {} -> {} candidates)",
            outcome.results.len(),
            records.len(),
            candidates.len()
        );
        Ok(outcome)
    }

    /// Get the provider, failing if `initialize` has not run
    async fn acquired_provider(&self) -> Result<Arc<dyn EmbeddingProvider>> {
        self.provider
            .read()
            .await
            .clone()
            .ok_or(HomeMatchError::NotInitialized)
    }

    /// Request one embedding, honoring the caller's deadline if set
    async fn embed_text(
        &self,
        provider: &Arc<dyn EmbeddingProvider>,
        text: &str,
        deadline: Option<Duration>,
    ) -> Result<Embedding> {
        let embedding = match deadline {
            Some(limit) => tokio::time::timeout(limit, provider.embed(text))
                .await
                .map_err(|_| HomeMatchError::Timeout(limit))??,
            None => provider.embed(text).await?,
        };

        // An all-zero embedding usually indicates an upstream provider bug;
        // ranking still proceeds with similarity 0 for it.
        if embedding.iter().all(|v| *v == 0.0) {
            warn!("Provider returned a zero-magnitude embedding for query text");
        }

        Ok(embedding)
    }

    fn apply_filter<'a>(
        &self,
        records: &'a [PropertyRecord],
        options: &SearchOptions,
    ) -> Vec<&'a PropertyRecord> {
        match options.filter.as_ref() {
            Some(spec) => filter(records, spec),
            None => filter(records, &FilterSpec::default()),
        }
    }
}

impl Default for PropertySearchEngine {
    fn default() -> Self {
        Self::new()
    }
}
