//! HomeMatch Property Search
//!
//! Cosine-similarity ranking over property-description embeddings with
//! optional attribute filtering. The embedding model is an injected
//! capability (see `homematch-embedding`); this crate owns only the
//! brute-force scoring pipeline: filter, score, sort, truncate.

pub mod engine;
pub mod filter;
pub mod rank;
pub mod similarity;
pub mod types;

pub use engine::PropertySearchEngine;
pub use filter::{filter, matches};
pub use rank::{rank, rank_multi};
pub use similarity::{centroid, cosine_similarity};
pub use types::{
    Embedding, FilterSpec, PropertyRecord, ScoredResult, SearchOptions, SearchOutcome,
};
