use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed-length numeric vector representing the semantic content of a text
pub type Embedding = Vec<f64>;

/// A property listing with its precomputed description embedding
///
/// Created once at data-preparation time, read-only for the lifetime of a
/// search operation. The search core never mutates a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// Listing ID
    pub id: String,

    /// Listing title
    pub title: String,

    /// Street address
    pub address: String,

    /// Monthly price
    pub price: f64,

    /// Number of bedrooms
    pub bedrooms: u32,

    /// Number of bathrooms (half baths allowed)
    pub bathrooms: f64,

    /// Amenity labels
    #[serde(default)]
    pub amenities: Vec<String>,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Description embedding; records without one are skipped during
    /// ranking and reported as warnings
    #[serde(default)]
    pub embedding: Option<Embedding>,
}

/// Attribute constraints applied before similarity ranking
///
/// Every field is optional; an absent field means no constraint on that
/// dimension. The default spec passes every record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Minimum price (inclusive)
    #[serde(default)]
    pub min_price: Option<f64>,

    /// Maximum price (inclusive)
    #[serde(default)]
    pub max_price: Option<f64>,

    /// Minimum bedrooms (inclusive)
    #[serde(default)]
    pub min_bedrooms: Option<u32>,

    /// Maximum bedrooms (inclusive)
    #[serde(default)]
    pub max_bedrooms: Option<u32>,

    /// Minimum bathrooms (inclusive)
    #[serde(default)]
    pub min_bathrooms: Option<f64>,

    /// Amenities the record must carry (case-insensitive substring match)
    #[serde(default)]
    pub required_amenities: Vec<String>,
}

impl FilterSpec {
    /// True when no constraint is configured
    pub fn is_empty(&self) -> bool {
        self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_bedrooms.is_none()
            && self.max_bedrooms.is_none()
            && self.min_bathrooms.is_none()
            && self.required_amenities.is_empty()
    }
}

/// Per-search options
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Number of results to return (must be positive)
    pub top_k: usize,

    /// Attribute filter applied before ranking
    pub filter: Option<FilterSpec>,

    /// Deadline for each embedding-provider call; None waits indefinitely
    pub deadline: Option<Duration>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            top_k: 5,
            filter: None,
            deadline: None,
        }
    }
}

/// A record paired with its similarity score for one query
///
/// Borrows the record rather than cloning or decorating it; scores live only
/// for the duration of the search call.
#[derive(Debug, Clone, Copy)]
pub struct ScoredResult<'a> {
    /// The matched record
    pub record: &'a PropertyRecord,

    /// Cosine similarity against the query embedding, in [-1, 1]
    pub score: f64,
}

/// Ranked results plus non-fatal per-record warnings
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome<'a> {
    /// Results sorted by similarity descending, at most top-k entries
    pub results: Vec<ScoredResult<'a>>,

    /// Records skipped during ranking (e.g. missing embedding)
    pub warnings: Vec<String>,
}
