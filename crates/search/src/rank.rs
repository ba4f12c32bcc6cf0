//! Similarity ranking: score, sort, truncate to top-k

use homematch_common::{HomeMatchError, Result};
use tracing::{debug, warn};

use crate::similarity::{centroid, cosine_similarity};
use crate::types::{Embedding, PropertyRecord, ScoredResult, SearchOutcome};

/// Rank records by cosine similarity against a query embedding
///
/// Records without an embedding are skipped and reported in the outcome's
/// warnings list rather than failing the call. The result is sorted by
/// similarity descending; ties keep input order (stable sort, no secondary
/// key) and the list is truncated to at most `top_k` entries.
pub fn rank<'a>(
    query: &[f64],
    records: &[&'a PropertyRecord],
    top_k: usize,
) -> Result<SearchOutcome<'a>> {
    if top_k == 0 {
        return Err(HomeMatchError::invalid_argument("top_k must be positive"));
    }

    let mut results = Vec::with_capacity(records.len());
    let mut warnings = Vec::new();

    for record in records {
        let Some(embedding) = record.embedding.as_ref() else {
            warn!("Record {} has no embedding, skipping", record.id);
            warnings.push(format!("record {} has no embedding, skipped", record.id));
            continue;
        };

        let score = cosine_similarity(query, embedding)?;
        results.push(ScoredResult { record, score });
    }

    // Vec::sort_by is stable, so equal scores keep input order
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results.truncate(top_k);

    debug!(
        "Ranked {} candidates -> {} results ({} skipped)",
        records.len(),
        results.len(),
        warnings.len()
    );

    Ok(SearchOutcome { results, warnings })
}

/// Rank records against the centroid of several query embeddings
pub fn rank_multi<'a>(
    queries: &[Embedding],
    records: &[&'a PropertyRecord],
    top_k: usize,
) -> Result<SearchOutcome<'a>> {
    let combined = centroid(queries)?;
    rank(&combined, records, top_k)
}
