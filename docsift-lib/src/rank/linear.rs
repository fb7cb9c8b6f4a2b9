use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::index::ChunkIndex;
use crate::rank::SearchResult;

/// Brute-force cosine ranker.
///
/// Every chunk vector is unit length, so cosine similarity reduces to a
/// dot product with the projected query. Fine for corpora of a few
/// thousand chunks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityRanker;

/// Heap entry ordered by [`SearchResult::rank_order`].
struct Ranked(SearchResult);

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.rank_order(&other.0)
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl SimilarityRanker {
    /// Rank chunks of `index` against `query`, best first.
    ///
    /// Chunks scoring zero are never returned, so the result may hold fewer
    /// than `k` entries. A query sharing no term with the vocabulary yields
    /// an empty result.
    pub fn rank(&self, query: &str, index: &ChunkIndex, k: usize) -> Vec<SearchResult> {
        let query_vector = index.project(query);
        if query_vector.is_zero() || k == 0 {
            debug!(query, "query has no indexed terms");
            return Vec::new();
        }

        let mut results = BinaryHeap::with_capacity(index.len());
        for (chunk, vector) in index.iter() {
            let score = query_vector.dot(vector);
            if score > 0.0 {
                results.push(Ranked(SearchResult::new(chunk, score.min(1.0))));
            }
        }
        debug!(query, matched = results.len(), k, "ranked chunks");

        results
            .into_sorted_vec()
            .into_iter()
            .rev()
            .take(k)
            .map(|ranked| ranked.0)
            .collect()
    }
}
