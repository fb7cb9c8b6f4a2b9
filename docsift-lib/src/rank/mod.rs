//! Similarity ranking
//!
//! Queries are projected into the index's vector space and compared with
//! every chunk vector. Only chunks sharing at least one weighted term with
//! the query are returned.
//!
//! # Usage
//!
//! ```ignore
//! use docsift_lib::rank::SimilarityRanker;
//!
//! let results = SimilarityRanker.rank("cloud infrastructure", &index, 5);
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::chunk::Chunk;

/// A ranked chunk
///
/// Equality compares every field. Ranking order lives in
/// [`SearchResult::rank_order`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The matched chunk's text
    #[serde(rename = "chunk")]
    pub chunk_text: String,
    /// Cosine similarity with the query, in (0.0, 1.0]
    pub similarity_score: f64,
    pub doc_id: i64,
    pub doc_title: String,
    pub chunk_index: usize,
}

impl SearchResult {
    pub(crate) fn new(chunk: &Chunk, similarity_score: f64) -> Self {
        Self {
            chunk_text: chunk.text.clone(),
            similarity_score,
            doc_id: chunk.doc_id,
            doc_title: chunk.doc_title.clone(),
            chunk_index: chunk.chunk_index,
        }
    }

    /// `Greater` means `self` ranks earlier: higher score, then lower
    /// `chunk_index`.
    #[must_use]
    pub fn rank_order(&self, other: &Self) -> Ordering {
        self.similarity_score
            .total_cmp(&other.similarity_score)
            .then_with(|| other.chunk_index.cmp(&self.chunk_index))
    }
}

mod linear;

pub use linear::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn result(score: f64, chunk_index: usize) -> SearchResult {
        SearchResult {
            chunk_text: String::new(),
            similarity_score: score,
            doc_id: 0,
            doc_title: String::new(),
            chunk_index,
        }
    }

    #[test]
    fn test_higher_score_ranks_first() {
        assert_eq!(result(0.9, 5).rank_order(&result(0.1, 0)), Ordering::Greater);
    }

    #[test]
    fn test_tie_prefers_lower_chunk_index() {
        assert_eq!(result(0.5, 1).rank_order(&result(0.5, 2)), Ordering::Greater);
        assert_eq!(result(0.5, 2).rank_order(&result(0.5, 1)), Ordering::Less);
    }

    #[test]
    fn test_equality_compares_every_field() {
        let a = result(0.5, 1);
        let mut b = a.clone();
        b.chunk_text = "other text".into();
        b.doc_id = 7;

        assert_eq!(a.rank_order(&b), Ordering::Equal);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(result(0.25, 3)).unwrap();
        assert_eq!(json["chunk"], "");
        assert_eq!(json["similarity_score"], 0.25);
        assert_eq!(json["chunk_index"], 3);
        assert!(json.get("chunk_text").is_none());
    }
}
