//! Term weighting
//!
//! Builds a vocabulary of unigrams and bigrams over all chunks and turns
//! each chunk, and later each query, into a unit-length TF-IDF vector.
//!
//! # Usage
//!
//! ```ignore
//! use docsift_lib::weight::TermWeighter;
//!
//! let weighter = TermWeighter::default();
//! let (vocabulary, vectors) = weighter.build(&["Cloud infrastructure on AWS.", "Quarterly revenue."]);
//! let query = weighter.project("aws cloud", &vocabulary);
//! let score = query.dot(&vectors[0]);
//! ```

use serde::Serialize;

/// A sparse vector over vocabulary columns.
///
/// Entries are sorted by column and hold no zero weights.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build from `(column, weight)` pairs; zero weights are dropped.
    pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|&(_, w)| w != 0.0);
        entries.sort_by_key(|&(col, _)| col);
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Returns `true` if no term carries weight.
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Scale to unit length. Zero vectors stay zero.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
    }

    /// Dot product, merging the two sorted entry lists.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a, wa) = self.entries[i];
            let (b, wb) = other.entries[j];
            match a.cmp(&b) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Highest column referenced, if any.
    pub fn max_column(&self) -> Option<usize> {
        self.entries.last().map(|&(col, _)| col)
    }
}

mod analyzer;
mod stop_words;
mod tfidf;
mod vocabulary;

pub use analyzer::*;
pub use stop_words::is_stop_word;
pub use tfidf::*;
pub use vocabulary::*;
