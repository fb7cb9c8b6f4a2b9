use std::cmp::Reverse;
use std::collections::BTreeMap;

use tracing::debug;

use crate::weight::{Analyzer, SparseVector, Vocabulary};

/// TF-IDF weighter over unigrams and bigrams.
///
/// Weight of a term in a chunk is its raw count times its smoothed IDF;
/// every vector is then scaled to unit length, so cosine similarity is a
/// plain dot product.
#[derive(Debug, Clone)]
pub struct TermWeighter {
    pub analyzer: Analyzer,
    /// Upper bound on vocabulary size
    pub max_features: usize,
}

impl TermWeighter {
    pub const DEFAULT_MAX_FEATURES: usize = 5000;

    #[must_use]
    pub fn new(analyzer: Analyzer, max_features: usize) -> Self {
        Self {
            analyzer,
            max_features,
        }
    }

    /// Build the vocabulary and one unit vector per text.
    ///
    /// When there are more distinct terms than `max_features`, the terms with
    /// the highest total count across all texts are kept; equal counts fall
    /// back to term order so the result is reproducible.
    pub fn build(&self, texts: &[&str]) -> (Vocabulary, Vec<SparseVector>) {
        let counts: Vec<BTreeMap<String, usize>> =
            texts.iter().map(|t| self.term_counts(t)).collect();

        // term -> (total count, document frequency)
        let mut totals: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for chunk in &counts {
            for (term, &n) in chunk {
                let entry = totals.entry(term.as_str()).or_default();
                entry.0 += n;
                entry.1 += 1;
            }
        }

        let mut candidates: Vec<(&str, usize, usize)> =
            totals.into_iter().map(|(t, (total, df))| (t, total, df)).collect();
        if candidates.len() > self.max_features {
            debug!(
                candidates = candidates.len(),
                max_features = self.max_features,
                "trimming vocabulary"
            );
            candidates.sort_by_key(|&(term, total, _)| (Reverse(total), term));
            candidates.truncate(self.max_features);
        }

        let vocabulary = Vocabulary::new(
            candidates
                .into_iter()
                .map(|(term, _, df)| (term.to_owned(), df))
                .collect(),
            texts.len(),
        );

        let vectors = counts
            .iter()
            .map(|chunk| weigh(chunk, &vocabulary))
            .collect();

        (vocabulary, vectors)
    }

    /// Project a query into the space of `vocabulary`.
    ///
    /// Terms outside the vocabulary are dropped; a query with no known term
    /// yields the zero vector.
    pub fn project(&self, query: &str, vocabulary: &Vocabulary) -> SparseVector {
        weigh(&self.term_counts(query), vocabulary)
    }

    fn term_counts(&self, text: &str) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for term in self.analyzer.terms(text) {
            *counts.entry(term).or_insert(0) += 1;
        }
        counts
    }
}

impl Default for TermWeighter {
    fn default() -> Self {
        Self::new(Analyzer::default(), Self::DEFAULT_MAX_FEATURES)
    }
}

fn weigh(counts: &BTreeMap<String, usize>, vocabulary: &Vocabulary) -> SparseVector {
    let entries = counts
        .iter()
        .filter_map(|(term, &tf)| {
            let column = vocabulary.column(term)?;
            Some((column, tf as f64 * vocabulary.idf(column)))
        })
        .collect();

    let mut vector = SparseVector::from_entries(entries);
    vector.normalize();
    vector
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXTS: [&str; 3] = [
        "Cloud infrastructure runs on AWS and Azure.",
        "Quarterly revenue grew. Revenue beat forecasts.",
        "Machine learning models run in the cloud.",
    ];

    #[test]
    fn test_vectors_are_unit_length() {
        let (_, vectors) = TermWeighter::default().build(&TEXTS);
        assert_eq!(vectors.len(), 3);
        for v in &vectors {
            assert!((v.norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_vocabulary_contains_unigrams_and_bigrams() {
        let (vocab, _) = TermWeighter::default().build(&TEXTS);
        assert!(vocab.contains("cloud"));
        assert!(vocab.contains("cloud infrastructure"));
        assert!(vocab.contains("machine learning"));
        assert!(!vocab.contains("the"));
    }

    #[test]
    fn test_document_frequency() {
        let (vocab, _) = TermWeighter::default().build(&TEXTS);
        let cloud = vocab.entry(vocab.column("cloud").unwrap());
        assert_eq!(cloud.document_frequency, 2);
        let revenue = vocab.entry(vocab.column("revenue").unwrap());
        assert_eq!(revenue.document_frequency, 1);
    }

    #[test]
    fn test_term_frequency_raises_weight() {
        let weighter = TermWeighter::default();
        let (vocab, vectors) = weighter.build(&TEXTS);
        let revenue = vocab.column("revenue").unwrap();
        let grew = vocab.column("grew").unwrap();
        let weight = |col| {
            vectors[1]
                .entries()
                .iter()
                .find(|(c, _)| *c == col)
                .map(|(_, w)| *w)
                .unwrap()
        };
        assert!(weight(revenue) > weight(grew));
    }

    #[test]
    fn test_max_features_keeps_most_frequent() {
        let weighter = TermWeighter::new(
            Analyzer {
                ngram_range: (1, 1),
                ..Analyzer::default()
            },
            2,
        );
        let (vocab, _) = weighter.build(&["apple apple apple pear", "apple pear kiwi", "plum"]);

        assert_eq!(vocab.len(), 2);
        assert!(vocab.contains("apple"));
        assert!(vocab.contains("pear"));
    }

    #[test]
    fn test_max_features_ties_broken_by_term() {
        let weighter = TermWeighter::new(
            Analyzer {
                ngram_range: (1, 1),
                ..Analyzer::default()
            },
            1,
        );
        let (vocab, _) = weighter.build(&["kiwi plum"]);
        assert!(vocab.contains("kiwi"));
        assert!(!vocab.contains("plum"));
    }

    #[test]
    fn test_project_drops_unknown_terms() {
        let weighter = TermWeighter::default();
        let (vocab, _) = weighter.build(&TEXTS);

        assert!(weighter.project("xyzzy qwerty", &vocab).is_zero());
        let q = weighter.project("cloud xyzzy", &vocab);
        assert_eq!(q.entries().len(), 1);
        assert!((q.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_project_of_chunk_text_equals_chunk_vector() {
        let weighter = TermWeighter::default();
        let (vocab, vectors) = weighter.build(&TEXTS);
        let q = weighter.project(TEXTS[2], &vocab);
        assert!((q.dot(&vectors[2]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_chunk_of_stop_words_has_zero_vector() {
        let (_, vectors) = TermWeighter::default().build(&["cloud data", "the and of"]);
        assert!(vectors[1].is_zero());
        assert_eq!(vectors[1].norm(), 0.0);
    }

    #[test]
    fn test_build_is_deterministic() {
        let weighter = TermWeighter::default();
        let (va, a) = weighter.build(&TEXTS);
        let (vb, b) = weighter.build(&TEXTS);
        assert_eq!(a, b);
        assert_eq!(
            va.iter().map(|e| e.term.to_owned()).collect::<Vec<_>>(),
            vb.iter().map(|e| e.term.to_owned()).collect::<Vec<_>>()
        );
    }
}
