use std::collections::BTreeMap;

use serde::Serialize;

/// The frozen set of terms recognised by an index.
///
/// Column indices follow lexicographic term order. Each column carries the
/// number of chunks containing the term and its smoothed IDF weight.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Vocabulary {
    terms: Vec<String>,
    #[serde(skip)]
    columns: BTreeMap<String, usize>,
    document_frequency: Vec<usize>,
    idf: Vec<f64>,
    chunk_count: usize,
}

/// One vocabulary column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VocabularyEntry<'a> {
    pub term: &'a str,
    pub column: usize,
    pub document_frequency: usize,
    pub idf: f64,
}

impl Vocabulary {
    /// Build from `(term, document_frequency)` pairs over `chunk_count` chunks.
    pub(crate) fn new(mut terms: Vec<(String, usize)>, chunk_count: usize) -> Self {
        terms.sort_by(|a, b| a.0.cmp(&b.0));

        let mut vocabulary = Self {
            chunk_count,
            ..Self::default()
        };
        for (column, (term, df)) in terms.into_iter().enumerate() {
            vocabulary.idf.push(smoothed_idf(chunk_count, df));
            vocabulary.document_frequency.push(df);
            vocabulary.columns.insert(term.clone(), column);
            vocabulary.terms.push(term);
        }
        vocabulary
    }

    /// Column of `term`, if it is in the vocabulary.
    pub fn column(&self, term: &str) -> Option<usize> {
        self.columns.get(term).copied()
    }

    /// Entry at `column`.
    ///
    /// # Panics
    /// If `column` is outside the vocabulary; vectors built against this
    /// vocabulary never reference such a column.
    pub fn entry(&self, column: usize) -> VocabularyEntry<'_> {
        assert!(
            column < self.terms.len(),
            "vocabulary column {column} out of range ({} terms)",
            self.terms.len()
        );
        VocabularyEntry {
            term: &self.terms[column],
            column,
            document_frequency: self.document_frequency[column],
            idf: self.idf[column],
        }
    }

    pub fn idf(&self, column: usize) -> f64 {
        self.entry(column).idf
    }

    pub fn contains(&self, term: &str) -> bool {
        self.columns.contains_key(term)
    }

    /// Iterate entries in column order.
    pub fn iter(&self) -> impl Iterator<Item = VocabularyEntry<'_>> + '_ {
        (0..self.terms.len()).map(|column| self.entry(column))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of chunks the vocabulary was built over.
    pub fn chunk_count(&self) -> usize {
        self.chunk_count
    }
}

/// `ln((1 + n) / (1 + df)) + 1`; never zero, even for a term in every chunk.
pub(crate) fn smoothed_idf(chunk_count: usize, document_frequency: usize) -> f64 {
    ((1.0 + chunk_count as f64) / (1.0 + document_frequency as f64)).ln() + 1.0
}
