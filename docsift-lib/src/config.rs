//! Engine configuration
//!
//! Every field has a default, so a partial TOML table or JSON object is a
//! valid configuration. Values are checked once by [`EngineConfig::validate`]
//! when an engine is built.

use serde::{Deserialize, Serialize};

use crate::segment::{Segmenter, SegmenterKind};
use crate::weight::{Analyzer, TermWeighter};
use crate::{Error, Result};

/// Settings for building and querying a [`SearchEngine`](crate::SearchEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Sentences grouped into one chunk
    pub sentences_per_chunk: usize,
    /// Upper bound on vocabulary size
    pub max_features: usize,
    /// Inclusive `(min, max)` n-gram lengths
    pub ngram_range: (usize, usize),
    pub remove_stop_words: bool,
    pub segmenter: SegmenterKind,
    /// Extra abbreviations for the linguistic segmenter, without the
    /// trailing period
    pub abbreviations: Vec<String>,
    /// Results returned when the caller does not ask for a count
    pub default_top_k: usize,
    /// Largest `top_k` a query may ask for
    pub max_top_k: usize,
    /// Longest accepted query, in characters
    pub max_query_chars: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sentences_per_chunk: 3,
            max_features: TermWeighter::DEFAULT_MAX_FEATURES,
            ngram_range: (1, 2),
            remove_stop_words: true,
            segmenter: SegmenterKind::default(),
            abbreviations: Vec::new(),
            default_top_k: 5,
            max_top_k: 100,
            max_query_chars: 4096,
        }
    }
}

impl EngineConfig {
    /// Reject values no engine can be built with.
    pub fn validate(&self) -> Result<()> {
        if self.sentences_per_chunk == 0 {
            return Err(Error::Configuration(
                "sentences_per_chunk must be at least 1".into(),
            ));
        }
        if self.max_features == 0 {
            return Err(Error::Configuration("max_features must be at least 1".into()));
        }
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(Error::Configuration(format!(
                "invalid ngram_range ({min_n}, {max_n})"
            )));
        }
        if self.max_top_k == 0 {
            return Err(Error::Configuration("max_top_k must be at least 1".into()));
        }
        if self.default_top_k == 0 || self.default_top_k > self.max_top_k {
            return Err(Error::Configuration(format!(
                "default_top_k must be between 1 and {}",
                self.max_top_k
            )));
        }
        if let Some(bad) = self
            .abbreviations
            .iter()
            .find(|a| a.trim().is_empty() || a.chars().any(char::is_whitespace))
        {
            return Err(Error::Configuration(format!("invalid abbreviation '{bad}'")));
        }
        if self.max_query_chars == 0 {
            return Err(Error::Configuration(
                "max_query_chars must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// The sentence segmenter these settings describe.
    #[must_use]
    pub fn build_segmenter(&self) -> Box<dyn Segmenter> {
        self.segmenter.build(&self.abbreviations)
    }

    /// The term weighter these settings describe.
    #[must_use]
    pub fn weighter(&self) -> TermWeighter {
        let analyzer = Analyzer {
            remove_stop_words: self.remove_stop_words,
            ngram_range: self.ngram_range,
        };
        TermWeighter::new(analyzer, self.max_features)
    }
}
