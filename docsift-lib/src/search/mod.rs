//! High-level search interface
//!
//! Runs the indexing pipeline once and answers queries against the frozen
//! result.
//!
//! # Usage
//!
//! ```ignore
//! use docsift_lib::{corpus, EngineConfig, SearchEngine};
//!
//! let engine = SearchEngine::new(corpus::sample_documents(), EngineConfig::default())?;
//! let results = engine.search("cloud infrastructure AWS Azure", 5)?;
//! let stats = engine.stats();
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::chunk::{Chunk, Chunker, SentenceChunker};
use crate::config::EngineConfig;
use crate::document::{Document, parse_documents};
use crate::index::ChunkIndex;
use crate::rank::{SearchResult, SimilarityRanker};
use crate::weight::Vocabulary;
use crate::{Error, Result};

/// Summary of what an engine indexed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexStats {
    pub total_documents: usize,
    pub total_chunks: usize,
    /// `total_chunks / total_documents`, or 0 with no documents
    pub avg_chunks_per_doc: f64,
}

/// A query together with its ranked results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub total_results: usize,
}

/// Search engine over a fixed corpus.
///
/// Built once from a list of documents; immutable afterwards, so a single
/// engine can be shared behind an `Arc` and queried from any thread.
#[derive(Debug)]
pub struct SearchEngine {
    config: EngineConfig,
    index: ChunkIndex,
    document_count: usize,
}

impl SearchEngine {
    /// Build an engine over `documents`.
    ///
    /// Fails with [`Error::Configuration`] if `config` is invalid, if there
    /// are no documents, or if two documents share an id.
    pub fn new(documents: Vec<Document>, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        if documents.is_empty() {
            return Err(Error::Configuration("corpus contains no documents".into()));
        }
        let mut seen = HashSet::with_capacity(documents.len());
        for document in &documents {
            if !seen.insert(document.id) {
                return Err(Error::Configuration(format!(
                    "duplicate document id {}",
                    document.id
                )));
            }
        }

        let segmenter = config.build_segmenter();
        let chunker = SentenceChunker::new(config.sentences_per_chunk);

        let mut chunks: Vec<Chunk> = Vec::new();
        for document in &documents {
            let sentences = segmenter.segment(&document.content);
            let produced = chunker.chunk(document, &sentences, chunks.len());
            debug!(
                doc_id = document.id,
                sentences = sentences.len(),
                chunks = produced.len(),
                "chunked document"
            );
            chunks.extend(produced);
        }

        let index = ChunkIndex::build(chunks, config.weighter());
        info!(
            documents = documents.len(),
            chunks = index.len(),
            vocabulary = index.vocabulary().len(),
            segmenter = segmenter.name(),
            chunker = chunker.name(),
            "search index built"
        );

        Ok(Self {
            config,
            index,
            document_count: documents.len(),
        })
    }

    /// Build an engine with [`EngineConfig::default`].
    pub fn with_defaults(documents: Vec<Document>) -> Result<Self> {
        Self::new(documents, EngineConfig::default())
    }

    /// Build an engine from a JSON array of `{id, title, content}` records.
    pub fn from_json(json: &str, config: EngineConfig) -> Result<Self> {
        Self::new(parse_documents(json)?, config)
    }

    /// Rank chunks against `query`, returning at most `k` results.
    ///
    /// The query is trimmed first. An empty query, `k == 0`, or a request
    /// above the configured ceilings is rejected with
    /// [`Error::InvalidInput`]. A query with no indexed terms is not an
    /// error and yields an empty list.
    pub fn search(&self, query: &str, k: usize) -> Result<Vec<SearchResult>> {
        let query = self.check_query(query, k)?;
        Ok(SimilarityRanker.rank(query, &self.index, k))
    }

    /// [`search`](Self::search) with the configured default `k`.
    pub fn search_default(&self, query: &str) -> Result<Vec<SearchResult>> {
        self.search(query, self.config.default_top_k)
    }

    /// [`search`](Self::search), wrapped with the trimmed query and a count.
    pub fn respond(&self, query: &str, k: usize) -> Result<SearchResponse> {
        let results = self.search(query, k)?;
        Ok(SearchResponse {
            query: query.trim().to_owned(),
            total_results: results.len(),
            results,
        })
    }

    fn check_query<'q>(&self, query: &'q str, k: usize) -> Result<&'q str> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::InvalidInput("query must not be empty".into()));
        }
        let length = query.chars().count();
        if length > self.config.max_query_chars {
            return Err(Error::InvalidInput(format!(
                "query is {length} characters, limit is {}",
                self.config.max_query_chars
            )));
        }
        if k == 0 {
            return Err(Error::InvalidInput("top_k must be at least 1".into()));
        }
        if k > self.config.max_top_k {
            return Err(Error::InvalidInput(format!(
                "top_k {k} exceeds limit of {}",
                self.config.max_top_k
            )));
        }
        Ok(query)
    }

    #[must_use]
    pub fn stats(&self) -> IndexStats {
        let total_chunks = self.index.len();
        let avg_chunks_per_doc = if self.document_count == 0 {
            0.0
        } else {
            total_chunks as f64 / self.document_count as f64
        };
        IndexStats {
            total_documents: self.document_count,
            total_chunks,
            avg_chunks_per_doc,
        }
    }

    /// All chunks in `chunk_index` order.
    #[must_use]
    pub fn chunks(&self) -> &[Chunk] {
        self.index.chunks()
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        self.index.vocabulary()
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the number of indexed chunks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if no chunks are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::SegmenterKind;

    fn docs() -> Vec<Document> {
        vec![
            Document::new(
                1,
                "Cloud",
                "We run servers on AWS. Azure hosts backups. Costs are tracked monthly. \
                 Latency dropped last quarter.",
            ),
            Document::new(
                2,
                "Finance",
                "Revenue grew strongly. Margins held steady. Forecasts look good.",
            ),
        ]
    }

    #[test]
    fn test_build() {
        let engine = SearchEngine::with_defaults(docs()).unwrap();
        assert_eq!(engine.len(), 3);
        assert!(!engine.is_empty());

        let indices: Vec<_> = engine.chunks().iter().map(|c| c.chunk_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(engine.chunks()[2].doc_id, 2);
        assert_eq!(engine.chunks()[1].sentence_span, 3..4);
    }

    #[test]
    fn test_empty_corpus_rejected() {
        let err = SearchEngine::with_defaults(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut documents = docs();
        documents[1].id = 1;
        let err = SearchEngine::with_defaults(documents).unwrap_err();
        assert!(err.to_string().contains("duplicate document id 1"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig {
            max_features: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            SearchEngine::new(docs(), config),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{"id": 3, "title": "T", "content": "One. Two. Three. Four."}]"#;
        let engine = SearchEngine::from_json(json, EngineConfig::default()).unwrap();
        assert_eq!(engine.stats().total_chunks, 2);

        let err = SearchEngine::from_json("[]", EngineConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_empty_content_counts_as_document() {
        let mut documents = docs();
        documents.push(Document::new(9, "Blank", "   "));
        let stats = SearchEngine::with_defaults(documents).unwrap().stats();

        assert_eq!(stats.total_documents, 3);
        assert_eq!(stats.total_chunks, 3);
        assert!((stats.avg_chunks_per_doc - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_search() {
        let engine = SearchEngine::with_defaults(docs()).unwrap();
        let results = engine.search("revenue forecasts", 5).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].doc_title, "Finance");
        assert!(results[0].similarity_score > 0.0);
    }

    #[test]
    fn test_query_is_trimmed() {
        let engine = SearchEngine::with_defaults(docs()).unwrap();
        let padded = engine.respond("  azure backups \n", 5).unwrap();
        assert_eq!(padded.query, "azure backups");
        assert_eq!(padded.total_results, padded.results.len());
        assert_eq!(
            padded.results[0].chunk_index,
            engine.search("azure backups", 5).unwrap()[0].chunk_index
        );
    }

    #[test]
    fn test_invalid_queries() {
        let engine = SearchEngine::with_defaults(docs()).unwrap();

        for query in ["", "   ", "\t\n"] {
            assert!(engine.search(query, 5).unwrap_err().is_input_error());
        }
        assert!(engine.search("cloud", 0).unwrap_err().is_input_error());
        assert!(engine.search("cloud", 101).unwrap_err().is_input_error());

        let long = "a".repeat(4097);
        assert!(engine.search(&long, 5).unwrap_err().is_input_error());
    }

    #[test]
    fn test_search_default_uses_configured_k() {
        let config = EngineConfig {
            sentences_per_chunk: 1,
            default_top_k: 2,
            ..EngineConfig::default()
        };
        let documents = vec![Document::new(
            1,
            "Clouds",
            "Cloud one. Cloud two. Cloud three. Cloud four.",
        )];
        let engine = SearchEngine::new(documents, config).unwrap();
        assert_eq!(engine.search_default("cloud").unwrap().len(), 2);
    }

    #[test]
    fn test_linguistic_segmenter_selected_by_config() {
        let config = EngineConfig {
            sentences_per_chunk: 1,
            segmenter: SegmenterKind::Linguistic,
            ..EngineConfig::default()
        };
        let documents = vec![Document::new(1, "Memo", "Dr. Smith approved it. Work starts soon.")];
        let engine = SearchEngine::new(documents, config).unwrap();

        assert_eq!(engine.len(), 2);
        assert_eq!(engine.chunks()[0].text, "Dr. Smith approved it.");
    }

    #[test]
    fn test_configured_abbreviations_reach_segmenter() {
        let config = EngineConfig {
            sentences_per_chunk: 1,
            segmenter: SegmenterKind::Linguistic,
            abbreviations: vec!["ref".into()],
            ..EngineConfig::default()
        };
        let documents = vec![Document::new(1, "Notes", "See Ref. Seven. Done.")];
        let engine = SearchEngine::new(documents, config).unwrap();

        assert_eq!(engine.len(), 2);
        assert_eq!(engine.chunks()[0].text, "See Ref. Seven.");
    }

    #[test]
    fn test_linguistic_build_with_multibyte_spaces() {
        let config = EngineConfig {
            sentences_per_chunk: 1,
            segmenter: SegmenterKind::Linguistic,
            ..EngineConfig::default()
        };
        let documents = vec![
            Document::new(1, "Price", "Price is 5\u{a0}USD. Next one."),
            Document::new(2, "Memo", "Ask\u{3000}Dr. Smith today. Done."),
        ];
        let engine = SearchEngine::new(documents, config).unwrap();

        assert_eq!(engine.len(), 4);
        assert_eq!(engine.chunks()[0].text, "Price is 5\u{a0}USD.");
        assert_eq!(engine.chunks()[2].text, "Ask\u{3000}Dr. Smith today.");
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchEngine>();
    }
}
