//! Docsift - in-process document retrieval over a fixed corpus
//!
//! # Architecture
//!
//! ```text
//! Document -> Segmenter -> Chunker -> TermWeighter -> ChunkIndex
//!                                                        |
//! Query -> SearchEngine -> SimilarityRanker <------------+
//!                               |
//!                            Results
//! ```
//!
//! The index is built once, when the engine is constructed, and never
//! changes afterwards.
//!
//! # Example
//!
//! ```ignore
//! use docsift_lib::{corpus, SearchEngine};
//!
//! let engine = SearchEngine::with_defaults(corpus::sample_documents())?;
//!
//! for result in engine.search("cloud infrastructure AWS Azure", 5)? {
//!     println!("{:.3} {}", result.similarity_score, result.doc_title);
//! }
//! println!("{:?}", engine.stats());
//! ```

pub mod chunk;
pub mod config;
pub mod corpus;
pub mod document;
pub mod error;
pub mod index;
pub mod rank;
pub mod search;
pub mod segment;
pub mod weight;

pub use config::EngineConfig;
pub use document::Document;
pub use error::{Error, Result};
pub use rank::SearchResult;
pub use search::{IndexStats, SearchEngine, SearchResponse};
