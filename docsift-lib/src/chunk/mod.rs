//! Document chunking
//!
//! Chunks are the unit of retrieval. Each one covers a contiguous run of
//! sentences from exactly one document and carries enough provenance to
//! point back at it.
//!
//! # Implementing a Chunker
//!
//! ```ignore
//! use docsift_lib::chunk::{Chunk, Chunker};
//! use docsift_lib::Document;
//!
//! struct MyChunker { /* ... */ }
//!
//! impl Chunker for MyChunker {
//!     fn chunk(&self, document: &Document, sentences: &[&str], first_index: usize) -> Vec<Chunk> {
//!         // Your chunking logic here
//!         todo!()
//!     }
//!
//!     fn name(&self) -> &str {
//!         "mine"
//!     }
//! }
//! ```

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::document::Document;

/// A chunk of text with its provenance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chunk {
    /// Sentences of this chunk joined by single spaces
    pub text: String,
    /// Id of the source document
    pub doc_id: i64,
    /// Title of the source document
    pub doc_title: String,
    /// Position of this chunk in the whole corpus (0-indexed, dense)
    pub chunk_index: usize,
    /// Half-open range into the source document's sentence sequence
    pub sentence_span: Range<usize>,
}

/// Trait for document chunking strategies
pub trait Chunker: Send + Sync {
    /// Group a document's sentences into chunks.
    ///
    /// # Arguments
    /// * `document` - The source document, for provenance
    /// * `sentences` - The document's sentences in order
    /// * `first_index` - `chunk_index` to assign to the first chunk produced
    ///
    /// # Returns
    /// Chunks in sentence order with consecutive `chunk_index` values
    fn chunk(&self, document: &Document, sentences: &[&str], first_index: usize) -> Vec<Chunk>;

    /// Returns the name of this chunking strategy
    fn name(&self) -> &str;
}

mod sentence;

pub use sentence::*;
