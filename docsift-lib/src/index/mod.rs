//! Frozen chunk index
//!
//! Holds every chunk together with its TF-IDF vector and the vocabulary the
//! vectors were built against. Nothing changes after [`ChunkIndex::build`],
//! so an index can be shared across threads without locking.

use tracing::debug;

use crate::chunk::Chunk;
use crate::weight::{SparseVector, TermWeighter, Vocabulary};

/// Chunks, their vectors and the vocabulary, frozen together.
#[derive(Debug, Clone)]
pub struct ChunkIndex {
    chunks: Vec<Chunk>,
    vectors: Vec<SparseVector>,
    vocabulary: Vocabulary,
    weighter: TermWeighter,
}

impl ChunkIndex {
    /// Weigh `chunks` and freeze the result.
    ///
    /// # Panics
    /// If `chunks` is not densely indexed from 0 or a vector references a
    /// column outside the vocabulary. Both mean the pipeline is broken.
    pub fn build(chunks: Vec<Chunk>, weighter: TermWeighter) -> Self {
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        let (vocabulary, vectors) = weighter.build(&texts);

        let index = Self {
            chunks,
            vectors,
            vocabulary,
            weighter,
        };
        index.check_invariants();

        debug!(
            chunks = index.len(),
            vocabulary = index.vocabulary.len(),
            "chunk index built"
        );
        index
    }

    fn check_invariants(&self) {
        assert_eq!(
            self.chunks.len(),
            self.vectors.len(),
            "every chunk must have exactly one vector"
        );
        for (position, chunk) in self.chunks.iter().enumerate() {
            assert_eq!(
                chunk.chunk_index, position,
                "chunk indices must be dense and ordered"
            );
        }
        for vector in &self.vectors {
            if let Some(column) = vector.max_column() {
                assert!(
                    column < self.vocabulary.len(),
                    "vector references column {column} outside vocabulary of {}",
                    self.vocabulary.len()
                );
            }
        }
    }

    /// Project a query into this index's vector space.
    pub fn project(&self, query: &str) -> SparseVector {
        self.weighter.project(query, &self.vocabulary)
    }

    /// Iterate chunks alongside their vectors, in `chunk_index` order.
    pub fn iter(&self) -> impl Iterator<Item = (&Chunk, &SparseVector)> + '_ {
        self.chunks.iter().zip(&self.vectors)
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn vector(&self, chunk_index: usize) -> Option<&SparseVector> {
        self.vectors.get(chunk_index)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_chunk(index: usize, text: &str) -> Chunk {
        Chunk {
            text: text.to_string(),
            doc_id: 1,
            doc_title: "doc".to_string(),
            chunk_index: index,
            sentence_span: 0..1,
        }
    }

    #[test]
    fn test_build() {
        let chunks = vec![make_chunk(0, "cloud servers"), make_chunk(1, "revenue report")];
        let index = ChunkIndex::build(chunks, TermWeighter::default());

        assert_eq!(index.len(), 2);
        assert!(!index.is_empty());
        assert!(index.vocabulary().contains("cloud servers"));
        assert!((index.vector(1).unwrap().norm() - 1.0).abs() < 1e-9);
        assert!(index.vector(2).is_none());
    }

    #[test]
    fn test_project_uses_frozen_vocabulary() {
        let index = ChunkIndex::build(vec![make_chunk(0, "cloud servers")], TermWeighter::default());
        assert!(index.project("revenue").is_zero());
        assert!(!index.project("cloud").is_zero());
    }

    #[test]
    fn test_empty_index() {
        let index = ChunkIndex::build(Vec::new(), TermWeighter::default());
        assert!(index.is_empty());
        assert!(index.project("anything").is_zero());
    }

    #[test]
    #[should_panic(expected = "dense")]
    fn test_sparse_chunk_indices_panic() {
        ChunkIndex::build(vec![make_chunk(3, "cloud")], TermWeighter::default());
    }
}
