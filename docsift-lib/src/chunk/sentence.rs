use crate::chunk::{Chunk, Chunker};
use crate::document::Document;

/// Sentence-window chunker - groups a fixed number of consecutive sentences
///
/// Windows do not overlap. The last window of a document holds whatever is
/// left over, so a document with `n` sentences yields `ceil(n / window)`
/// chunks.
pub struct SentenceChunker {
    pub window: usize,
}

impl SentenceChunker {
    pub const DEFAULT_WINDOW: usize = 3;

    #[must_use]
    pub fn new(window: usize) -> Self {
        debug_assert!(window > 0, "window must hold at least one sentence");
        Self { window }
    }
}

impl Default for SentenceChunker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}

impl Chunker for SentenceChunker {
    fn name(&self) -> &str {
        "sentence"
    }

    fn chunk(&self, document: &Document, sentences: &[&str], first_index: usize) -> Vec<Chunk> {
        let window = self.window.max(1);
        let mut chunks = Vec::with_capacity(sentences.len().div_ceil(window));

        for (n, group) in sentences.chunks(window).enumerate() {
            let text = group.join(" ");
            // whitespace-only groups carry nothing to index
            if text.trim().is_empty() {
                continue;
            }

            let start = n * window;
            chunks.push(Chunk {
                text,
                doc_id: document.id,
                doc_title: document.title.clone(),
                chunk_index: first_index + chunks.len(),
                sentence_span: start..start + group.len(),
            });
        }
        chunks
    }
}
