//! Source documents supplied at engine construction

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A document in the corpus.
///
/// Documents are consumed by the indexing pipeline; the engine keeps only
/// the chunks derived from them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Caller-assigned identifier, unique within the corpus
    pub id: i64,
    /// Human-readable title, copied onto every chunk
    #[serde(default)]
    pub title: String,
    /// Raw document text
    #[serde(alias = "text")]
    pub content: String,
}

impl Document {
    pub fn new(id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Parse a JSON array of documents.
///
/// Any structural problem (a record without `id` or `content`, wrong field
/// types, a top-level value that is not an array) is a configuration error.
pub fn parse_documents(json: &str) -> Result<Vec<Document>> {
    serde_json::from_str(json).map_err(|e| Error::Configuration(format!("malformed corpus: {e}")))
}
