//! Memory types for Reminisce.
//!
//! These types model a stored memory as it moves through the system:
//! chunked text ready for embedding, the record persisted in the vector
//! store, search hits coming back out, and the recollection handed to
//! the caller.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;

/// Free-form caller metadata attached to every chunk of a memory.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Metadata key holding the shared document identifier.
pub const META_DOCUMENT_ID: &str = "document_id";
/// Metadata key holding the zero-based chunk position.
pub const META_CHUNK_INDEX: &str = "chunk_index";
/// Metadata key holding the raw chunk text.
pub const META_TEXT: &str = "text";

/// A bounded-length piece of a memory, the unit of storage.
///
/// All chunks produced from one storage call share `document_id`;
/// `chunk_index` values are contiguous from zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryChunk {
    pub document_id: Uuid,
    pub chunk_index: u32,
    pub text: String,
    /// Caller metadata with `document_id`, `chunk_index` and `text` asserted on top.
    pub metadata: Metadata,
}

/// Kind of content a stored vector was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VectorType {
    #[default]
    Text,
}

impl fmt::Display for VectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorType::Text => write!(f, "text"),
        }
    }
}

/// The unit persisted in the vector store. Created on write, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredVectorRecord {
    pub vector: Vec<f32>,
    pub vector_type: VectorType,
    pub document_text: String,
    /// Account that owns the record; searches are scoped to it.
    pub owner_id: String,
    pub metadata: Metadata,
}

/// A top-k similarity search against the vector store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorQuery {
    pub vector: Vec<f32>,
    pub owner_id: String,
    /// The raw query text, forwarded for stores that re-rank on text.
    pub query_text: String,
    pub vector_type: VectorType,
    pub top_k: usize,
}

/// A single search hit, in descending similarity order within a result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedMemory {
    pub document_text: String,
    #[serde(default)]
    pub metadata: Metadata,
    /// Similarity score if the store reports one (higher is closer).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

/// The natural-language answer and optional illustration returned for a query.
///
/// `image` is a `data:` URI when present and serializes as `null` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recollection {
    pub text: String,
    pub image: Option<String>,
}

impl Recollection {
    /// A recollection carrying text only.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: None,
        }
    }
}
