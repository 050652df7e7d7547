//! Groclake wire types.

use serde::{Deserialize, Serialize};

use reminisce_types::memory::{Metadata, RetrievedMemory, VectorType};

#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub query: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub vector: Vec<f32>,
}

#[derive(Debug, Serialize)]
pub struct PushRequest<'a> {
    pub vector: &'a [f32],
    pub vector_type: VectorType,
    pub vector_document: &'a str,
    pub vectorlake_id: &'a str,
    pub metadata: &'a Metadata,
}

#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub vector: &'a [f32],
    pub vectorlake_id: &'a str,
    pub query: &'a str,
    pub vector_type: VectorType,
    pub top_k: usize,
}

/// A search response is either a bare array of hits or an object wrapping one.
/// An object without `results` is not a search response.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Hits(Vec<SearchHit>),
    Wrapped { results: Vec<SearchHit> },
}

impl SearchResponse {
    pub fn into_hits(self) -> Vec<SearchHit> {
        match self {
            Self::Hits(hits) | Self::Wrapped { results: hits } => hits,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchHit {
    #[serde(alias = "document", alias = "document_text")]
    pub vector_document: String,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub score: Option<f32>,
}

impl From<SearchHit> for RetrievedMemory {
    fn from(hit: SearchHit) -> Self {
        Self {
            document_text: hit.vector_document,
            metadata: hit.metadata,
            score: hit.score,
        }
    }
}
