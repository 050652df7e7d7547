//! VectorLakeClient: embeddings and vector storage over Groclake VectorLake.

use tracing::debug;

use reminisce_core::memory::embedder::Embedder;
use reminisce_core::memory::vector::VectorStore;
use reminisce_types::error::RepositoryError;
use reminisce_types::memory::{RetrievedMemory, StoredVectorRecord, VectorQuery};

use super::client::GroclakeClient;
use super::types::{GenerateRequest, GenerateResponse, PushRequest, SearchRequest, SearchResponse};

const GENERATE_PATH: &str = "/vector/generate";
const PUSH_PATH: &str = "/vector/push";
const SEARCH_PATH: &str = "/vector/search";

/// Implements both [`Embedder`] and [`VectorStore`]; clones share one connection pool.
#[derive(Clone)]
pub struct VectorLakeClient {
    client: GroclakeClient,
}

impl VectorLakeClient {
    pub fn new(client: GroclakeClient) -> Self {
        Self { client }
    }
}

impl Embedder for VectorLakeClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, RepositoryError> {
        let response: GenerateResponse = self
            .client
            .post_json(GENERATE_PATH, &GenerateRequest { query: text })
            .await?;

        if response.vector.is_empty() {
            return Err(RepositoryError::Deserialization(
                "embedding response contained no vector".to_string(),
            ));
        }
        debug!(dimension = response.vector.len(), "Generated embedding");
        Ok(response.vector)
    }

    fn model_name(&self) -> &str {
        "groclake-vectorlake"
    }
}

impl VectorStore for VectorLakeClient {
    async fn push(&self, record: &StoredVectorRecord) -> Result<(), RepositoryError> {
        let body = PushRequest {
            vector: &record.vector,
            vector_type: record.vector_type,
            vector_document: &record.document_text,
            vectorlake_id: &record.owner_id,
            metadata: &record.metadata,
        };
        self.client.post(PUSH_PATH, &body).await?;
        Ok(())
    }

    async fn search(&self, query: &VectorQuery) -> Result<Vec<RetrievedMemory>, RepositoryError> {
        let body = SearchRequest {
            vector: &query.vector,
            vectorlake_id: &query.owner_id,
            query: &query.query_text,
            vector_type: query.vector_type,
            top_k: query.top_k,
        };
        let response: SearchResponse = self.client.post_json(SEARCH_PATH, &body).await?;

        Ok(response
            .into_hits()
            .into_iter()
            .take(query.top_k)
            .map(RetrievedMemory::from)
            .collect())
    }
}
