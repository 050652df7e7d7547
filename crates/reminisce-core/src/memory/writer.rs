//! Memory writer: chunk, embed and push.
//!
//! Every chunk of a stored text is embedded and pushed in order, one vector
//! store write per chunk. The first failure aborts the remaining chunks and
//! surfaces as [`MemoryError::Storage`]; there is no partial success.

use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use reminisce_types::error::MemoryError;
use reminisce_types::memory::{Metadata, StoredVectorRecord, VectorType};

use super::box_embedder::BoxEmbedder;
use super::box_vector::BoxVectorStore;
use super::chunker::Chunker;

/// Stores memory text as embedded chunks in the vector store.
pub struct MemoryWriter {
    chunker: Chunker,
    embedder: Arc<BoxEmbedder>,
    store: Arc<BoxVectorStore>,
    owner_id: String,
}

impl MemoryWriter {
    pub fn new(
        chunker: Chunker,
        embedder: Arc<BoxEmbedder>,
        store: Arc<BoxVectorStore>,
        owner_id: impl Into<String>,
    ) -> Self {
        Self {
            chunker,
            embedder,
            store,
            owner_id: owner_id.into(),
        }
    }

    /// Store `text` and return the document id shared by all of its chunks.
    #[tracing::instrument(
        name = "store_memory",
        skip(self, text, metadata),
        fields(text_len = text.len(), embedder = self.embedder.model_name())
    )]
    pub async fn store(
        &self,
        text: &str,
        metadata: Option<&Metadata>,
    ) -> Result<Uuid, MemoryError> {
        let chunks = self.chunker.split(text, metadata)?;
        let document_id = chunks[0].document_id;

        for chunk in &chunks {
            let vector = self.embedder.embed(&chunk.text).await.map_err(|e| {
                error!(
                    document_id = %document_id,
                    chunk_index = chunk.chunk_index,
                    error = %e,
                    "Embedding failed while storing memory"
                );
                MemoryError::Storage(format!(
                    "failed to embed chunk {}: {e}",
                    chunk.chunk_index
                ))
            })?;

            let record = StoredVectorRecord {
                vector,
                vector_type: VectorType::Text,
                document_text: chunk.text.clone(),
                owner_id: self.owner_id.clone(),
                metadata: chunk.metadata.clone(),
            };

            self.store.push(&record).await.map_err(|e| {
                error!(
                    document_id = %document_id,
                    chunk_index = chunk.chunk_index,
                    error = %e,
                    "Vector push failed while storing memory"
                );
                MemoryError::Storage(format!(
                    "failed to store chunk {}: {e}",
                    chunk.chunk_index
                ))
            })?;
        }

        info!(
            document_id = %document_id,
            chunks = chunks.len(),
            "Successfully stored memory"
        );

        Ok(document_id)
    }
}
