//! Memory reader: retrieve, narrate, illustrate.
//!
//! Recall never fails past input validation. Embedding, search and chat
//! failures are folded into the recollection text, and image failures into
//! `image: None`, so a chat turn is never broken by an upstream outage.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use reminisce_types::error::{ImageError, MemoryError};
use reminisce_types::image::ImageParameters;
use reminisce_types::memory::{Recollection, VectorQuery, VectorType};

use super::box_embedder::BoxEmbedder;
use super::box_vector::BoxVectorStore;
use super::prompt::{NO_MEMORIES_MESSAGE, build_chat_request, build_image_request};
use crate::image::box_generator::BoxImageGenerator;
use crate::image::to_data_uri;
use crate::llm::box_provider::BoxChatModel;

/// Default number of memories retrieved per query.
pub const DEFAULT_TOP_K: usize = 5;

/// Turns a query into a recollection using the stored memories.
pub struct MemoryReader {
    embedder: Arc<BoxEmbedder>,
    store: Arc<BoxVectorStore>,
    chat: Arc<BoxChatModel>,
    images: Arc<BoxImageGenerator>,
    owner_id: String,
    top_k: usize,
    image_parameters: ImageParameters,
}

impl MemoryReader {
    pub fn new(
        embedder: Arc<BoxEmbedder>,
        store: Arc<BoxVectorStore>,
        chat: Arc<BoxChatModel>,
        images: Arc<BoxImageGenerator>,
        owner_id: impl Into<String>,
    ) -> Self {
        Self {
            embedder,
            store,
            chat,
            images,
            owner_id: owner_id.into(),
            top_k: DEFAULT_TOP_K,
            image_parameters: ImageParameters::default(),
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_image_parameters(mut self, parameters: ImageParameters) -> Self {
        self.image_parameters = parameters;
        self
    }

    /// Recall memories relevant to `query`.
    ///
    /// Returns `Err` only for an empty query.
    #[tracing::instrument(
        name = "recall_memory",
        skip(self, query),
        fields(top_k = self.top_k, chat_model = self.chat.name())
    )]
    pub async fn recall(&self, query: &str) -> Result<Recollection, MemoryError> {
        if query.trim().is_empty() {
            return Err(MemoryError::InvalidInput("query is empty".to_string()));
        }

        let text = match self.narrate(query).await {
            Ok(Some(text)) => text,
            Ok(None) => return Ok(Recollection::text_only(NO_MEMORIES_MESSAGE)),
            Err(e) => {
                error!(error = %e, "Error retrieving memory response");
                return Ok(Recollection::text_only(e.to_string()));
            }
        };

        let image = match self.illustrate(&text).await {
            Ok(uri) => Some(uri),
            Err(e) => {
                warn!(error = %e, "Recollection delivered without an image");
                None
            }
        };

        Ok(Recollection { text, image })
    }

    /// Embed, search and ask the chat model. `None` means nothing was found.
    async fn narrate(&self, query: &str) -> Result<Option<String>, MemoryError> {
        let vector = self
            .embedder
            .embed(query)
            .await
            .map_err(|e| MemoryError::Retrieval(format!("failed to embed query: {e}")))?;

        let search = VectorQuery {
            vector,
            owner_id: self.owner_id.clone(),
            query_text: query.to_string(),
            vector_type: VectorType::Text,
            top_k: self.top_k,
        };
        let hits = self
            .store
            .search(&search)
            .await
            .map_err(|e| MemoryError::Retrieval(format!("memory search failed: {e}")))?;

        info!(hits = hits.len(), "Memory search complete");
        if hits.is_empty() {
            return Ok(None);
        }

        let request = build_chat_request(query, &hits);
        let response = self
            .chat
            .chat_complete(&request)
            .await
            .map_err(|e| MemoryError::Retrieval(format!("chat completion failed: {e}")))?;

        Ok(Some(response.answer.trim().to_string()))
    }

    async fn illustrate(&self, recollection: &str) -> Result<String, MemoryError> {
        let request = build_image_request(recollection, &self.image_parameters);
        match self.images.generate(&request).await {
            Ok(image) => Ok(to_data_uri(&image)),
            Err(ImageError::NotConfigured) => {
                debug!("Image generation disabled");
                Err(MemoryError::UpstreamImage(ImageError::NotConfigured.to_string()))
            }
            Err(e) => Err(MemoryError::UpstreamImage(e.to_string())),
        }
    }
}
