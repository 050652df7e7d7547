//! In-process doubles for router tests.
//!
//! The vector store keeps pushed records in memory and returns them in
//! insertion order; the chat model echoes the prompt it was given, so a
//! recollection always mentions the stored memory text.

use std::sync::{Arc, Mutex};

use reminisce_core::image::box_generator::BoxImageGenerator;
use reminisce_core::image::generator::ImageGenerator;
use reminisce_core::llm::box_provider::BoxChatModel;
use reminisce_core::llm::provider::ChatModel;
use reminisce_core::memory::box_embedder::BoxEmbedder;
use reminisce_core::memory::box_vector::BoxVectorStore;
use reminisce_core::memory::chunker::Chunker;
use reminisce_core::memory::embedder::Embedder;
use reminisce_core::memory::reader::MemoryReader;
use reminisce_core::memory::vector::VectorStore;
use reminisce_core::memory::writer::MemoryWriter;
use reminisce_types::config::ChunkingConfig;
use reminisce_types::error::{ImageError, RepositoryError};
use reminisce_types::image::{GeneratedImage, ImageRequest};
use reminisce_types::llm::{ChatRequest, ChatResponse, LlmError};
use reminisce_types::memory::{
    Metadata, RetrievedMemory, StoredVectorRecord, VectorQuery, VectorType,
};

use crate::state::AppState;

/// Failure switches for the doubles.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestServices {
    pub fail_push: bool,
    pub fail_search: bool,
    pub fail_image: bool,
}

/// Handles into the doubles' recorded state.
#[derive(Clone)]
pub struct TestHandles {
    pub records: Arc<Mutex<Vec<StoredVectorRecord>>>,
}

impl TestHandles {
    /// Put a record straight into the store, bypassing the writer.
    pub fn seed(&self, text: &str) {
        self.records.lock().unwrap().push(StoredVectorRecord {
            vector: vec![1.0],
            vector_type: VectorType::Text,
            document_text: text.to_string(),
            owner_id: "test-account".to_string(),
            metadata: Metadata::new(),
        });
    }
}

struct LengthEmbedder;

impl Embedder for LengthEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, RepositoryError> {
        Ok(vec![text.len() as f32, 1.0])
    }

    fn model_name(&self) -> &str {
        "length"
    }
}

struct InMemoryStore {
    records: Arc<Mutex<Vec<StoredVectorRecord>>>,
    fail_push: bool,
    fail_search: bool,
}

impl VectorStore for InMemoryStore {
    async fn push(&self, record: &StoredVectorRecord) -> Result<(), RepositoryError> {
        if self.fail_push {
            return Err(RepositoryError::Connection("vector store offline".into()));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn search(&self, query: &VectorQuery) -> Result<Vec<RetrievedMemory>, RepositoryError> {
        if self.fail_search {
            return Err(RepositoryError::Connection("vector store offline".into()));
        }
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .take(query.top_k)
            .map(|r| RetrievedMemory {
                document_text: r.document_text.clone(),
                metadata: r.metadata.clone(),
                score: Some(1.0),
            })
            .collect())
    }
}

struct EchoChat;

impl ChatModel for EchoChat {
    fn name(&self) -> &str {
        "echo"
    }

    async fn chat_complete(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        let prompt = request
            .messages
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        Ok(ChatResponse {
            answer: format!("You remember this: {prompt}"),
        })
    }
}

struct StubImages {
    fail: bool,
}

impl ImageGenerator for StubImages {
    async fn generate(&self, _request: &ImageRequest) -> Result<GeneratedImage, ImageError> {
        if self.fail {
            return Err(ImageError::Status {
                status: 503,
                body: "model loading".into(),
            });
        }
        Ok(GeneratedImage {
            bytes: b"jpeg".to_vec(),
            mime_type: "image/jpeg".into(),
        })
    }
}

/// Build an [`AppState`] over in-process doubles.
pub fn test_state(services: TestServices) -> (AppState, TestHandles) {
    let records = Arc::new(Mutex::new(Vec::new()));
    let embedder = Arc::new(BoxEmbedder::new(LengthEmbedder));
    let store = Arc::new(BoxVectorStore::new(InMemoryStore {
        records: records.clone(),
        fail_push: services.fail_push,
        fail_search: services.fail_search,
    }));

    let writer = MemoryWriter::new(
        Chunker::new(ChunkingConfig::default()).unwrap(),
        embedder.clone(),
        store.clone(),
        "test-account",
    );
    let reader = MemoryReader::new(
        embedder,
        store,
        Arc::new(BoxChatModel::new(EchoChat)),
        Arc::new(BoxImageGenerator::new(StubImages {
            fail: services.fail_image,
        })),
        "test-account",
    );

    (AppState::new(writer, reader), TestHandles { records })
}
