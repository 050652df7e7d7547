//! Scriptable collaborator doubles for writer and reader tests.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use reminisce_types::error::{ImageError, RepositoryError};
use reminisce_types::image::{GeneratedImage, ImageRequest};
use reminisce_types::llm::{ChatRequest, ChatResponse, LlmError};
use reminisce_types::memory::{RetrievedMemory, StoredVectorRecord, VectorQuery};

use crate::image::generator::ImageGenerator;
use crate::llm::provider::ChatModel;
use crate::memory::embedder::Embedder;
use crate::memory::vector::VectorStore;

/// Embedder returning a vector derived from text length; optionally fails
/// on the n-th call (zero-based).
pub struct MockEmbedder {
    pub calls: Arc<AtomicUsize>,
    pub fail_on_call: Option<usize>,
}

impl MockEmbedder {
    pub fn ok() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            fail_on_call: None,
        }
    }

    pub fn failing_on(call: usize) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            fail_on_call: Some(call),
        }
    }
}

impl Embedder for MockEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, RepositoryError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on_call == Some(n) {
            return Err(RepositoryError::Connection("embedding service down".to_string()));
        }
        Ok(vec![text.len() as f32, 0.5, 1.0])
    }

    fn model_name(&self) -> &str {
        "mock-embedder"
    }
}

/// Vector store recording pushes and serving scripted search hits.
pub struct MockVectorStore {
    pub pushed: Arc<Mutex<Vec<StoredVectorRecord>>>,
    pub searches: Arc<Mutex<Vec<VectorQuery>>>,
    pub hits: Vec<RetrievedMemory>,
    pub fail_push_on_call: Option<usize>,
    pub fail_search: bool,
}

impl MockVectorStore {
    pub fn with_hits(hits: Vec<RetrievedMemory>) -> Self {
        Self {
            pushed: Arc::new(Mutex::new(Vec::new())),
            searches: Arc::new(Mutex::new(Vec::new())),
            hits,
            fail_push_on_call: None,
            fail_search: false,
        }
    }

    pub fn empty() -> Self {
        Self::with_hits(Vec::new())
    }
}

impl VectorStore for MockVectorStore {
    async fn push(&self, record: &StoredVectorRecord) -> Result<(), RepositoryError> {
        let mut pushed = self.pushed.lock().unwrap();
        if self.fail_push_on_call == Some(pushed.len()) {
            return Err(RepositoryError::Query("push rejected".to_string()));
        }
        pushed.push(record.clone());
        Ok(())
    }

    async fn search(&self, query: &VectorQuery) -> Result<Vec<RetrievedMemory>, RepositoryError> {
        self.searches.lock().unwrap().push(query.clone());
        if self.fail_search {
            return Err(RepositoryError::Connection("search timed out".to_string()));
        }
        Ok(self.hits.iter().take(query.top_k).cloned().collect())
    }
}

/// Chat model answering with a fixed string and recording requests.
pub struct MockChatModel {
    pub requests: Arc<Mutex<Vec<ChatRequest>>>,
    pub answer: Result<String, String>,
}

impl MockChatModel {
    pub fn answering(answer: &str) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            answer: Ok(answer.to_string()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            answer: Err(message.to_string()),
        }
    }
}

impl ChatModel for MockChatModel {
    fn name(&self) -> &str {
        "mock-chat"
    }

    async fn chat_complete(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.answer {
            Ok(answer) => Ok(ChatResponse {
                answer: answer.clone(),
            }),
            Err(message) => Err(LlmError::Provider {
                message: message.clone(),
            }),
        }
    }
}

/// Image generator returning fixed bytes or a scripted HTTP failure.
pub struct MockImageGenerator {
    pub requests: Arc<Mutex<Vec<ImageRequest>>>,
    pub status: u16,
}

impl MockImageGenerator {
    pub fn ok() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            status: 200,
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            status,
        }
    }
}

impl ImageGenerator for MockImageGenerator {
    async fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, ImageError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.status != 200 {
            return Err(ImageError::Status {
                status: self.status,
                body: "model is loading".to_string(),
            });
        }
        Ok(GeneratedImage {
            bytes: b"jpeg".to_vec(),
            mime_type: "image/jpeg".to_string(),
        })
    }
}

pub fn hit(text: &str) -> RetrievedMemory {
    RetrievedMemory {
        document_text: text.to_string(),
        metadata: Default::default(),
        score: None,
    }
}
