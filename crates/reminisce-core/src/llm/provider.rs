//! ChatModel trait definition.
//!
//! The hosted chat-completion model is an opaque collaborator: a list of
//! role-tagged messages goes in, a single answer string comes out.

use reminisce_types::llm::{ChatRequest, ChatResponse, LlmError};

/// Trait for chat-completion backends (ModelLake, etc.).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in reminisce-infra.
pub trait ChatModel: Send + Sync {
    /// Human-readable provider name (e.g., "modellake").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full answer.
    fn chat_complete(
        &self,
        request: &ChatRequest,
    ) -> impl std::future::Future<Output = Result<ChatResponse, LlmError>> + Send;
}
