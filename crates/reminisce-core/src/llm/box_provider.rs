//! BoxChatModel -- object-safe dynamic dispatch wrapper for ChatModel.

use std::future::Future;
use std::pin::Pin;

use reminisce_types::llm::{ChatRequest, ChatResponse, LlmError};

use super::provider::ChatModel;

/// Object-safe version of [`ChatModel`] with boxed futures.
pub trait ChatModelDyn: Send + Sync {
    fn name(&self) -> &str;

    fn chat_complete_boxed<'a>(
        &'a self,
        request: &'a ChatRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ChatResponse, LlmError>> + Send + 'a>>;
}

impl<T: ChatModel> ChatModelDyn for T {
    fn name(&self) -> &str {
        ChatModel::name(self)
    }

    fn chat_complete_boxed<'a>(
        &'a self,
        request: &'a ChatRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ChatResponse, LlmError>> + Send + 'a>> {
        Box::pin(self.chat_complete(request))
    }
}

/// Type-erased chat model for runtime selection and test doubles.
pub struct BoxChatModel {
    inner: Box<dyn ChatModelDyn + Send + Sync>,
}

impl BoxChatModel {
    /// Wrap a concrete `ChatModel` in a type-erased box.
    pub fn new<T: ChatModel + 'static>(model: T) -> Self {
        Self {
            inner: Box::new(model),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Send a completion request and receive the full answer.
    pub async fn chat_complete(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        self.inner.chat_complete_boxed(request).await
    }
}
