//! ModelLakeClient: chat completion over Groclake ModelLake.

use reminisce_core::llm::provider::ChatModel;
use reminisce_types::llm::{ChatRequest, ChatResponse, LlmError};

use super::client::GroclakeClient;

const CHAT_COMPLETE_PATH: &str = "/model/chat/complete";

pub struct ModelLakeClient {
    client: GroclakeClient,
}

impl ModelLakeClient {
    pub fn new(client: GroclakeClient) -> Self {
        Self { client }
    }
}

impl ChatModel for ModelLakeClient {
    fn name(&self) -> &str {
        "groclake-modellake"
    }

    async fn chat_complete(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        let response: ChatResponse = self.client.post_json(CHAT_COMPLETE_PATH, request).await?;
        if response.answer.trim().is_empty() {
            return Err(LlmError::Provider {
                message: "chat completion returned an empty answer".to_string(),
            });
        }
        Ok(response)
    }
}
