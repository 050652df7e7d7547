//! Prompt construction for recollections.
//!
//! The chat model receives two messages: a fixed persona instruction and a
//! user message quoting the question and the retrieved memories. The
//! image model receives the chat answer wrapped in a visualization prompt.

use reminisce_types::image::{ImageParameters, ImageRequest};
use reminisce_types::llm::{ChatMessage, ChatRequest};
use reminisce_types::memory::RetrievedMemory;

/// Returned verbatim when the vector store has nothing for a query.
pub const NO_MEMORIES_MESSAGE: &str =
    "I don't have any memories to share right now. Please add some memories first.";

/// Persona and tone for every recollection.
pub const RECOLLECTION_SYSTEM_PROMPT: &str = "You are an AI meant to help Alzheimer's patients remember their memories. \
Be kind, considerate, and detailed in your responses. Make the memories feel vivid and real.";

const IMAGE_PROMPT_PREFIX: &str = "A detailed, vivid visualization of this memory: ";

/// Join retrieved memory text in similarity order, separated by blank lines.
pub fn join_memories(hits: &[RetrievedMemory]) -> String {
    hits.iter()
        .map(|h| h.document_text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Build the user message quoting the question and the memories to recall.
pub fn build_user_prompt(query: &str, hits: &[RetrievedMemory]) -> String {
    format!(
        "The user is asking: \"{query}\"\n\n\
         Here is the memory to recall: \"{memories}\"\n\n\
         Please respond with as much detail as possible, making them feel like they are living the memory again.\n\
         Respond in second person and make it vivid.\n\
         Do not mention being an AI or reference the context.\n\
         Only use the information provided - do not make up any false details.",
        memories = join_memories(hits),
    )
}

/// Build the two-message chat request for a query and its search hits.
pub fn build_chat_request(query: &str, hits: &[RetrievedMemory]) -> ChatRequest {
    ChatRequest {
        messages: vec![
            ChatMessage::system(RECOLLECTION_SYSTEM_PROMPT),
            ChatMessage::user(build_user_prompt(query, hits)),
        ],
    }
}

/// Build the image request illustrating a recollection.
pub fn build_image_request(recollection: &str, parameters: &ImageParameters) -> ImageRequest {
    ImageRequest {
        inputs: format!("{IMAGE_PROMPT_PREFIX}{recollection}"),
        parameters: parameters.clone(),
    }
}
