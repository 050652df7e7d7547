use thiserror::Error;

/// Errors surfaced by the memory write and read paths.
#[derive(Debug, Error)]
pub enum MemoryError {
    /// A required field was missing or empty.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Embedding or push failed while storing a memory.
    #[error("storage error: {0}")]
    Storage(String),

    /// Embedding, search or chat completion failed while recalling.
    #[error("retrieval error: {0}")]
    Retrieval(String),

    /// The image service did not produce an image.
    #[error("image generation error: {0}")]
    UpstreamImage(String),
}

/// Errors from embedding and vector store operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("query error: {0}")]
    Query(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Errors from the image generation service.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("no image endpoint configured")]
    NotConfigured,

    #[error("image service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("image request failed: {0}")]
    Request(String),
}

/// Errors resolving configuration and credentials.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing credential: set the {0} environment variable")]
    MissingCredential(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
