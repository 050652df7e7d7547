//! Embedder trait for text-to-vector conversion.
//!
//! Defines the interface for embedding text into vectors for similarity
//! search. Implementations (e.g., the VectorLake client) live in reminisce-infra.

use reminisce_types::error::RepositoryError;

/// Trait for converting text into an embedding vector.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Identical input must yield a vector of the same length and ordering.
pub trait Embedder: Send + Sync {
    /// Embed a single text into a vector.
    fn embed(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<Vec<f32>, RepositoryError>> + Send;

    /// The model or service name producing the embeddings.
    fn model_name(&self) -> &str;
}
