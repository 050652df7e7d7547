//! Vector store trait.
//!
//! The store is an external collaborator that owns every persisted record;
//! nothing is cached or indexed locally.

use reminisce_types::error::RepositoryError;
use reminisce_types::memory::{RetrievedMemory, StoredVectorRecord, VectorQuery};

/// Trait for an append-only vector store with top-k similarity search.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Implementations live in reminisce-infra.
pub trait VectorStore: Send + Sync {
    /// Persist a single record. One call per chunk; no batching.
    fn push(
        &self,
        record: &StoredVectorRecord,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Return up to `query.top_k` records owned by `query.owner_id`,
    /// ordered by descending similarity.
    fn search(
        &self,
        query: &VectorQuery,
    ) -> impl std::future::Future<Output = Result<Vec<RetrievedMemory>, RepositoryError>> + Send;
}
