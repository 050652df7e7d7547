//! BoxVectorStore -- object-safe dynamic dispatch wrapper for VectorStore.
//!
//! Same blanket-impl pattern as [`super::box_embedder::BoxEmbedder`].

use std::future::Future;
use std::pin::Pin;

use reminisce_types::error::RepositoryError;
use reminisce_types::memory::{RetrievedMemory, StoredVectorRecord, VectorQuery};

use super::vector::VectorStore;

/// Object-safe version of [`VectorStore`] with boxed futures.
pub trait VectorStoreDyn: Send + Sync {
    fn push_boxed<'a>(
        &'a self,
        record: &'a StoredVectorRecord,
    ) -> Pin<Box<dyn Future<Output = Result<(), RepositoryError>> + Send + 'a>>;

    fn search_boxed<'a>(
        &'a self,
        query: &'a VectorQuery,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RetrievedMemory>, RepositoryError>> + Send + 'a>>;
}

impl<T: VectorStore> VectorStoreDyn for T {
    fn push_boxed<'a>(
        &'a self,
        record: &'a StoredVectorRecord,
    ) -> Pin<Box<dyn Future<Output = Result<(), RepositoryError>> + Send + 'a>> {
        Box::pin(self.push(record))
    }

    fn search_boxed<'a>(
        &'a self,
        query: &'a VectorQuery,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RetrievedMemory>, RepositoryError>> + Send + 'a>>
    {
        Box::pin(self.search(query))
    }
}

/// Type-erased vector store for runtime selection and test doubles.
pub struct BoxVectorStore {
    inner: Box<dyn VectorStoreDyn + Send + Sync>,
}

impl BoxVectorStore {
    /// Wrap a concrete `VectorStore` in a type-erased box.
    pub fn new<T: VectorStore + 'static>(store: T) -> Self {
        Self {
            inner: Box::new(store),
        }
    }

    /// Persist a single record.
    pub async fn push(&self, record: &StoredVectorRecord) -> Result<(), RepositoryError> {
        self.inner.push_boxed(record).await
    }

    /// Top-k similarity search.
    pub async fn search(&self, query: &VectorQuery) -> Result<Vec<RetrievedMemory>, RepositoryError> {
        self.inner.search_boxed(query).await
    }
}
