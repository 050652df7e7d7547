//! BoxEmbedder -- object-safe dynamic dispatch wrapper for Embedder.
//!
//! 1. Define an object-safe `EmbedderDyn` trait with boxed futures
//! 2. Blanket-impl `EmbedderDyn` for all `T: Embedder`
//! 3. `BoxEmbedder` wraps `Box<dyn EmbedderDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use reminisce_types::error::RepositoryError;

use super::embedder::Embedder;

/// Object-safe version of [`Embedder`] with boxed futures.
pub trait EmbedderDyn: Send + Sync {
    fn embed_boxed<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<f32>, RepositoryError>> + Send + 'a>>;

    fn model_name_dyn(&self) -> &str;
}

impl<T: Embedder> EmbedderDyn for T {
    fn embed_boxed<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<f32>, RepositoryError>> + Send + 'a>> {
        Box::pin(self.embed(text))
    }

    fn model_name_dyn(&self) -> &str {
        self.model_name()
    }
}

/// Type-erased embedder for runtime selection and test doubles.
///
/// Since `Embedder` uses RPITIT, it cannot be used as a trait object directly.
pub struct BoxEmbedder {
    inner: Box<dyn EmbedderDyn + Send + Sync>,
}

impl BoxEmbedder {
    /// Wrap a concrete `Embedder` in a type-erased box.
    pub fn new<T: Embedder + 'static>(embedder: T) -> Self {
        Self {
            inner: Box::new(embedder),
        }
    }

    /// Embed a single text into a vector.
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>, RepositoryError> {
        self.inner.embed_boxed(text).await
    }

    /// The model or service name producing the embeddings.
    pub fn model_name(&self) -> &str {
        self.inner.model_name_dyn()
    }
}
