//! BoxImageGenerator -- object-safe dynamic dispatch wrapper for ImageGenerator.

use std::future::Future;
use std::pin::Pin;

use reminisce_types::error::ImageError;
use reminisce_types::image::{GeneratedImage, ImageRequest};

use super::generator::ImageGenerator;

/// Object-safe version of [`ImageGenerator`] with boxed futures.
pub trait ImageGeneratorDyn: Send + Sync {
    fn generate_boxed<'a>(
        &'a self,
        request: &'a ImageRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GeneratedImage, ImageError>> + Send + 'a>>;
}

impl<T: ImageGenerator> ImageGeneratorDyn for T {
    fn generate_boxed<'a>(
        &'a self,
        request: &'a ImageRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GeneratedImage, ImageError>> + Send + 'a>> {
        Box::pin(self.generate(request))
    }
}

/// Type-erased image generator for runtime selection and test doubles.
pub struct BoxImageGenerator {
    inner: Box<dyn ImageGeneratorDyn + Send + Sync>,
}

impl BoxImageGenerator {
    /// Wrap a concrete `ImageGenerator` in a type-erased box.
    pub fn new<T: ImageGenerator + 'static>(generator: T) -> Self {
        Self {
            inner: Box::new(generator),
        }
    }

    pub async fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, ImageError> {
        self.inner.generate_boxed(request).await
    }
}
