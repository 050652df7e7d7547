//! ImageGenerator trait definition.

use reminisce_types::error::ImageError;
use reminisce_types::image::{GeneratedImage, ImageRequest};

/// Trait for text-to-image backends.
///
/// Any non-success response from the backend is an [`ImageError`]; callers
/// on the recall path degrade it to "no image".
pub trait ImageGenerator: Send + Sync {
    fn generate(
        &self,
        request: &ImageRequest,
    ) -> impl std::future::Future<Output = Result<GeneratedImage, ImageError>> + Send;
}
