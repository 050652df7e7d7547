//! Text-to-image generation.
//!
//! [`generator::ImageGenerator`] is the port for the hosted image model.
//! Generated bytes are handed to callers as `data:` URIs.

pub mod box_generator;
pub mod generator;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use reminisce_types::image::GeneratedImage;

/// Encode an image as a `data:<mime>;base64,<payload>` URI.
pub fn to_data_uri(image: &GeneratedImage) -> String {
    format!(
        "data:{};base64,{}",
        image.mime_type,
        STANDARD.encode(&image.bytes)
    )
}
