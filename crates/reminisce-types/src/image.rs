//! Image generation request/response types.

use serde::{Deserialize, Serialize};

/// Sampling parameters forwarded to the text-to-image model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageParameters {
    pub height: u32,
    pub width: u32,
    pub guidance_scale: f32,
    pub num_inference_steps: u32,
}

impl Default for ImageParameters {
    fn default() -> Self {
        Self {
            height: 1024,
            width: 1024,
            guidance_scale: 3.5,
            num_inference_steps: 50,
        }
    }
}

/// Body of an image generation request: `{inputs, parameters}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRequest {
    pub inputs: String,
    pub parameters: ImageParameters,
}

/// Raw image bytes returned by the image service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}
