//! Text extraction for slip images.
//!
//! The service ships with a placeholder backend that subsamples decoded
//! bytes rather than recognizing text. Everything downstream consumes the
//! `TextExtractor` trait, so a real OCR engine can be dropped in without
//! touching slip extraction or scoring.

use async_trait::async_trait;

pub mod sampled;

pub use sampled::SampledDecodeExtractor;

/// Turns a base64-encoded slip image into text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extract text from the image payload. The payload may carry a
    /// data-URL prefix (`data:image/png;base64,...`).
    async fn extract(&self, image_base64: &str) -> anyhow::Result<String>;
}
