//! Placeholder extractor: decode the payload and subsample its bytes.

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use tracing::debug;

use crate::TextExtractor;

/// Distance between sampled bytes. Index 0 is always sampled, so the
/// output length is `ceil(decoded_len / 50)`.
const SAMPLE_STRIDE: usize = 50;

/// Stub extraction backend.
///
/// Strips an optional data-URL prefix, base64-decodes the remainder, and
/// keeps every 50th byte (interpreted as a single-byte character). This is
/// not text recognition; it exists to keep the pipeline shape stable until
/// a real OCR backend replaces it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampledDecodeExtractor;

impl SampledDecodeExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextExtractor for SampledDecodeExtractor {
    async fn extract(&self, image_base64: &str) -> anyhow::Result<String> {
        // Everything up to and including the first comma is the data-URL
        // scheme marker. A payload without one is malformed for this
        // backend and surfaces through the pipeline's error boundary.
        let (_, encoded) = image_base64
            .split_once(',')
            .ok_or_else(|| anyhow!("image payload has no data-url separator"))?;

        let bytes = general_purpose::STANDARD
            .decode(encoded)
            .context("invalid base64 image payload")?;

        let text: String = bytes
            .iter()
            .step_by(SAMPLE_STRIDE)
            .map(|&b| b as char)
            .collect();

        debug!(
            decoded_bytes = bytes.len(),
            sampled_chars = text.len(),
            "sampled decoded image payload"
        );
        Ok(text)
    }
}
