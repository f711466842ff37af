use thiserror::Error;

/// Top-level error type for the scan pipeline.
///
/// The wire contract knows only one error shape, `{"error": <message>}`,
/// so the taxonomy stays deliberately small: the explicit missing-image
/// check, and a catch-all for anything the pipeline throws.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("No image provided")]
    MissingImage,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
