//! Core types for the slipscan service.
//!
//! Wire-facing request/response models and the pipeline error type shared
//! by the extraction, analysis, and gateway crates.

pub mod error;
pub mod types;

pub use error::ScanError;
pub use types::{
    ErrorBody, RiskLevel, RiskReport, SaferAccumulator, ScanRequest, ScanResponse, Slip,
};
