use serde::{Deserialize, Serialize};

/// Incoming scan request body.
///
/// The image arrives as base64 text, usually with a data-URL prefix
/// (`data:image/png;base64,...`). Absent or empty values are rejected
/// before the pipeline runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    #[serde(default)]
    pub image_base64: Option<String>,
}

/// Structured view of a betting slip recovered from extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slip {
    /// Lines judged to be fixtures, in order of appearance.
    pub fixtures: Vec<String>,
    /// Numeric tokens found anywhere in the text, in order of appearance.
    pub odds: Vec<String>,
    /// Leg count; equals the number of odds tokens, not fixture lines.
    pub leg_count: usize,
}

/// Three-level risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Outcome of scoring a slip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    pub score: u32,
    pub level: RiskLevel,
    /// Exactly one human-readable line per report.
    pub comments: Vec<String>,
}

/// Canned lower-risk accumulator suggestion. Identical for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaferAccumulator {
    pub legs: Vec<String>,
    pub total_odds: String,
    pub comment: String,
}

/// Successful scan response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub raw_text: String,
    pub slip: Slip,
    pub risk: RiskReport,
    pub safer: SaferAccumulator,
}

/// Flat error body used on every failure path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
