//! Slip analysis: turns extracted text into a structured slip, scores it,
//! and produces the canned safer-accumulator suggestion.

pub mod risk;
pub mod safer;
pub mod slip;

pub use risk::analyze_slip;
pub use safer::generate_safer_accumulator;
pub use slip::extract_slip;
