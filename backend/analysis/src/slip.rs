//! Slip extraction from raw extracted text.

use once_cell::sync::Lazy;
use regex::Regex;
use slipscan_core::Slip;

static ODDS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+(\.\d+)?\b").unwrap());

/// Scan `text` for odds tokens and fixture lines.
///
/// Odds are every integer-or-decimal token in order of appearance. A line
/// is a fixture iff it contains `vs` or `VS` as a literal substring; mixed
/// casings like `Vs` do not count. The leg count is the odds count, which
/// the upstream contract uses as a proxy for legs.
pub fn extract_slip(text: &str) -> Slip {
    let odds: Vec<String> = ODDS_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    let fixtures: Vec<String> = text
        .split('\n')
        .filter(|line| line.contains("vs") || line.contains("VS"))
        .map(|line| line.to_string())
        .collect();

    let leg_count = odds.len();
    Slip {
        fixtures,
        odds,
        leg_count,
    }
}
