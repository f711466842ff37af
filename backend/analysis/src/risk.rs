//! Heuristic risk scoring over an extracted slip.

use slipscan_core::{RiskLevel, RiskReport, Slip};

const LOW_COMMENT: &str = "This slip looks relatively safe.";
const MEDIUM_COMMENT: &str = "Some legs are risky, be careful.";
const HIGH_COMMENT: &str = "High risk slip, consider reducing legs.";

/// Score a slip and classify it.
///
/// Leg-count bonuses are additive: more than 6 legs adds 20, more than 10
/// adds a further 40. Each odds token adds 10 above 2.5 or 5 below 1.2.
/// Tokens that fail to parse behave as NaN and add nothing.
pub fn analyze_slip(slip: &Slip) -> RiskReport {
    let mut score: u32 = 0;

    if slip.leg_count > 6 {
        score += 20;
    }
    if slip.leg_count > 10 {
        score += 40;
    }

    for odds in &slip.odds {
        let value: f64 = odds.parse().unwrap_or(f64::NAN);
        if value > 2.5 {
            score += 10;
        }
        if value < 1.2 {
            score += 5;
        }
    }

    let level = classify(score);
    RiskReport {
        score,
        level,
        comments: vec![comment_for(level).to_string()],
    }
}

fn classify(score: u32) -> RiskLevel {
    if score < 30 {
        RiskLevel::Low
    } else if score < 60 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

fn comment_for(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => LOW_COMMENT,
        RiskLevel::Medium => MEDIUM_COMMENT,
        RiskLevel::High => HIGH_COMMENT,
    }
}
