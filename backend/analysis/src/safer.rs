//! Canned safer-accumulator suggestion.

use slipscan_core::SaferAccumulator;

/// Build the fixed lower-risk suggestion.
///
/// Pure constant generator: no inputs, no randomness, identical output on
/// every call. The markets favor high-probability outcomes over straight
/// match winners.
pub fn generate_safer_accumulator() -> SaferAccumulator {
    SaferAccumulator {
        legs: vec![
            "Over 1.5 Goals – PSL Match".to_string(),
            "Both Teams to Score – Bundesliga".to_string(),
            "Double Chance Home/Draw – LaLiga".to_string(),
            "Over 0.5 HT Goals – EPL".to_string(),
            "Under 4.5 Goals – Serie A".to_string(),
        ],
        total_odds: "4.20 – 6.00".to_string(),
        comment: "These markets are statistically safer and avoid straight wins.".to_string(),
    }
}
