use crate::advisor::stats::CardStat;
use crate::model::hand::Hand;

/// Danger above this many percent flips the advice to passing.
pub const WARN_THRESHOLD_PERCENT: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Safe,
    Warn,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Recommendation::Safe => "You can draw",
            Recommendation::Warn => "Better pass",
        }
    }
}

/// Chance that the next draw duplicates a number held exactly once. Kinds
/// already held twice carry no new first-duplication risk and are skipped.
pub fn danger_percent(hand: &Hand, number_stats: &[CardStat]) -> f64 {
    let held = hand.counts();
    number_stats
        .iter()
        .filter(|stat| held.count(stat.card) == 1)
        .map(|stat| stat.chance_percent)
        .sum()
}

pub fn recommend(danger_percent: f64) -> Recommendation {
    if danger_percent > WARN_THRESHOLD_PERCENT {
        Recommendation::Warn
    } else {
        Recommendation::Safe
    }
}
