use crate::model::card::CardKind;
use crate::model::deck::Deck;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStat {
    pub card: CardKind,
    pub remaining: u32,
    pub chance_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatOrder {
    /// Descending draw chance; equal chances stay in catalog order.
    ByChance,
    /// Fixed catalog order.
    ByCatalog,
}

/// One row per catalog kind, freshly allocated; the deck is never reordered.
pub fn deck_stats(deck: &Deck, order: StatOrder) -> Vec<CardStat> {
    let total = deck.total_remaining();
    let mut stats: Vec<CardStat> = CardKind::CATALOG
        .into_iter()
        .map(|card| {
            let remaining = deck.remaining(card);
            let chance_percent = if total > 0 {
                remaining as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            CardStat {
                card,
                remaining,
                chance_percent,
            }
        })
        .collect();

    if order == StatOrder::ByChance {
        // Stable sort keeps the catalog tie-break deterministic.
        stats.sort_by(|a, b| b.chance_percent.total_cmp(&a.chance_percent));
    }
    stats
}

/// Only the numeric kinds 1..12; the zero card and specials never bust.
pub fn number_stats(stats: &[CardStat]) -> Vec<CardStat> {
    stats
        .iter()
        .copied()
        .filter(|stat| stat.card.is_number())
        .collect()
}

/// The `k` numeric kinds most likely to come up next, best first,
/// regardless of any display ordering preference.
pub fn top_draws(deck: &Deck, k: usize) -> Vec<CardStat> {
    let by_chance = deck_stats(deck, StatOrder::ByChance);
    let mut top = number_stats(&by_chance);
    top.truncate(k);
    top
}
