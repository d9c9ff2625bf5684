use crate::model::card::CardKind;
use crate::model::counts::CardCounts;

/// Cards currently held, kept in the order they were picked up. The order
/// matters: undoing a draw removes the first matching occurrence.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<CardKind>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: Vec<CardKind>) -> Self {
        Self { cards }
    }

    pub fn add(&mut self, kind: CardKind) {
        self.cards.push(kind);
    }

    pub fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.cards.len() {
            return false;
        }
        self.cards.remove(index);
        true
    }

    pub fn remove_first(&mut self, kind: CardKind) -> bool {
        if let Some(index) = self.cards.iter().position(|&c| c == kind) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn counts(&self) -> CardCounts {
        let mut counts = CardCounts::empty();
        for &kind in &self.cards {
            counts.add(kind, 1);
        }
        counts
    }

    pub fn contains(&self, kind: CardKind) -> bool {
        self.cards.contains(&kind)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[CardKind] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardKind> {
        self.cards.iter()
    }
}
