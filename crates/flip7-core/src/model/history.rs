use crate::model::card::CardKind;
use crate::model::counts::CardCounts;
use crate::model::deck::Deck;
use crate::model::hand::Hand;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckAction {
    Played,
    Drawn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub action: DeckAction,
    pub card: CardKind,
}

/// Most-recent-first log of the deck mutations that can be undone.
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    entries: VecDeque<HistoryEntry>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    pub fn record(&mut self, action: DeckAction, card: CardKind) {
        self.entries.push_front(HistoryEntry { action, card });
    }

    /// Reverts the most recent entry. A drawn card is credited back to the
    /// deck even when the hand no longer holds a copy (it may have been
    /// returned or removed by hand since).
    pub fn undo_last(&mut self, deck: &mut Deck, hand: &mut Hand) -> bool {
        let Some(entry) = self.entries.pop_front() else {
            return false;
        };
        match entry.action {
            DeckAction::Played => deck.return_one(entry.card),
            DeckAction::Drawn => {
                deck.return_one(entry.card);
                let _ = hand.remove_first(entry.card);
            }
        }
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Played copies not yet undone, per kind.
    pub fn played_counts(&self) -> CardCounts {
        let mut counts = CardCounts::empty();
        for entry in &self.entries {
            if entry.action == DeckAction::Played {
                counts.add(entry.card, 1);
            }
        }
        counts
    }
}
