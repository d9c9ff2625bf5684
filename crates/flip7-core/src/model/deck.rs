use crate::model::card::CardKind;
use crate::model::counts::CardCounts;

/// The pool of undrawn cards, tracked only as remaining counts per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    remaining: CardCounts,
}

impl Deck {
    pub const fn with_defaults() -> Self {
        Self {
            remaining: CardCounts::defaults(),
        }
    }

    pub const fn empty() -> Self {
        Self {
            remaining: CardCounts::empty(),
        }
    }

    pub const fn from_counts(counts: CardCounts) -> Self {
        Self { remaining: counts }
    }

    /// Size of a full default deck.
    pub const fn default_total() -> u64 {
        let mut total = 0u64;
        let mut i = 0;
        while i < CardKind::COUNT {
            total += CardKind::CATALOG[i].default_count() as u64;
            i += 1;
        }
        total
    }

    /// Takes one copy out of the deck; refused when the kind is exhausted.
    pub fn draw_one(&mut self, kind: CardKind) -> bool {
        let left = self.remaining.count(kind);
        if left == 0 {
            return false;
        }
        self.remaining.set(kind, left - 1);
        true
    }

    pub fn return_one(&mut self, kind: CardKind) {
        self.remaining.add(kind, 1);
    }

    pub fn return_many(&mut self, counts: &CardCounts) {
        self.remaining.add_all(counts);
    }

    /// Negative counts are floored at zero rather than rejected.
    pub fn set_count(&mut self, kind: CardKind, count: i64) {
        self.remaining
            .set(kind, count.clamp(0, u32::MAX as i64) as u32);
    }

    pub fn restore_defaults(&mut self) {
        self.remaining = CardCounts::defaults();
    }

    pub fn remaining(&self, kind: CardKind) -> u32 {
        self.remaining.count(kind)
    }

    pub fn total_remaining(&self) -> u64 {
        self.remaining.total()
    }

    pub fn counts(&self) -> &CardCounts {
        &self.remaining
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::with_defaults()
    }
}
