use crate::model::card::CardKind;

/// Per-kind card tallies, indexed by catalog position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardCounts {
    counts: [u32; CardKind::COUNT],
}

impl CardCounts {
    pub const fn empty() -> Self {
        Self {
            counts: [0; CardKind::COUNT],
        }
    }

    /// The printed deck: one zero, each number as many copies as its face
    /// value, one of each bonus, three of each action card.
    pub const fn defaults() -> Self {
        let mut counts = [0u32; CardKind::COUNT];
        let mut i = 0;
        while i < CardKind::COUNT {
            counts[i] = CardKind::CATALOG[i].default_count();
            i += 1;
        }
        Self { counts }
    }

    pub fn count(&self, kind: CardKind) -> u32 {
        self.counts[kind.index()]
    }

    pub fn set(&mut self, kind: CardKind, count: u32) {
        self.counts[kind.index()] = count;
    }

    pub fn add(&mut self, kind: CardKind, amount: u32) {
        let slot = &mut self.counts[kind.index()];
        *slot = slot.saturating_add(amount);
    }

    pub fn add_all(&mut self, other: &CardCounts) {
        for kind in CardKind::CATALOG {
            self.add(kind, other.count(kind));
        }
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&count| count as u64).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CardKind, u32)> + '_ {
        CardKind::CATALOG
            .into_iter()
            .map(|kind| (kind, self.count(kind)))
    }
}
