use crate::advisor::{self, CardStat, Recommendation, StatOrder};
use crate::model::card::CardKind;
use crate::model::deck::Deck;
use crate::model::hand::Hand;
use crate::model::history::{ActionLog, DeckAction};

/// One tracked game: the deck, the hand, the undo log, and the display
/// preference. Sessions are independent; any number can coexist.
#[derive(Debug, Clone)]
pub struct Session {
    deck: Deck,
    hand: Hand,
    history: ActionLog,
    sort_by_probability: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::with_deck(Deck::with_defaults())
    }

    pub fn with_deck(deck: Deck) -> Self {
        Self::from_parts(deck, Hand::new(), ActionLog::new(), true)
    }

    pub fn from_parts(
        deck: Deck,
        hand: Hand,
        history: ActionLog,
        sort_by_probability: bool,
    ) -> Self {
        Self {
            deck,
            hand,
            history,
            sort_by_probability,
        }
    }

    /// Takes one copy out of the deck and logs it as played.
    pub fn play_card(&mut self, card: CardKind) -> bool {
        if !self.deck.draw_one(card) {
            return false;
        }
        self.history.record(DeckAction::Played, card);
        true
    }

    /// Moves one copy from the deck into the hand and logs the draw.
    pub fn draw_to_hand(&mut self, card: CardKind) -> bool {
        if !self.deck.draw_one(card) {
            return false;
        }
        self.hand.add(card);
        self.history.record(DeckAction::Drawn, card);
        true
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo_last(&mut self.deck, &mut self.hand)
    }

    /// Drops one hand entry by position, without crediting the deck.
    pub fn remove_from_hand_at(&mut self, index: usize) -> bool {
        self.hand.remove_at(index)
    }

    /// Puts every held card back into the deck and empties the hand.
    pub fn return_hand_to_deck(&mut self) {
        let counts = self.hand.counts();
        self.deck.return_many(&counts);
        self.hand.clear();
    }

    /// Empties the hand without crediting the deck.
    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    pub fn set_custom_count(&mut self, card: CardKind, count: i64) {
        self.deck.set_count(card, count);
    }

    pub fn restore_default_deck(&mut self) {
        self.deck.restore_defaults();
    }

    /// Back to the starting state: default deck, empty hand, empty history,
    /// sort preference on.
    pub fn reset_all(&mut self) {
        *self = Session::new();
    }

    pub fn set_sort_preference(&mut self, by_probability: bool) {
        self.sort_by_probability = by_probability;
    }

    pub fn sort_preference(&self) -> bool {
        self.sort_by_probability
    }

    /// The full stats table, ordered per the current display preference.
    pub fn stats(&self) -> Vec<CardStat> {
        advisor::deck_stats(&self.deck, self.stat_order())
    }

    pub fn top_draws(&self, k: usize) -> Vec<CardStat> {
        advisor::top_draws(&self.deck, k)
    }

    pub fn danger_percent(&self) -> f64 {
        let table = advisor::deck_stats(&self.deck, StatOrder::ByCatalog);
        advisor::danger_percent(&self.hand, &advisor::number_stats(&table))
    }

    pub fn recommendation(&self) -> Recommendation {
        advisor::recommend(self.danger_percent())
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn history(&self) -> &ActionLog {
        &self.history
    }

    pub fn total_remaining(&self) -> u64 {
        self.deck.total_remaining()
    }

    /// The original webapp always renders the header against the default
    /// deck size, even after custom count edits.
    pub fn initial_total(&self) -> u64 {
        Deck::default_total()
    }

    fn stat_order(&self) -> StatOrder {
        if self.sort_by_probability {
            StatOrder::ByChance
        } else {
            StatOrder::ByCatalog
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
