use super::session::Session;
use crate::model::card::CardKind;
use crate::model::counts::CardCounts;
use crate::model::deck::Deck;
use crate::model::hand::Hand;
use crate::model::history::{ActionLog, HistoryEntry};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Persisted form of a [`Session`]. Field names and card labels are the wire
/// contract shared with the original webapp's saved state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub deck: BTreeMap<CardKind, u32>,
    pub hand: Vec<CardKind>,
    pub sort_by_probability: bool,
    pub history: Vec<HistoryEntry>,
}

impl SessionSnapshot {
    pub fn capture(session: &Session) -> Self {
        SessionSnapshot {
            deck: session.deck().counts().iter().collect(),
            hand: session.hand().cards().to_vec(),
            sort_by_probability: session.sort_preference(),
            history: session.history().entries().copied().collect(),
        }
    }

    pub fn restore(self) -> Session {
        let mut counts = CardCounts::empty();
        for (kind, count) in self.deck {
            counts.set(kind, count);
        }
        // The log is stored newest first; replay oldest first so the front
        // ends up holding the most recent entry again.
        let mut history = ActionLog::new();
        for entry in self.history.iter().rev() {
            history.record(entry.action, entry.card);
        }
        Session::from_parts(
            Deck::from_counts(counts),
            Hand::with_cards(self.hand),
            history,
            self.sort_by_probability,
        )
    }

    pub fn to_json(session: &Session) -> serde_json::Result<String> {
        let snapshot = Self::capture(session);
        serde_json::to_string_pretty(&snapshot)
    }

    /// Lenient decode: a field that is missing or fails its type check falls
    /// back to the fresh-session default for that field alone. A deck map may
    /// omit kinds (omitted means zero left); an unknown label or a negative
    /// count invalidates the whole field carrying it.
    pub fn from_json(json: &str) -> Self {
        let value = serde_json::from_str(json).unwrap_or(Value::Null);
        Self::from_value(value)
    }

    fn from_value(value: Value) -> Self {
        let defaults = Self::default();
        let Value::Object(mut fields) = value else {
            return defaults;
        };

        SessionSnapshot {
            deck: take_field(&mut fields, "deck").unwrap_or(defaults.deck),
            hand: take_field(&mut fields, "hand").unwrap_or(defaults.hand),
            sort_by_probability: take_field(&mut fields, "sortByProbability")
                .unwrap_or(defaults.sort_by_probability),
            history: take_field(&mut fields, "history").unwrap_or(defaults.history),
        }
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::capture(&Session::new())
    }
}

fn take_field<T: serde::de::DeserializeOwned>(
    fields: &mut serde_json::Map<String, Value>,
    name: &str,
) -> Option<T> {
    let value = fields.remove(name)?;
    serde_json::from_value(value).ok()
}
