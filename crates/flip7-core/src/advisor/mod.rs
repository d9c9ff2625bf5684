//! Read-only probability passes over the deck and hand.
//!
//! This module is composed of:
//! - `stats`: per-kind remaining counts and draw chances, in a caller-chosen
//!   order.
//! - `recommend`: the bust-risk sum over uniquely held numbers and the
//!   draw-or-pass call derived from it.

mod recommend;
mod stats;

pub use recommend::{Recommendation, WARN_THRESHOLD_PERCENT, danger_percent, recommend};
pub use stats::{CardStat, StatOrder, deck_stats, number_stats, top_draws};
