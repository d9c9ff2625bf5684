use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use flip7_core::model::card::CardKind;

use crate::render;
use crate::store::SessionStore;

/// Card counter and draw advisor for Flip 7.
#[derive(Debug, Parser)]
#[command(
    name = "flip7",
    version,
    about = "Flip 7 deck tracker and draw advisor"
)]
pub struct Cli {
    /// Path of the saved session (falls back to FLIP7_STATE, then to
    /// flip7-session.json in the working directory).
    #[arg(long, value_name = "FILE")]
    pub state: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Mark a card as played, removing one copy from the deck.
    Play { card: CardKind },
    /// Draw a card from the deck into your hand.
    Draw { card: CardKind },
    /// Revert the most recent play or draw.
    Undo,
    /// Return every held card to the deck and empty the hand.
    Return,
    /// Drop one hand card by its position in the hand line (0-based).
    Remove { index: usize },
    /// Empty the hand without crediting the deck.
    Clear,
    /// Overwrite how many copies of a card remain in the deck.
    Set {
        card: CardKind,
        /// Negative values are floored at zero.
        #[arg(allow_hyphen_values = true)]
        count: i64,
    },
    /// Put the deck back to its printed composition; hand and history stay.
    Restore,
    /// Start over: default deck, empty hand, empty history.
    Reset,
    /// Pick the stats table order.
    Sort {
        #[arg(value_enum)]
        mode: SortMode,
    },
    /// Print the session report without changing anything.
    Stats,
    /// Print the report plus the most likely numeric draws.
    Advise {
        /// How many numeric kinds to list.
        #[arg(long, default_value_t = 5)]
        top: usize,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortMode {
    /// Descending draw chance.
    Chance,
    /// Fixed catalog order.
    Catalog,
}

pub fn run(args: Cli) -> anyhow::Result<()> {
    let store = SessionStore::resolve(args.state);
    let mut session = store.load();

    let mut notice = None;
    let mut top_draws = None;

    match args.command.unwrap_or(Command::Stats) {
        Command::Play { card } => {
            if !session.play_card(card) {
                notice = Some(format!("No copies of {card} left to play."));
            }
        }
        Command::Draw { card } => {
            if !session.draw_to_hand(card) {
                notice = Some(format!("No copies of {card} left to draw."));
            }
        }
        Command::Undo => {
            if !session.undo() {
                notice = Some("Nothing to undo.".to_string());
            }
        }
        Command::Return => session.return_hand_to_deck(),
        Command::Remove { index } => {
            if !session.remove_from_hand_at(index) {
                notice = Some(format!("No hand card at position {index}."));
            }
        }
        Command::Clear => session.clear_hand(),
        Command::Set { card, count } => session.set_custom_count(card, count),
        Command::Restore => session.restore_default_deck(),
        Command::Reset => session.reset_all(),
        Command::Sort { mode } => session.set_sort_preference(matches!(mode, SortMode::Chance)),
        Command::Stats => {}
        Command::Advise { top } => top_draws = Some(top),
    }

    store.save(&session);

    let stdout = std::io::stdout();
    render::report(&mut stdout.lock(), &session, notice.as_deref(), top_draws)
        .context("writing the report to stdout")?;
    Ok(())
}
