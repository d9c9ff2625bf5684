pub mod card;
pub mod counts;
pub mod deck;
pub mod hand;
pub mod history;
