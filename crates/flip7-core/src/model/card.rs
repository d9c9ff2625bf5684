use core::fmt;
use serde::{Deserialize, Serialize};

/// One kind of Flip 7 card. Numeric discriminants double as face values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum CardKind {
    #[serde(rename = "0")]
    Zero = 0,
    #[serde(rename = "1")]
    One = 1,
    #[serde(rename = "2")]
    Two = 2,
    #[serde(rename = "3")]
    Three = 3,
    #[serde(rename = "4")]
    Four = 4,
    #[serde(rename = "5")]
    Five = 5,
    #[serde(rename = "6")]
    Six = 6,
    #[serde(rename = "7")]
    Seven = 7,
    #[serde(rename = "8")]
    Eight = 8,
    #[serde(rename = "9")]
    Nine = 9,
    #[serde(rename = "10")]
    Ten = 10,
    #[serde(rename = "11")]
    Eleven = 11,
    #[serde(rename = "12")]
    Twelve = 12,
    #[serde(rename = "+2")]
    PlusTwo = 13,
    #[serde(rename = "+4")]
    PlusFour = 14,
    #[serde(rename = "+6")]
    PlusSix = 15,
    #[serde(rename = "+8")]
    PlusEight = 16,
    #[serde(rename = "+10")]
    PlusTen = 17,
    #[serde(rename = "x2")]
    TimesTwo = 18,
    #[serde(rename = "freeze")]
    Freeze = 19,
    #[serde(rename = "flip three")]
    FlipThree = 20,
    #[serde(rename = "second chance")]
    SecondChance = 21,
}

impl CardKind {
    pub const COUNT: usize = 22;

    pub const CATALOG: [CardKind; Self::COUNT] = [
        CardKind::Zero,
        CardKind::One,
        CardKind::Two,
        CardKind::Three,
        CardKind::Four,
        CardKind::Five,
        CardKind::Six,
        CardKind::Seven,
        CardKind::Eight,
        CardKind::Nine,
        CardKind::Ten,
        CardKind::Eleven,
        CardKind::Twelve,
        CardKind::PlusTwo,
        CardKind::PlusFour,
        CardKind::PlusSix,
        CardKind::PlusEight,
        CardKind::PlusTen,
        CardKind::TimesTwo,
        CardKind::Freeze,
        CardKind::FlipThree,
        CardKind::SecondChance,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(CardKind::Zero),
            1 => Some(CardKind::One),
            2 => Some(CardKind::Two),
            3 => Some(CardKind::Three),
            4 => Some(CardKind::Four),
            5 => Some(CardKind::Five),
            6 => Some(CardKind::Six),
            7 => Some(CardKind::Seven),
            8 => Some(CardKind::Eight),
            9 => Some(CardKind::Nine),
            10 => Some(CardKind::Ten),
            11 => Some(CardKind::Eleven),
            12 => Some(CardKind::Twelve),
            13 => Some(CardKind::PlusTwo),
            14 => Some(CardKind::PlusFour),
            15 => Some(CardKind::PlusSix),
            16 => Some(CardKind::PlusEight),
            17 => Some(CardKind::PlusTen),
            18 => Some(CardKind::TimesTwo),
            19 => Some(CardKind::Freeze),
            20 => Some(CardKind::FlipThree),
            21 => Some(CardKind::SecondChance),
            _ => None,
        }
    }

    /// The numeric kinds 1..12 are the only ones that can bust a hand.
    /// The lone zero card never has a second copy to collide with.
    pub const fn is_number(self) -> bool {
        let value = self as u8;
        1 <= value && value <= 12
    }

    /// Copies of this kind in a fresh deck.
    pub const fn default_count(self) -> u32 {
        match self {
            CardKind::Zero => 1,
            CardKind::PlusTwo
            | CardKind::PlusFour
            | CardKind::PlusSix
            | CardKind::PlusEight
            | CardKind::PlusTen
            | CardKind::TimesTwo => 1,
            CardKind::Freeze | CardKind::FlipThree | CardKind::SecondChance => 3,
            numeric => numeric as u32,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CardKind::Zero => "0",
            CardKind::One => "1",
            CardKind::Two => "2",
            CardKind::Three => "3",
            CardKind::Four => "4",
            CardKind::Five => "5",
            CardKind::Six => "6",
            CardKind::Seven => "7",
            CardKind::Eight => "8",
            CardKind::Nine => "9",
            CardKind::Ten => "10",
            CardKind::Eleven => "11",
            CardKind::Twelve => "12",
            CardKind::PlusTwo => "+2",
            CardKind::PlusFour => "+4",
            CardKind::PlusSix => "+6",
            CardKind::PlusEight => "+8",
            CardKind::PlusTen => "+10",
            CardKind::TimesTwo => "x2",
            CardKind::Freeze => "freeze",
            CardKind::FlipThree => "flip three",
            CardKind::SecondChance => "second chance",
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseCardKindError;

impl fmt::Display for ParseCardKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognized card label")
    }
}

impl std::error::Error for ParseCardKindError {}

impl std::str::FromStr for CardKind {
    type Err = ParseCardKindError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        CardKind::CATALOG
            .into_iter()
            .find(|kind| kind.label() == normalized)
            .ok_or(ParseCardKindError)
    }
}
