use std::fmt;

use crate::error::{BjError, BjResult};

/// Number of ranks in a French deck.
pub const NUM_RANKS: u32 = 13;

/// Number of ranks worth 10 points (T, J, Q, K).
pub const NUM_FACES: u32 = 4;

/// A card rank. Every ten-valued rank collapses into `Ten`, so ten distinct
/// ranks cover the whole deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
}

impl Rank {
    pub fn from_char(c: char) -> BjResult<Rank> {
        match c {
            'A' => Ok(Rank::Ace),
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            _ => Err(BjError::InvalidRank(c)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
        }
    }

    /// Raw point value, with the ace counted as 1.
    pub fn value(self) -> u32 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
        }
    }

    /// Probability of drawing this rank from a fresh shoe.
    pub fn probability(self) -> f64 {
        let weight = if self == Rank::Ten { NUM_FACES } else { 1 };
        f64::from(weight) / f64::from(NUM_RANKS)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

pub const ALL_RANKS: [Rank; 10] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
];

/// Parse a run of rank characters ("A7", "T66") into ranks.
pub fn parse_ranks(notation: &str) -> BjResult<Vec<Rank>> {
    let notation = notation.trim();
    if notation.is_empty() {
        return Err(BjError::InvalidHand(notation.to_string()));
    }
    notation
        .chars()
        .map(|c| Rank::from_char(c.to_ascii_uppercase()))
        .collect()
}
