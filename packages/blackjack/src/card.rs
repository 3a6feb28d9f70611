use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Card rank, numbered by its ordinal (Ace = 1 .. King = 13)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven,
        Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King,
    ];

    pub fn from_ordinal(ordinal: u8) -> Result<Self, Error> {
        match ordinal {
            1..=13 => Ok(Self::ALL[(ordinal - 1) as usize]),
            _ => Err(Error::InvalidRank(ordinal)),
        }
    }

    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    pub fn token(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn from_index(index: u8) -> Result<Self, Error> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(Error::InvalidSuit(index))
    }

    pub fn token(&self) -> &'static str {
        match self {
            Suit::Clubs => "c",
            Suit::Diamonds => "d",
            Suit::Hearts => "h",
            Suit::Spades => "s",
        }
    }
}

/// A playing card. Rank and suit are fixed once built; only the visibility can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// Token shown in place of a face-down card
    pub const HIDDEN: &'static str = "XX";

    /// A face-up card
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: true,
        }
    }

    pub fn face_down(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }

    /// Raw card value: 0 while face down, Ace counts 1, court cards count 10.
    /// Promoting an Ace to 11 is decided on the whole hand, never here.
    pub fn value(&self) -> u8 {
        if !self.face_up {
            return 0;
        }
        self.rank.ordinal().min(10)
    }

    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    pub fn to_display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_up {
            write!(f, "{}{}", self.rank.token(), self.suit.token())
        } else {
            f.write_str(Self::HIDDEN)
        }
    }
}
