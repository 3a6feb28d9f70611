use crate::Card;
use serde::{Deserialize, Serialize};

/// Totals above this are bust
pub const BLACKJACK: u32 = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOutcome {
    Win,
    Loss,
    Push,
    Bust,
}

/// Calculate the value of a blackjack hand.
///
/// A hand whose first card is face down is not yet revealed and totals 0.
/// Every face-up Ace counts 1, then a single Ace is promoted to 11 when the
/// hard total leaves room for it. Face-down cards count nothing.
pub fn calculate_hand_value(cards: &[Card]) -> u32 {
    let first = match cards.first() {
        Some(card) => card,
        None => return 0,
    };
    if first.value() == 0 {
        return 0;
    }

    let hard: u32 = cards.iter().map(|c| c.value() as u32).sum();
    let has_ace = cards.iter().any(|c| c.is_ace() && c.is_face_up());

    if has_ace && hard <= 11 {
        hard + 10
    } else {
        hard
    }
}

/// Check if a hand is soft (has an ace counted as 11)
pub fn is_soft_hand(cards: &[Card]) -> bool {
    let hard: u32 = cards.iter().map(|c| c.value() as u32).sum();
    let value = calculate_hand_value(cards);
    value != 0 && value == hard + 10
}

/// Check if a hand is busted
pub fn is_busted(cards: &[Card]) -> bool {
    calculate_hand_value(cards) > BLACKJACK
}

/// Compare a finished player hand against the finished house hand
pub fn settle(player: &[Card], house: &[Card]) -> HandOutcome {
    if is_busted(player) {
        return HandOutcome::Bust;
    }
    if is_busted(house) {
        return HandOutcome::Win;
    }

    let player_total = calculate_hand_value(player);
    let house_total = calculate_hand_value(house);
    if player_total > house_total {
        HandOutcome::Win
    } else if player_total < house_total {
        HandOutcome::Loss
    } else {
        HandOutcome::Push
    }
}

/// Ordered cards owned by one holder, in deal order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            // enough for a typical hand without regrowing
            cards: Vec::with_capacity(7),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cards: Vec::with_capacity(capacity),
        }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> u32 {
        calculate_hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft_hand(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Drops every card in the hand
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Flips the first card, returning false when the hand is empty
    pub fn flip_first(&mut self) -> bool {
        match self.cards.first_mut() {
            Some(card) => {
                card.flip();
                true
            }
            None => false,
        }
    }

    pub(crate) fn take_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }
}
