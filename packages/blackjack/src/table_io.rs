//! Collaborator interfaces between the round engine and whatever drives it.
//!
//! The engine never reads input or prints on its own. Hit/stand answers come
//! from a [`DecisionSource`] and everything worth showing goes to a
//! [`TableDisplay`]. The console client implements both over stdin/stdout.

use std::fmt;

use crate::Hand;

/// Supplies a yes/no hit decision for a human seat. Blocks until answered.
pub trait DecisionSource {
    fn wants_hit(&mut self, name: &str, hand: &Hand) -> bool;
}

/// Consumes rendered hands and table announcements
pub trait TableDisplay {
    fn show_hand(&mut self, view: &HandView);
    fn announce(&mut self, event: &TableEvent);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    Bust { name: String },
    Win { name: String },
    Lose { name: String },
    Push { name: String },
    OutOfCards,
    NoCardToFlip { name: String },
}

impl fmt::Display for TableEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableEvent::Bust { name } => write!(f, "{name} has busted."),
            TableEvent::Win { name } => write!(f, "{name} wins!"),
            TableEvent::Lose { name } => write!(f, "{name} loses."),
            TableEvent::Push { name } => write!(f, "{name} pushes."),
            TableEvent::OutOfCards => f.write_str("Out of cards. Unable to deal."),
            TableEvent::NoCardToFlip { .. } => f.write_str("There's no card to flip."),
        }
    }
}

/// What a display needs to draw one seat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    pub name: String,
    pub cards: Vec<String>,
    /// `None` while the hand is empty or its first card is hidden
    pub total: Option<u32>,
}

impl HandView {
    pub fn new(name: &str, hand: &Hand) -> Self {
        let total = hand.value();
        Self {
            name: name.to_string(),
            cards: hand.cards().iter().map(|c| c.to_display()).collect(),
            total: (total != 0).then_some(total),
        }
    }
}

impl fmt::Display for HandView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: \t", self.name)?;
        if self.cards.is_empty() {
            return f.write_str("<empty>");
        }
        for card in &self.cards {
            write!(f, "{card}\t")?;
        }
        if let Some(total) = self.total {
            write!(f, "({total})")?;
        }
        Ok(())
    }
}
