use serde::{Deserialize, Serialize};

use crate::table_io::{DecisionSource, HandView, TableEvent};
use crate::Hand;

/// The House draws on this total or less
pub const HOUSE_HITS_ON: u32 = 16;

/// A named place at the table and the hand in front of it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    name: String,
    hand: Hand,
}

impl Seat {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn total(&self) -> u32 {
        self.hand.value()
    }

    pub fn is_busted(&self) -> bool {
        self.hand.is_busted()
    }

    pub fn view(&self) -> HandView {
        HandView::new(&self.name, &self.hand)
    }

    pub fn bust_event(&self) -> TableEvent {
        TableEvent::Bust {
            name: self.name.clone(),
        }
    }
}

/// Anyone who can be dealt extra cards: a human player or the House.
///
/// The extra-card loop only talks to this trait, so both roles share it.
pub trait Participant {
    fn seat(&self) -> &Seat;
    fn seat_mut(&mut self) -> &mut Seat;

    /// Whether this participant takes another card right now
    fn is_hitting(&self, decisions: &mut dyn DecisionSource) -> bool;

    fn is_busted(&self) -> bool {
        self.seat().is_busted()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    seat: Seat,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            seat: Seat::new(name),
        }
    }

    pub fn name(&self) -> &str {
        self.seat.name()
    }

    pub fn hand(&self) -> &Hand {
        self.seat.hand()
    }

    pub fn win(&self) -> TableEvent {
        TableEvent::Win {
            name: self.name().to_string(),
        }
    }

    pub fn lose(&self) -> TableEvent {
        TableEvent::Lose {
            name: self.name().to_string(),
        }
    }

    pub fn push(&self) -> TableEvent {
        TableEvent::Push {
            name: self.name().to_string(),
        }
    }
}

impl Participant for Player {
    fn seat(&self) -> &Seat {
        &self.seat
    }

    fn seat_mut(&mut self) -> &mut Seat {
        &mut self.seat
    }

    fn is_hitting(&self, decisions: &mut dyn DecisionSource) -> bool {
        decisions.wants_hit(self.seat.name(), self.seat.hand())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    seat: Seat,
}

impl House {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            seat: Seat::new(name),
        }
    }

    pub fn name(&self) -> &str {
        self.seat.name()
    }

    pub fn hand(&self) -> &Hand {
        self.seat.hand()
    }

    /// Fixed dealer rule: hit on 16 or less
    pub fn should_hit(&self) -> bool {
        self.seat.total() <= HOUSE_HITS_ON
    }

    /// Turns the hole card over. Returns an event when there is nothing to flip.
    pub fn flip_first_card(&mut self) -> Option<TableEvent> {
        if self.seat.hand_mut().flip_first() {
            None
        } else {
            Some(TableEvent::NoCardToFlip {
                name: self.name().to_string(),
            })
        }
    }
}

impl Default for House {
    fn default() -> Self {
        Self::new("House")
    }
}

impl Participant for House {
    fn seat(&self) -> &Seat {
        &self.seat
    }

    fn seat_mut(&mut self) -> &mut Seat {
        &mut self.seat
    }

    fn is_hitting(&self, _decisions: &mut dyn DecisionSource) -> bool {
        self.should_hit()
    }
}
