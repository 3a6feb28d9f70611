mod card;
mod deck;
mod error;
mod game;
mod hand;
mod player;
mod rules;
pub mod table_io;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
pub use error::Error;
pub use game::{Game, RoundPhase, RoundReport, SeatResult};
pub use hand::{calculate_hand_value, is_busted, is_soft_hand, settle, Hand, HandOutcome, BLACKJACK};
pub use player::{House, Participant, Player, Seat, HOUSE_HITS_ON};
pub use rules::TableRules;
pub use table_io::{DecisionSource, HandView, TableDisplay, TableEvent};
