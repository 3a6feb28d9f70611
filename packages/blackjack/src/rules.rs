use serde::{Deserialize, Serialize};

/// Table configuration for a game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRules {
    /// Seats available to human players
    pub max_players: usize,

    /// Name shown for the dealer's hand
    pub house_name: String,

    /// Repopulate and reshuffle before a round when fewer cards remain.
    /// `None` plays the whole session out of a single deck.
    pub reshuffle_below: Option<usize>,
}

impl TableRules {
    pub const MIN_PLAYERS: usize = 1;
    pub const MAX_PLAYERS: usize = 7;

    /// Reshuffle whenever the deck may not cover a full round for every seat
    pub fn with_reshuffle_below(mut self, cards: usize) -> Self {
        self.reshuffle_below = Some(cards);
        self
    }

    pub fn needs_reshuffle(&self, remaining: usize) -> bool {
        matches!(self.reshuffle_below, Some(threshold) if remaining < threshold)
    }
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            max_players: Self::MAX_PLAYERS,
            house_name: "House".to_string(),
            reshuffle_below: None,
        }
    }
}
