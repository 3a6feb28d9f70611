use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid rank ordinal: {0} (expected 1-13)")]
    InvalidRank(u8),
    #[error("Invalid suit index: {0} (expected 0-3)")]
    InvalidSuit(u8),
    #[error("Number of players must be between {min} and {max}, got {count}")]
    PlayerCount { count: usize, min: usize, max: usize },
    #[error("Out of cards. Unable to deal.")]
    OutOfCards,
}
