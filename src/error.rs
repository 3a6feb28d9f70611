use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Engine(#[from] blackjack::Error),
    #[error("Could not encode round report: {0}")]
    Report(#[from] serde_json::Error),
    #[error("Input closed before the table was set up")]
    InputClosed,
}
