use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid action: {reason}")]
    InvalidAction { reason: String },
    #[error("seat {seat} is already taken")]
    SeatOccupied { seat: usize },
    #[error("player already registered at seat {seat}")]
    DuplicatePlayer { seat: usize },
    #[error("an agent seat is already registered")]
    AgentExists,
    #[error("hand cannot be played: {reason}")]
    HandNotPlayable { reason: &'static str },
    #[error("showdown already resolved, reset to start a new hand")]
    ShowdownAlreadyResolved,
    #[error("seat {seat} out of range for a {n_seats}-seat table")]
    InvalidSeat { seat: usize, n_seats: usize },
}
