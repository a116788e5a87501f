//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when submitting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The game is over; it must be reset before another move.
    #[error("invalid game state for a move: the game is over")]
    InvalidState,
}

/// Errors that can occur when parsing a [`Choice`](crate::Choice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseChoiceError {
    /// The input names no known choice.
    #[error("unknown choice, expected rock, paper or scissors")]
    Unknown,
}
