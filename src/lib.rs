//! A rock-paper-scissors game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a fixed number of rounds
//! against a randomly drawn opponent, keeps the running score, and reports
//! when the game is over so a presentation layer can offer a restart.
//!
//! # Example
//!
//! ```
//! use rpsrs::{Choice, Game, GameOptions};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! let result = game.submit_move(Choice::Rock).unwrap();
//! assert_eq!(result.player_choice, Choice::Rock);
//! assert_eq!(game.round_index(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod choice;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
pub mod source;
mod sync;

// Re-export main types
pub use choice::Choice;
pub use error::{MoveError, ParseChoiceError};
pub use game::{Game, GameState, Phase};
pub use options::{DEFAULT_ROUND_LIMIT, GameOptions};
pub use result::{GameSummary, Outcome, RoundResult, resolve};
pub use source::{ChoiceSource, RandomSource, SequenceSource};
