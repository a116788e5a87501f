//! Round outcomes and results.

use core::fmt;

use crate::choice::Choice;

/// Result of a round from one player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The player's choice beats the opponent's.
    Win,
    /// The opponent's choice beats the player's.
    Lose,
    /// Both chose the same sign.
    Draw,
}

impl Outcome {
    /// Score change for this outcome: `+1`, `-1` or `0`.
    #[must_use]
    pub const fn score_delta(self) -> i32 {
        match self {
            Self::Win => 1,
            Self::Lose => -1,
            Self::Draw => 0,
        }
    }

    /// The same round seen from the other side.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
            Self::Draw => Self::Draw,
        }
    }

    /// Short past-tense label ("Won", "Lost", "Draw").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Win => "Won",
            Self::Lose => "Lost",
            Self::Draw => "Draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolves `b` against `a` and returns the outcome from `b`'s side.
///
/// `a` is the opponent and `b` the choice being evaluated. Scissors beats
/// paper, paper beats rock, and rock beats scissors.
///
/// ```
/// use rpsrs::{Choice, Outcome, resolve};
///
/// // The opponent plays paper; scissors wins.
/// assert_eq!(resolve(Choice::Paper, Choice::Scissors), Outcome::Win);
/// assert_eq!(resolve(Choice::Rock, Choice::Scissors), Outcome::Lose);
/// assert_eq!(resolve(Choice::Rock, Choice::Rock), Outcome::Draw);
/// ```
#[must_use]
pub fn resolve(a: Choice, b: Choice) -> Outcome {
    if a == b {
        Outcome::Draw
    } else if a.beats(b) {
        Outcome::Lose
    } else {
        Outcome::Win
    }
}

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// The round number, starting at 1.
    pub round: u32,
    /// What the player chose.
    pub player_choice: Choice,
    /// What the opponent source drew.
    pub opponent_choice: Choice,
    /// The outcome from the player's side.
    pub outcome: Outcome,
}

/// Summary of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSummary {
    /// Final score (wins minus losses).
    pub score: i32,
    /// Number of rounds played.
    pub rounds: u32,
    /// Rounds won.
    pub wins: u32,
    /// Rounds lost.
    pub losses: u32,
    /// Rounds drawn.
    pub draws: u32,
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "final score {}/{} ({} won, {} lost, {} drawn)",
            self.score, self.rounds, self.wins, self.losses, self.draws
        )
    }
}
