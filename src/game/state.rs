//! Game state types.

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Accepting moves.
    Playing,
    /// The round limit was reached; only a reset is accepted.
    Finished,
}

/// Snapshot of the game's counters.
///
/// Invariants: `round_index <= round_limit`, `is_game_over` holds exactly
/// when `round_index == round_limit`, `score == wins - losses` and
/// `wins + losses + draws == round_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Rounds played since the last reset.
    pub round_index: u32,
    /// Rounds per game.
    pub round_limit: u32,
    /// Sum of the score deltas of every round played.
    pub score: i32,
    /// Whether the round limit was reached.
    pub is_game_over: bool,
    /// Rounds won.
    pub wins: u32,
    /// Rounds lost.
    pub losses: u32,
    /// Rounds drawn.
    pub draws: u32,
}

impl GameState {
    /// The state of a game before any move.
    #[must_use]
    pub const fn initial(round_limit: u32) -> Self {
        Self {
            round_index: 0,
            round_limit,
            score: 0,
            is_game_over: false,
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    /// Returns the phase matching `is_game_over`.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.is_game_over {
            Phase::Finished
        } else {
            Phase::Playing
        }
    }

    /// Rounds left before the game is over.
    #[must_use]
    pub const fn rounds_remaining(&self) -> u32 {
        self.round_limit.saturating_sub(self.round_index)
    }
}
