//! Game engine and state management.

use alloc::vec::Vec;

use crate::options::GameOptions;
use crate::result::{GameSummary, RoundResult};
use crate::source::RandomSource;
use crate::sync::Mutex;

mod round;
pub mod state;

pub use state::{GameState, Phase};

/// Mutable per-session data, guarded as one unit.
#[derive(Debug)]
struct Session {
    state: GameState,
    last: Option<RoundResult>,
    history: Vec<RoundResult>,
}

impl Session {
    const fn new(round_limit: u32) -> Self {
        Self {
            state: GameState::initial(round_limit),
            last: None,
            history: Vec::new(),
        }
    }
}

/// A rock-paper-scissors engine that plays a fixed number of rounds
/// against an opponent [`ChoiceSource`](crate::ChoiceSource).
///
/// The game owns its state and its opponent source. All operations take
/// `&self`; each one locks the state for its whole duration, so the
/// invariants documented on [`GameState`] hold between any two calls.
pub struct Game<S = RandomSource> {
    /// Game options, with the round limit already normalized.
    options: GameOptions,
    /// Counters, latest result, and history.
    session: Mutex<Session>,
    /// Opponent choice provider.
    source: Mutex<S>,
}

impl Game<RandomSource> {
    /// Creates a new game whose opponent draws uniformly at random from a
    /// generator seeded with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use rpsrs::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.round_limit(), 10);
    /// assert!(!game.is_game_over());
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_source(options, RandomSource::new(seed))
    }
}

impl<S> Game<S> {
    /// Creates a new game with an injected opponent source.
    ///
    /// # Example
    ///
    /// ```
    /// use rpsrs::{Choice, Game, GameOptions, Outcome, SequenceSource};
    ///
    /// let source = SequenceSource::repeat(Choice::Paper);
    /// let game = Game::with_source(GameOptions::default(), source);
    /// let result = game.submit_move(Choice::Scissors).unwrap();
    /// assert_eq!(result.outcome, Outcome::Win);
    /// ```
    #[must_use]
    pub fn with_source(options: GameOptions, source: S) -> Self {
        let options = options.with_round_limit(options.round_limit);

        Self {
            options,
            session: Mutex::new(Session::new(options.round_limit)),
            source: Mutex::new(source),
        }
    }

    /// Returns the options this game was created with.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns a snapshot of the game's counters.
    pub fn state(&self) -> GameState {
        self.session.lock().state
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.state().phase()
    }

    /// Returns the number of rounds played since the last reset.
    pub fn round_index(&self) -> u32 {
        self.state().round_index
    }

    /// Returns the number of rounds per game.
    pub const fn round_limit(&self) -> u32 {
        self.options.round_limit
    }

    /// Returns the running score.
    pub fn score(&self) -> i32 {
        self.state().score
    }

    /// Returns whether the round limit was reached.
    pub fn is_game_over(&self) -> bool {
        self.state().is_game_over
    }

    /// Returns the most recent round, if any round was played since the
    /// last reset.
    pub fn last_result(&self) -> Option<RoundResult> {
        self.session.lock().last
    }

    /// Returns every round played since the last reset, oldest first.
    ///
    /// Always empty when history is disabled in the options.
    pub fn history(&self) -> Vec<RoundResult> {
        self.session.lock().history.clone()
    }

    /// Returns the final tally once the game is over.
    ///
    /// Returns `None` while the game is still being played.
    pub fn summary(&self) -> Option<GameSummary> {
        let state = self.state();
        state.is_game_over.then_some(GameSummary {
            score: state.score,
            rounds: state.round_index,
            wins: state.wins,
            losses: state.losses,
            draws: state.draws,
        })
    }

    /// Starts a new game.
    ///
    /// Clears the counters, the latest result and the history. Allowed at
    /// any time, including mid-game. The opponent source is not rewound.
    pub fn reset(&self) {
        let mut session = self.session.lock();
        let previous = session.state;
        *session = Session::new(self.options.round_limit);
        drop(session);

        log::info!(
            "game reset after {}/{} rounds with score {}",
            previous.round_index,
            previous.round_limit,
            previous.score
        );
    }

    /// Consumes the game and returns its opponent source.
    pub fn into_source(self) -> S {
        self.source.into_inner()
    }
}
