//! Game configuration options.

/// Number of rounds in a game unless configured otherwise.
pub const DEFAULT_ROUND_LIMIT: u32 = 10;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use rpsrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_round_limit(5)
///     .with_history(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of rounds before the game is over. Always at least 1.
    pub round_limit: u32,
    /// Whether the game keeps every round result until the next reset.
    pub history: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            round_limit: DEFAULT_ROUND_LIMIT,
            history: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of rounds per game.
    ///
    /// A limit of zero is raised to one.
    ///
    /// # Example
    ///
    /// ```
    /// use rpsrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_round_limit(3);
    /// assert_eq!(options.round_limit, 3);
    ///
    /// let options = GameOptions::default().with_round_limit(0);
    /// assert_eq!(options.round_limit, 1);
    /// ```
    #[must_use]
    pub const fn with_round_limit(mut self, round_limit: u32) -> Self {
        self.round_limit = if round_limit == 0 { 1 } else { round_limit };
        self
    }

    /// Sets whether round history is kept.
    ///
    /// # Example
    ///
    /// ```
    /// use rpsrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_history(false);
    /// assert_eq!(options.history, false);
    /// ```
    #[must_use]
    pub const fn with_history(mut self, history: bool) -> Self {
        self.history = history;
        self
    }
}
