//! Hand signs and their text forms.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseChoiceError;
use crate::result::Outcome;

/// One of the three playable hand signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Choice {
    /// Rock. Beats scissors.
    Rock,
    /// Paper. Beats rock.
    Paper,
    /// Scissors. Beats paper.
    Scissors,
}

impl Choice {
    /// Every choice, in the order rock, paper, scissors.
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// Returns the choice this one beats.
    #[must_use]
    pub const fn victim(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }

    /// Returns whether this choice beats `other`.
    ///
    /// ```
    /// use rpsrs::Choice;
    ///
    /// assert!(Choice::Scissors.beats(Choice::Paper));
    /// assert!(Choice::Paper.beats(Choice::Rock));
    /// assert!(Choice::Rock.beats(Choice::Scissors));
    /// assert!(!Choice::Rock.beats(Choice::Rock));
    /// ```
    #[must_use]
    pub fn beats(self, other: Self) -> bool {
        self.victim() == other
    }

    /// Plays this choice against `opponent` and returns the outcome from
    /// this choice's side.
    ///
    /// Equivalent to [`resolve(opponent, self)`](crate::resolve).
    #[must_use]
    pub fn against(self, opponent: Self) -> Outcome {
        crate::result::resolve(opponent, self)
    }

    /// Lowercase name of the choice.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }

    /// Hand emoji for the choice.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Rock => "\u{1f44a}",
            Self::Paper => "\u{270b}",
            Self::Scissors => "\u{270c}\u{fe0f}",
        }
    }

    /// Maps an index in `0..3` onto [`Choice::ALL`], wrapping larger values.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Choice {
    type Err = ParseChoiceError;

    /// Parses a choice from its name, its first letter, or its emoji.
    ///
    /// Matching ignores ASCII case and surrounding whitespace.
    ///
    /// ```
    /// use rpsrs::Choice;
    ///
    /// assert_eq!("Rock".parse(), Ok(Choice::Rock));
    /// assert_eq!(" p ".parse(), Ok(Choice::Paper));
    /// assert_eq!("\u{270c}".parse(), Ok(Choice::Scissors));
    /// assert!("lizard".parse::<Choice>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        // Scissors emoji is accepted with and without the variation selector.
        let input = input.strip_suffix('\u{fe0f}').unwrap_or(input);

        Self::ALL
            .into_iter()
            .find(|choice| {
                let name = choice.name();
                input.eq_ignore_ascii_case(name)
                    || input.eq_ignore_ascii_case(&name[..1])
                    || input == choice.symbol().trim_end_matches('\u{fe0f}')
            })
            .ok_or(ParseChoiceError::Unknown)
    }
}
