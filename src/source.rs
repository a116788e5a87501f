//! Opponent choice providers.

use alloc::boxed::Box;
use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::choice::Choice;

/// Supplies the opponent's choice for each round.
///
/// The game draws exactly one choice per accepted move and never draws
/// for a rejected one.
pub trait ChoiceSource {
    /// Returns the next opponent choice.
    fn next_choice(&mut self) -> Choice;
}

impl<S: ChoiceSource + ?Sized> ChoiceSource for &mut S {
    fn next_choice(&mut self) -> Choice {
        (**self).next_choice()
    }
}

impl<S: ChoiceSource + ?Sized> ChoiceSource for Box<S> {
    fn next_choice(&mut self) -> Choice {
        (**self).next_choice()
    }
}

/// Uniform random choices from a seeded `ChaCha8` generator.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Creates a source seeded with `seed`.
    ///
    /// Two sources with the same seed produce the same sequence.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl ChoiceSource for RandomSource {
    fn next_choice(&mut self) -> Choice {
        Choice::from_index(self.rng.random_range(0..Choice::ALL.len()))
    }
}

/// Replays a fixed list of choices, starting over when it runs out.
///
/// ```
/// use rpsrs::{Choice, ChoiceSource, SequenceSource};
///
/// let mut source = SequenceSource::new([Choice::Rock, Choice::Paper]).unwrap();
/// assert_eq!(source.next_choice(), Choice::Rock);
/// assert_eq!(source.next_choice(), Choice::Paper);
/// assert_eq!(source.next_choice(), Choice::Rock);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceSource {
    choices: Vec<Choice>,
    position: usize,
}

impl SequenceSource {
    /// Creates a source that cycles through `choices`.
    ///
    /// Returns `None` if `choices` is empty.
    #[must_use]
    pub fn new(choices: impl IntoIterator<Item = Choice>) -> Option<Self> {
        let choices: Vec<Choice> = choices.into_iter().collect();
        if choices.is_empty() {
            return None;
        }

        Some(Self {
            choices,
            position: 0,
        })
    }

    /// Creates a source that always plays `choice`.
    #[must_use]
    pub fn repeat(choice: Choice) -> Self {
        Self {
            choices: alloc::vec![choice],
            position: 0,
        }
    }

    /// Returns how many choices have been drawn so far.
    #[must_use]
    pub const fn drawn(&self) -> usize {
        self.position
    }
}

impl ChoiceSource for SequenceSource {
    fn next_choice(&mut self) -> Choice {
        let choice = self.choices[self.position % self.choices.len()];
        self.position += 1;
        choice
    }
}
