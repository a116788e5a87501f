use crate::choice::Choice;
use crate::error::MoveError;
use crate::result::{Outcome, RoundResult, resolve};
use crate::source::ChoiceSource;

use super::Game;

impl<S: ChoiceSource> Game<S> {
    /// Plays one round with the player's choice.
    ///
    /// Draws the opponent's choice from the source, resolves the round from
    /// the player's side, and updates the score and round counter. The
    /// game is over once the round counter reaches the round limit.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidState`] if the game is over. Nothing is
    /// drawn from the source in that case; call [`Game::reset`] first.
    pub fn submit_move(&self, player_choice: Choice) -> Result<RoundResult, MoveError> {
        let mut session = self.session.lock();
        if session.state.is_game_over {
            drop(session);
            log::warn!("rejected move {player_choice}: the game is over");
            return Err(MoveError::InvalidState);
        }

        let opponent_choice = self.source.lock().next_choice();
        let outcome = resolve(opponent_choice, player_choice);

        let state = &mut session.state;
        state.round_index += 1;
        state.score += outcome.score_delta();
        match outcome {
            Outcome::Win => state.wins += 1,
            Outcome::Lose => state.losses += 1,
            Outcome::Draw => state.draws += 1,
        }
        state.is_game_over = state.round_index == state.round_limit;
        let snapshot = *state;

        let result = RoundResult {
            round: snapshot.round_index,
            player_choice,
            opponent_choice,
            outcome,
        };

        session.last = Some(result);
        if self.options.history {
            session.history.push(result);
        }
        drop(session);

        log::debug!(
            "round {}/{}: {player_choice} vs {opponent_choice} -> {outcome}, score {}",
            snapshot.round_index,
            snapshot.round_limit,
            snapshot.score
        );
        if snapshot.is_game_over {
            log::info!(
                "game over with score {}/{}",
                snapshot.score,
                snapshot.round_limit
            );
        }

        Ok(result)
    }
}
