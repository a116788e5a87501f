use rpsrs::{Choice, Game, GameOptions, GameState, GameSummary, RoundResult};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, round_limit: Option<u32>) -> Self {
        Self {
            game: Game::new(options(round_limit), seed as u64),
        }
    }

    /// Replaces the game with a freshly seeded one.
    pub fn reseed(&mut self, seed: u32) {
        let options = *self.game.options();
        self.game = Game::new(options, seed as u64);
    }

    /// Plays one round. `choice` accepts anything `Choice` parses.
    pub fn play(&self, choice: &str) -> Result<JsValue, JsValue> {
        let choice = choice.parse::<Choice>().map_err(js_err)?;
        let result = self.game.submit_move(choice).map_err(js_err)?;
        to_js_value(&JsRound::from(result))
    }

    pub fn restart(&self) {
        self.game.reset();
    }

    pub fn choices(&self) -> Result<JsValue, JsValue> {
        let choices: Vec<JsChoice> = Choice::ALL.into_iter().map(JsChoice::from).collect();
        to_js_value(&choices)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            state: self.game.state(),
            last_round: self.game.last_result().map(JsRound::from),
            summary: self.game.summary(),
            summary_text: self.game.summary().map(|summary| summary.to_string()),
        };

        to_js_value(&snapshot)
    }
}

fn options(round_limit: Option<u32>) -> GameOptions {
    let options = GameOptions::default().with_history(false);
    match round_limit {
        Some(limit) => options.with_round_limit(limit),
        None => options,
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: GameState,
    last_round: Option<JsRound>,
    summary: Option<GameSummary>,
    summary_text: Option<String>,
}

#[derive(Serialize)]
struct JsChoice {
    choice: Choice,
    symbol: &'static str,
}

impl From<Choice> for JsChoice {
    fn from(choice: Choice) -> Self {
        Self {
            choice,
            symbol: choice.symbol(),
        }
    }
}

#[derive(Serialize)]
struct JsRound {
    #[serde(flatten)]
    result: RoundResult,
    label: &'static str,
    delta: i32,
    player_symbol: &'static str,
    opponent_symbol: &'static str,
}

impl From<RoundResult> for JsRound {
    fn from(result: RoundResult) -> Self {
        Self {
            result,
            label: result.outcome.label(),
            delta: result.outcome.score_delta(),
            player_symbol: result.player_choice.symbol(),
            opponent_symbol: result.opponent_choice.symbol(),
        }
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
