use dw_econ::PlayerState;
use serde::{Deserialize, Serialize};

/// Final verdict of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    /// Debt remained at the end, whether the days ran out or the player quit.
    Lost { final_debt: u64 },
    /// Debt-free; the score is the remaining cash.
    Won { score: u64 },
}

/// Score a finished game. Unsold inventory is worth nothing.
pub fn evaluate(player: &PlayerState) -> Outcome {
    match player.debt() {
        0 => Outcome::Won {
            score: player.cash(),
        },
        debt => Outcome::Lost { final_debt: debt },
    }
}
