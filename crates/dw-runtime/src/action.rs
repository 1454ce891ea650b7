use serde::{Deserialize, Serialize};

/// One player decision, as delivered by the input layer.
///
/// Identifiers are raw names; the engine resolves and validates them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PlayerAction {
    Buy { commodity: String, qty: u64 },
    Sell { commodity: String, qty: u64 },
    PayDebt { amount: u64 },
    TakeLoan { amount: u64 },
    /// Ends the turn. Moving to the current location is allowed.
    Move { location: String },
    /// Ends the game immediately.
    Quit,
}
