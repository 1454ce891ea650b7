#![deny(warnings)]

//! Turn engine for Dope Wars.
//!
//! A [`Game`] owns the player state for one game and consumes already-parsed
//! [`PlayerAction`] values one at a time. After each action it exposes a
//! read-only [`GameSnapshot`] for a presentation layer; once the last day is
//! played or the player quits, the final [`Outcome`] is available.

pub mod action;
pub mod engine;
pub mod score;
pub mod snapshot;

pub use action::PlayerAction;
pub use engine::{Game, TurnPhase};
pub use score::{evaluate, Outcome};
pub use snapshot::{GameSnapshot, Holding};

pub use dw_core::{GameConfig, GameError, ValidationError};
