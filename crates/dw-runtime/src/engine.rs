//! Turn state machine.
//!
//! A turn is zero or more trade/debt actions followed by exactly one move
//! (or a quit). Moving advances the day; when the day passes the configured
//! total the game is over and scored.

use crate::action::PlayerAction;
use crate::score::{evaluate, Outcome};
use crate::snapshot::{GameSnapshot, Holding};
use dw_core::{validate_config, GameConfig, GameError, MarketListing, ValidationError};
use dw_econ::PlayerState;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Where the engine is within a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    /// Accepting trade, debt, move or quit actions for the current day.
    AwaitingAction,
    /// Transient: a move was accepted and the day is being advanced.
    TurnComplete,
    /// Terminal. The outcome has been computed; no further actions.
    GameOver,
}

/// One game: configuration, player state, the current day and today's market.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    day: u32,
    player: PlayerState,
    market: Vec<MarketListing>,
    phase: TurnPhase,
    outcome: Option<Outcome>,
}

impl Game {
    /// Start a game on day 1 at the first configured location.
    pub fn new(config: GameConfig) -> Result<Self, ValidationError> {
        validate_config(&config)?;
        let player = PlayerState::from_config(&config).ok_or(ValidationError::NoLocations)?;
        let mut game = Self {
            config,
            day: 1,
            player,
            market: Vec::new(),
            phase: TurnPhase::AwaitingAction,
            outcome: None,
        };
        game.open_market();
        info!(
            days = game.config.total_days,
            cash = game.player.cash(),
            debt = game.player.debt(),
            location = %game.player.location(),
            "game started"
        );
        Ok(game)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn days_remaining(&self) -> u32 {
        self.config.total_days.saturating_sub(self.day)
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn market(&self) -> &[MarketListing] {
        &self.market
    }

    pub fn is_over(&self) -> bool {
        self.phase == TurnPhase::GameOver
    }

    /// Final verdict, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Apply one action and return the resulting snapshot.
    ///
    /// On error nothing has changed and the engine is still waiting for an
    /// action on the same day.
    pub fn apply(&mut self, action: PlayerAction) -> Result<GameSnapshot, GameError> {
        match self.dispatch(&action) {
            Ok(()) => Ok(self.snapshot()),
            Err(e) => {
                warn!(day = self.day, ?action, error = %e, "action rejected");
                Err(e)
            }
        }
    }

    /// Apply actions in order, stopping at the first rejected one. Actions
    /// after the game is over are rejected like any other.
    ///
    /// Returns the outcome if the game finished.
    pub fn apply_all<I>(&mut self, actions: I) -> Result<Option<Outcome>, GameError>
    where
        I: IntoIterator<Item = PlayerAction>,
    {
        for action in actions {
            self.apply(action)?;
        }
        Ok(self.outcome)
    }

    /// Read-only view for the presentation layer.
    pub fn snapshot(&self) -> GameSnapshot {
        let inventory = self
            .config
            .commodities
            .iter()
            .map(|c| Holding {
                commodity: c.name.clone(),
                quantity: self.player.inventory().quantity(&c.name),
            })
            .collect();
        GameSnapshot {
            day: self.day,
            total_days: self.config.total_days,
            days_remaining: self.days_remaining(),
            phase: self.phase,
            cash: self.player.cash(),
            debt: self.player.debt(),
            inventory,
            location: self.player.location().clone(),
            locations: self.config.locations.clone(),
            market: self.market.clone(),
            outcome: self.outcome,
        }
    }

    fn dispatch(&mut self, action: &PlayerAction) -> Result<(), GameError> {
        if self.phase != TurnPhase::AwaitingAction {
            return Err(GameError::InvalidActionForState("the game is over"));
        }
        match action {
            PlayerAction::Buy { commodity, qty } => {
                let i = self.listing_index(commodity)?;
                dw_econ::buy(&mut self.player, *qty, &self.market[i])?;
                self.market[i].available_quantity -= *qty;
            }
            PlayerAction::Sell { commodity, qty } => {
                let i = self.listing_index(commodity)?;
                dw_econ::sell(&mut self.player, *qty, &self.market[i])?;
                let listing = &mut self.market[i];
                listing.available_quantity = listing.available_quantity.saturating_add(*qty);
            }
            PlayerAction::PayDebt { amount } => {
                dw_econ::pay_debt(&mut self.player, *amount)?;
            }
            PlayerAction::TakeLoan { amount } => {
                dw_econ::take_loan(&mut self.player, &self.config, *amount)?;
            }
            PlayerAction::Move { location } => {
                let to = self
                    .config
                    .location(location)
                    .cloned()
                    .ok_or_else(|| GameError::UnknownLocation(location.clone()))?;
                debug!(day = self.day, from = %self.player.location(), %to, "moving");
                self.player.relocate(to);
                self.phase = TurnPhase::TurnComplete;
                self.end_turn();
            }
            PlayerAction::Quit => {
                info!(day = self.day, "player quit");
                self.finish();
            }
        }
        Ok(())
    }

    fn listing_index(&self, name: &str) -> Result<usize, GameError> {
        let name = name.trim();
        self.market
            .iter()
            .position(|l| l.commodity.0.eq_ignore_ascii_case(name))
            .ok_or_else(|| GameError::UnknownCommodity(name.to_string()))
    }

    fn end_turn(&mut self) {
        self.day += 1;
        if self.day > self.config.total_days {
            self.finish();
        } else {
            self.phase = TurnPhase::AwaitingAction;
            self.open_market();
            info!(
                day = self.day,
                location = %self.player.location(),
                cash = self.player.cash(),
                debt = self.player.debt(),
                "new day"
            );
        }
    }

    fn open_market(&mut self) {
        self.market = dw_econ::listing_for_day(&self.config, self.player.location(), self.day);
    }

    fn finish(&mut self) {
        self.phase = TurnPhase::GameOver;
        if self.outcome.is_none() {
            let outcome = evaluate(&self.player);
            info!(day = self.day, ?outcome, "game over");
            self.outcome = Some(outcome);
        }
    }
}
