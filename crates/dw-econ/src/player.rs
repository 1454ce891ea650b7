use crate::inventory::Inventory;
use crate::ledger::Ledger;
use dw_core::{GameConfig, LocationId};
use serde::Serialize;

/// Everything the player owns plus where they are.
///
/// Balances and holdings are only reachable read-only from outside this
/// crate; use [`crate::ledger`] and [`crate::inventory`] to change them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerState {
    pub(crate) ledger: Ledger,
    pub(crate) inventory: Inventory,
    pub(crate) location: LocationId,
}

impl PlayerState {
    pub fn new(ledger: Ledger, inventory: Inventory, location: LocationId) -> Self {
        Self {
            ledger,
            inventory,
            location,
        }
    }

    /// Starting balances, an empty inventory over every configured commodity,
    /// and the first configured location. `None` if there are no locations.
    pub fn from_config(cfg: &GameConfig) -> Option<Self> {
        let location = cfg.starting_location()?.clone();
        Some(Self::new(
            Ledger::new(cfg.starting_cash, cfg.starting_debt),
            Inventory::for_commodities(cfg.commodities.iter().map(|c| c.name.clone())),
            location,
        ))
    }

    pub fn cash(&self) -> u64 {
        self.ledger.cash()
    }

    pub fn debt(&self) -> u64 {
        self.ledger.debt()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn location(&self) -> &LocationId {
        &self.location
    }

    /// Set the current location. Callers check membership in the
    /// configuration first.
    pub fn relocate(&mut self, to: LocationId) {
        self.location = to;
    }
}
