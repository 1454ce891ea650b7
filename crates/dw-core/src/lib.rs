#![deny(warnings)]

//! Core domain models and invariants for Dope Wars.
//!
//! This crate defines the serializable configuration and market types shared
//! by the economy and runtime crates, the action error taxonomy, and
//! validation helpers that guarantee a configuration is playable.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Identifier of a tradeable commodity, e.g. "Cocaine".
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommodityId(pub String);

impl fmt::Display for CommodityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CommodityId {
    fn from(s: &str) -> Self {
        CommodityId(s.to_string())
    }
}

/// Identifier of a location the player can travel to, e.g. "Brooklyn".
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub String);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocationId {
    fn from(s: &str) -> Self {
        LocationId(s.to_string())
    }
}

/// A tradeable good. Immutable once configured.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Commodity {
    /// Commodity name, unique within a configuration.
    pub name: CommodityId,
    /// Scale applied to the day's random base price (>= 0).
    pub multiplier: Decimal,
}

impl Commodity {
    pub fn new(name: &str, multiplier: Decimal) -> Self {
        Self {
            name: CommodityId::from(name),
            multiplier,
        }
    }
}

/// Inclusive ranges the market generator draws from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketParams {
    pub base_price_min: u64,
    pub base_price_max: u64,
    pub quantity_min: u64,
    pub quantity_max: u64,
}

impl Default for MarketParams {
    fn default() -> Self {
        Self {
            base_price_min: 1,
            base_price_max: 100,
            quantity_min: 1,
            quantity_max: 100,
        }
    }
}

/// Game configuration. Immutable for the lifetime of a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Travel destinations; the first one is the starting location.
    pub locations: Vec<LocationId>,
    /// Commodities in listing order.
    pub commodities: Vec<Commodity>,
    /// Number of turns (days) in a game.
    pub total_days: u32,
    pub starting_cash: u64,
    pub starting_debt: u64,
    /// A new loan is only granted while debt is strictly below this value.
    pub debt_ceiling_for_new_loan: u64,
    /// Largest single loan.
    pub max_loan_amount: u64,
    /// Seed for deterministic market generation.
    #[serde(default)]
    pub rng_seed: u64,
    #[serde(default)]
    pub market: MarketParams,
}

impl Default for GameConfig {
    /// The classic New York setup.
    fn default() -> Self {
        Self {
            locations: ["Bronx", "Brooklyn", "Manhattan", "Queens", "Staten Island"]
                .into_iter()
                .map(LocationId::from)
                .collect(),
            commodities: vec![
                Commodity::new("Weed", Decimal::new(10, 1)),
                Commodity::new("Cocaine", Decimal::new(30, 1)),
                Commodity::new("Heroin", Decimal::new(25, 1)),
                Commodity::new("Meth", Decimal::new(15, 1)),
                Commodity::new("LSD", Decimal::new(20, 1)),
                Commodity::new("Ecstasy", Decimal::new(20, 1)),
            ],
            total_days: 30,
            starting_cash: 2000,
            starting_debt: 5500,
            debt_ceiling_for_new_loan: 1000,
            max_loan_amount: 10_000,
            rng_seed: 0,
            market: MarketParams::default(),
        }
    }
}

impl GameConfig {
    /// Look up a commodity by name, ignoring ASCII case.
    pub fn commodity(&self, name: &str) -> Option<&Commodity> {
        let name = name.trim();
        self.commodities
            .iter()
            .find(|c| c.name.0.eq_ignore_ascii_case(name))
    }

    /// Look up a location by name, ignoring ASCII case.
    pub fn location(&self, name: &str) -> Option<&LocationId> {
        let name = name.trim();
        self.locations
            .iter()
            .find(|l| l.0.eq_ignore_ascii_case(name))
    }

    /// Location the player starts in.
    pub fn starting_location(&self) -> Option<&LocationId> {
        self.locations.first()
    }
}

/// One commodity's price and supply for the current day and location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketListing {
    pub commodity: CommodityId,
    /// Buy and sell price per unit (> 0).
    pub unit_price: u64,
    /// Units still available for purchase today.
    pub available_quantity: u64,
}

/// Why a player action was rejected. State is never modified when one of
/// these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("insufficient funds: need ${needed}, have ${available}")]
    InsufficientFunds { needed: u64, available: u64 },
    #[error("only {available} units of {commodity} for sale, requested {requested}")]
    InsufficientMarketSupply {
        commodity: CommodityId,
        requested: u64,
        available: u64,
    },
    #[error("holding {held} units of {commodity}, cannot sell {requested}")]
    InsufficientInventory {
        commodity: CommodityId,
        requested: u64,
        held: u64,
    },
    #[error("invalid amount: {0}")]
    InvalidAmount(u64),
    #[error("debt ${debt} is not below the new-loan ceiling ${ceiling}")]
    DebtCeilingExceeded { debt: u64, ceiling: u64 },
    #[error("unknown commodity: {0}")]
    UnknownCommodity(String),
    #[error("unknown location: {0}")]
    UnknownLocation(String),
    #[error("action not allowed: {0}")]
    InvalidActionForState(&'static str),
}

/// Validation errors for configuration invariants.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("at least one location is required")]
    NoLocations,
    #[error("at least one commodity is required")]
    NoCommodities,
    #[error("identifiers must not be blank")]
    BlankIdentifier,
    #[error("duplicate location: {0}")]
    DuplicateLocation(String),
    #[error("duplicate commodity: {0}")]
    DuplicateCommodity(String),
    #[error("multiplier for {0} must be >= 0")]
    NegativeMultiplier(String),
    #[error("total days must be > 0")]
    NoDays,
    #[error("invalid market range: {0}")]
    InvalidMarketRange(&'static str),
}

/// Validate a configuration, including uniqueness of identifiers.
///
/// Uniqueness is case-insensitive because lookups are.
pub fn validate_config(cfg: &GameConfig) -> Result<(), ValidationError> {
    if cfg.locations.is_empty() {
        return Err(ValidationError::NoLocations);
    }
    if cfg.commodities.is_empty() {
        return Err(ValidationError::NoCommodities);
    }
    if cfg.total_days == 0 {
        return Err(ValidationError::NoDays);
    }

    let mut seen = BTreeSet::new();
    for l in &cfg.locations {
        if l.0.trim().is_empty() {
            return Err(ValidationError::BlankIdentifier);
        }
        if !seen.insert(l.0.to_ascii_lowercase()) {
            return Err(ValidationError::DuplicateLocation(l.0.clone()));
        }
    }

    seen.clear();
    for c in &cfg.commodities {
        if c.name.0.trim().is_empty() {
            return Err(ValidationError::BlankIdentifier);
        }
        if !seen.insert(c.name.0.to_ascii_lowercase()) {
            return Err(ValidationError::DuplicateCommodity(c.name.0.clone()));
        }
        if c.multiplier < Decimal::ZERO {
            return Err(ValidationError::NegativeMultiplier(c.name.0.clone()));
        }
    }

    validate_market(&cfg.market)
}

/// Validate market draw ranges: non-empty, and base prices strictly positive.
pub fn validate_market(m: &MarketParams) -> Result<(), ValidationError> {
    if m.base_price_min == 0 {
        return Err(ValidationError::InvalidMarketRange("base price must start at 1"));
    }
    if m.base_price_min > m.base_price_max {
        return Err(ValidationError::InvalidMarketRange("base price range is empty"));
    }
    if m.quantity_min > m.quantity_max {
        return Err(ValidationError::InvalidMarketRange("quantity range is empty"));
    }
    Ok(())
}
