use crate::engine::TurnPhase;
use crate::score::Outcome;
use dw_core::{CommodityId, LocationId, MarketListing};
use serde::Serialize;

/// Units held of one commodity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Holding {
    pub commodity: CommodityId,
    pub quantity: u64,
}

/// Read-only view of a game for rendering. Contains data only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// 1-based; exceeds `total_days` once every turn has been played.
    pub day: u32,
    pub total_days: u32,
    pub days_remaining: u32,
    pub phase: TurnPhase,
    pub cash: u64,
    pub debt: u64,
    /// Holdings in configured commodity order, zeros included.
    pub inventory: Vec<Holding>,
    pub location: LocationId,
    /// Travel destinations.
    pub locations: Vec<LocationId>,
    /// Today's prices and remaining supply at `location`.
    pub market: Vec<MarketListing>,
    pub outcome: Option<Outcome>,
}
