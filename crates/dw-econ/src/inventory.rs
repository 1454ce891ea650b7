//! Owned commodity quantities and trade settlement.
//!
//! Buying and selling touch both the ledger and the inventory. Every check
//! runs before anything is written, so a trade is applied in full or not at
//! all.

use crate::player::PlayerState;
use dw_core::{CommodityId, GameError, MarketListing};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Units owned per commodity. Missing entries count as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    holdings: BTreeMap<CommodityId, u64>,
}

impl Inventory {
    /// Inventory holding zero units of each given commodity.
    pub fn for_commodities<I: IntoIterator<Item = CommodityId>>(ids: I) -> Self {
        Self {
            holdings: ids.into_iter().map(|id| (id, 0)).collect(),
        }
    }

    pub fn quantity(&self, commodity: &CommodityId) -> u64 {
        self.holdings.get(commodity).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CommodityId, u64)> {
        self.holdings.iter().map(|(k, v)| (k, *v))
    }

    fn set(&mut self, commodity: &CommodityId, qty: u64) {
        self.holdings.insert(commodity.clone(), qty);
    }
}

/// Whether `qty` units of the listed commodity can be bought: within today's
/// supply and affordable with current cash.
pub fn can_buy(player: &PlayerState, qty: u64, listing: &MarketListing) -> bool {
    check_buy(player, qty, listing).is_ok()
}

/// Buy `qty` units at the listing's price. Returns the total cost.
pub fn buy(player: &mut PlayerState, qty: u64, listing: &MarketListing) -> Result<u64, GameError> {
    let (cost, held) = check_buy(player, qty, listing)?;
    player.ledger.cash -= cost;
    player.inventory.set(&listing.commodity, held);
    debug!(commodity = %listing.commodity, qty, cost, cash = player.ledger.cash, "bought");
    Ok(cost)
}

/// Whether `qty` units of `commodity` are held.
pub fn can_sell(player: &PlayerState, commodity: &CommodityId, qty: u64) -> bool {
    qty <= player.inventory.quantity(commodity)
}

/// Sell `qty` units at the listing's price. Returns the proceeds.
pub fn sell(player: &mut PlayerState, qty: u64, listing: &MarketListing) -> Result<u64, GameError> {
    let commodity = &listing.commodity;
    let held = player.inventory.quantity(commodity);
    if qty > held {
        return Err(GameError::InsufficientInventory {
            commodity: commodity.clone(),
            requested: qty,
            held,
        });
    }
    let proceeds = qty
        .checked_mul(listing.unit_price)
        .ok_or(GameError::InvalidAmount(qty))?;
    let cash = player
        .ledger
        .cash
        .checked_add(proceeds)
        .ok_or(GameError::InvalidAmount(qty))?;
    player.ledger.cash = cash;
    player.inventory.set(commodity, held - qty);
    debug!(%commodity, qty, proceeds, cash, "sold");
    Ok(proceeds)
}

/// Validate a purchase, returning the cost and the resulting holding.
fn check_buy(
    player: &PlayerState,
    qty: u64,
    listing: &MarketListing,
) -> Result<(u64, u64), GameError> {
    if qty > listing.available_quantity {
        return Err(GameError::InsufficientMarketSupply {
            commodity: listing.commodity.clone(),
            requested: qty,
            available: listing.available_quantity,
        });
    }
    let cash = player.ledger.cash;
    let cost = qty
        .checked_mul(listing.unit_price)
        .ok_or(GameError::InsufficientFunds {
            needed: u64::MAX,
            available: cash,
        })?;
    if cost > cash {
        return Err(GameError::InsufficientFunds {
            needed: cost,
            available: cash,
        });
    }
    let held = player
        .inventory
        .quantity(&listing.commodity)
        .checked_add(qty)
        .ok_or(GameError::InvalidAmount(qty))?;
    Ok((cost, held))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use dw_core::LocationId;
    use proptest::prelude::*;

    fn cocaine(price: u64, available: u64) -> MarketListing {
        MarketListing {
            commodity: CommodityId::from("Cocaine"),
            unit_price: price,
            available_quantity: available,
        }
    }

    fn player(cash: u64) -> PlayerState {
        PlayerState::new(
            Ledger::new(cash, 5500),
            Inventory::for_commodities([CommodityId::from("Weed"), CommodityId::from("Cocaine")]),
            LocationId::from("Bronx"),
        )
    }

    #[test]
    fn buy_until_broke() {
        let mut p = player(2000);
        let listing = cocaine(300, 50);
        assert_eq!(buy(&mut p, 5, &listing).unwrap(), 1500);
        assert_eq!(p.cash(), 500);
        assert_eq!(p.inventory().quantity(&listing.commodity), 5);

        let before = p.clone();
        assert!(!can_buy(&p, 1, &listing));
        assert_eq!(
            buy(&mut p, 1, &listing),
            Err(GameError::InsufficientFunds {
                needed: 300,
                available: 500
            })
        );
        assert_eq!(p, before);
    }

    #[test]
    fn buy_capped_by_supply() {
        let mut p = player(1_000_000);
        let listing = cocaine(10, 3);
        assert!(can_buy(&p, 3, &listing));
        assert!(!can_buy(&p, 4, &listing));
        let before = p.clone();
        assert!(matches!(
            buy(&mut p, 4, &listing),
            Err(GameError::InsufficientMarketSupply { requested: 4, available: 3, .. })
        ));
        assert_eq!(p, before);
    }

    #[test]
    fn sell_requires_holdings() {
        let mut p = player(100);
        let listing = cocaine(10, 3);
        assert!(can_sell(&p, &listing.commodity, 0));
        assert!(!can_sell(&p, &listing.commodity, 1));
        let before = p.clone();
        assert_eq!(
            sell(&mut p, 1, &listing),
            Err(GameError::InsufficientInventory {
                commodity: listing.commodity.clone(),
                requested: 1,
                held: 0
            })
        );
        assert_eq!(p, before);
    }

    #[test]
    fn overflowing_cost_is_unaffordable() {
        let p = player(u64::MAX - 1);
        let listing = cocaine(u64::MAX, u64::MAX);
        assert!(!can_buy(&p, 2, &listing));
    }

    #[test]
    fn overflowing_cost_refused_even_with_max_cash() {
        let mut p = player(u64::MAX);
        let listing = cocaine(u64::MAX, 3);
        let before = p.clone();
        assert!(!can_buy(&p, 3, &listing));
        assert_eq!(
            buy(&mut p, 3, &listing),
            Err(GameError::InsufficientFunds {
                needed: u64::MAX,
                available: u64::MAX
            })
        );
        assert_eq!(p, before);
        assert_eq!(buy(&mut p, 1, &listing), Ok(u64::MAX));
        assert_eq!(p.cash(), 0);
    }

    proptest! {
        #[test]
        fn buy_then_sell_round_trips(cash in 0u64..1_000_000, price in 1u64..1000, qty in 0u64..100) {
            let mut p = player(cash);
            let listing = cocaine(price, 100);
            let before = p.clone();
            if can_buy(&p, qty, &listing) {
                let cost = buy(&mut p, qty, &listing).unwrap();
                prop_assert_eq!(cost, qty * price);
                prop_assert_eq!(p.cash(), cash - qty * price);
                prop_assert_eq!(p.inventory().quantity(&listing.commodity), qty);
                prop_assert_eq!(p.debt(), before.debt());
                let proceeds = sell(&mut p, qty, &listing).unwrap();
                prop_assert_eq!(proceeds, cost);
                prop_assert_eq!(p, before);
            } else {
                prop_assert!(qty * price > cash);
                prop_assert!(buy(&mut p, qty, &listing).is_err());
                prop_assert_eq!(p, before);
            }
        }

        #[test]
        fn sell_credits_cash(held in 0u64..100, qty in 0u64..100, price in 1u64..1000) {
            let mut p = player(1_000_000);
            let listing = cocaine(price, held);
            buy(&mut p, held, &listing).unwrap();
            let cash = p.cash();
            match sell(&mut p, qty, &listing) {
                Ok(proceeds) => {
                    prop_assert!(qty <= held);
                    prop_assert_eq!(proceeds, qty * price);
                    prop_assert_eq!(p.cash(), cash + qty * price);
                    prop_assert_eq!(p.inventory().quantity(&listing.commodity), held - qty);
                }
                Err(_) => {
                    prop_assert!(qty > held);
                    prop_assert_eq!(p.cash(), cash);
                    prop_assert_eq!(p.inventory().quantity(&listing.commodity), held);
                }
            }
        }
    }
}
