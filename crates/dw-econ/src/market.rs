//! Market generation: random base prices scaled by commodity multipliers.

use dw_core::{GameConfig, LocationId, MarketListing};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

/// Unit price for a base draw: `round(base * multiplier)`, halves rounded
/// away from zero, never below 1.
///
/// Example:
/// assert_eq!(unit_price(100, Decimal::new(3, 0)), 300);
/// assert_eq!(unit_price(1, Decimal::ZERO), 1);
pub fn unit_price(base: u64, multiplier: Decimal) -> u64 {
    let scaled = match Decimal::from(base).checked_mul(multiplier) {
        Some(p) => p.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        None => return u64::MAX,
    };
    scaled.to_u64().unwrap_or(u64::MAX).max(1)
}

/// Generate the listing for every configured commodity, in configuration
/// order, drawing from `rng`.
///
/// Each commodity consumes exactly two draws (price, then quantity), so the
/// same seed always yields the same listing.
pub fn generate_listing<R: Rng + ?Sized>(
    cfg: &GameConfig,
    location: &LocationId,
    day: u32,
    rng: &mut R,
) -> Vec<MarketListing> {
    let m = &cfg.market;
    let price_range = m.base_price_min..=m.base_price_max.max(m.base_price_min);
    let qty_range = m.quantity_min..=m.quantity_max.max(m.quantity_min);

    let listing: Vec<MarketListing> = cfg
        .commodities
        .iter()
        .map(|c| {
            let base = rng.gen_range(price_range.clone());
            let qty = rng.gen_range(qty_range.clone());
            MarketListing {
                commodity: c.name.clone(),
                unit_price: unit_price(base, c.multiplier),
                available_quantity: qty,
            }
        })
        .collect();
    debug!(day, %location, commodities = listing.len(), "generated market");
    listing
}

/// Derive a seed for one day at one location from the per-game seed.
///
/// The location is hashed with FNV-1a so the result is stable across
/// processes and platforms; the parts are then mixed with a SplitMix64
/// finalizer.
pub fn day_seed(game_seed: u64, day: u32, location: &LocationId) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
    let loc_hash = location
        .0
        .bytes()
        .fold(FNV_OFFSET, |h, b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME));

    let mut z = game_seed
        ^ loc_hash.rotate_left(17)
        ^ u64::from(day).wrapping_mul(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Random source for one day at one location.
pub fn daily_rng(game_seed: u64, day: u32, location: &LocationId) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(day_seed(game_seed, day, location))
}

/// Listing for a day and location using the configuration's seed.
pub fn listing_for_day(cfg: &GameConfig, location: &LocationId, day: u32) -> Vec<MarketListing> {
    let mut rng = daily_rng(cfg.rng_seed, day, location);
    generate_listing(cfg, location, day, &mut rng)
}
