#![deny(warnings)]

//! Economic model for Dope Wars.
//!
//! This crate provides:
//! - Seeded per-day, per-location market generation
//! - The player's ledger (cash and debt) with debt payment and loans
//! - The player's inventory with atomic buy/sell settlement
//!
//! All mutation of a [`PlayerState`] goes through the functions in
//! [`ledger`] and [`inventory`], which enforce the non-negativity, supply and
//! debt-ceiling invariants.

pub mod inventory;
pub mod ledger;
pub mod market;
pub mod player;

pub use inventory::{buy, can_buy, can_sell, sell, Inventory};
pub use ledger::{pay_debt, take_loan, Ledger};
pub use market::{daily_rng, day_seed, generate_listing, listing_for_day, unit_price};
pub use player::PlayerState;
