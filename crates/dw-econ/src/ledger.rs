//! Cash and debt balances and their legal transitions.

use crate::player::PlayerState;
use dw_core::{GameConfig, GameError};
use serde::Serialize;
use tracing::debug;

/// Cash on hand and outstanding debt. Both are unsigned, so neither can
/// go negative at rest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Ledger {
    pub(crate) cash: u64,
    pub(crate) debt: u64,
}

impl Ledger {
    pub fn new(cash: u64, debt: u64) -> Self {
        Self { cash, debt }
    }

    pub fn cash(&self) -> u64 {
        self.cash
    }

    pub fn debt(&self) -> u64 {
        self.debt
    }

    /// Largest amount that can be repaid right now.
    pub fn max_payment(&self) -> u64 {
        self.cash.min(self.debt)
    }

    /// Whether a new loan may be requested at the given ceiling.
    pub fn loan_allowed(&self, ceiling: u64) -> bool {
        self.debt < ceiling
    }
}

/// Repay `amount` of debt from cash. Requires `amount <= min(cash, debt)`.
pub fn pay_debt(player: &mut PlayerState, amount: u64) -> Result<(), GameError> {
    let ledger = &mut player.ledger;
    if amount > ledger.max_payment() {
        return Err(GameError::InvalidAmount(amount));
    }
    ledger.cash -= amount;
    ledger.debt -= amount;
    debug!(amount, cash = ledger.cash, debt = ledger.debt, "debt paid");
    Ok(())
}

/// Borrow `amount`, adding it to both cash and debt.
///
/// Refused with `DebtCeilingExceeded` whenever debt is at or above the
/// configured ceiling, whatever the amount; otherwise the amount must be in
/// `1..=max_loan_amount`.
pub fn take_loan(player: &mut PlayerState, cfg: &GameConfig, amount: u64) -> Result<(), GameError> {
    let ledger = &mut player.ledger;
    if !ledger.loan_allowed(cfg.debt_ceiling_for_new_loan) {
        return Err(GameError::DebtCeilingExceeded {
            debt: ledger.debt,
            ceiling: cfg.debt_ceiling_for_new_loan,
        });
    }
    if amount == 0 || amount > cfg.max_loan_amount {
        return Err(GameError::InvalidAmount(amount));
    }
    let cash = ledger
        .cash
        .checked_add(amount)
        .ok_or(GameError::InvalidAmount(amount))?;
    let debt = ledger
        .debt
        .checked_add(amount)
        .ok_or(GameError::InvalidAmount(amount))?;
    ledger.cash = cash;
    ledger.debt = debt;
    debug!(amount, cash, debt, "loan taken");
    Ok(())
}
