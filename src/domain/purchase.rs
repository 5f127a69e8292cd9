use super::state::{ITEM_PRICE, MachineState};
use crate::error::Result;
use serde::Serialize;

/// What a successful purchase hands back to the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dispensed {
    /// Items vended by this purchase. Always one.
    #[serde(rename = "quantity")]
    pub vended: u32,
    #[serde(skip)]
    pub remaining_stock: u32,
    #[serde(skip)]
    pub change: u32,
}

/// Result of a purchase attempt against a valid slot.
///
/// Running out of stock or money is an ordinary answer, not an error, so both
/// carry the coins the machine is still holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Dispensed(Dispensed),
    OutOfStock { coins: u32 },
    InsufficientFunds { coins: u32 },
}

impl MachineState {
    /// Runs the purchase decision for slot `id`.
    ///
    /// Stock is checked before funds, so an empty slot reports `OutOfStock`
    /// even when the balance is also short. Neither rejection touches the
    /// coins or the inventory. On success all held coins leave the machine:
    /// the price is kept and the rest comes back as change.
    pub fn attempt_purchase(&mut self, id: usize) -> Result<PurchaseOutcome> {
        let quantity = self.inventory.quantity_of(id)?;
        let coins = self.coins.balance();

        if quantity == 0 {
            return Ok(PurchaseOutcome::OutOfStock { coins });
        }
        if coins < ITEM_PRICE {
            return Ok(PurchaseOutcome::InsufficientFunds { coins });
        }

        let remaining_stock = self.inventory.decrement(id)?;
        let change = self.coins.drain() - ITEM_PRICE;

        Ok(PurchaseOutcome::Dispensed(Dispensed {
            vended: 1,
            remaining_stock,
            change,
        }))
    }
}
