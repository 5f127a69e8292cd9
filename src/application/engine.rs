use crate::domain::purchase::PurchaseOutcome;
use crate::domain::state::MachineState;
use crate::error::Result;
use parking_lot::Mutex;
use tracing::{debug, info};

/// The main entry point for operating the vending machine.
///
/// `VendingEngine` owns the single `MachineState` and serializes every read and
/// write through one lock. A purchase holds that lock from the stock check to
/// the dispense, so no coin insert, cancel, or other purchase can interleave
/// with it.
#[derive(Debug, Default)]
pub struct VendingEngine {
    state: Mutex<MachineState>,
}

impl VendingEngine {
    /// Creates an engine for a freshly stocked machine holding no coins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `amount` coins. Only a single unit is accepted; anything else
    /// leaves the balance unchanged. Returns the running total.
    pub fn insert_coin(&self, amount: i64) -> u32 {
        let total = self.state.lock().coins.insert(amount);
        debug!(amount, total, "coin inserted");
        total
    }

    /// Cancels the session and returns every held coin.
    pub fn cancel(&self) -> u32 {
        let returned = self.state.lock().coins.drain();
        info!(returned, "transaction cancelled");
        returned
    }

    pub fn balance(&self) -> u32 {
        self.state.lock().coins.balance()
    }

    /// Quantities for every slot, index-aligned to slot id.
    pub fn inventory(&self) -> Vec<u32> {
        self.state.lock().inventory.snapshot()
    }

    pub fn quantity(&self, id: usize) -> Result<u32> {
        self.state.lock().inventory.quantity_of(id)
    }

    /// Attempts to buy one item from slot `id`.
    pub fn purchase(&self, id: usize) -> Result<PurchaseOutcome> {
        let outcome = self.state.lock().attempt_purchase(id)?;
        match outcome {
            PurchaseOutcome::Dispensed(dispensed) => info!(
                slot = id,
                remaining = dispensed.remaining_stock,
                change = dispensed.change,
                "item dispensed"
            ),
            PurchaseOutcome::OutOfStock { coins } => {
                debug!(slot = id, coins, "purchase rejected: out of stock")
            }
            PurchaseOutcome::InsufficientFunds { coins } => {
                debug!(slot = id, coins, "purchase rejected: insufficient funds")
            }
        }
        Ok(outcome)
    }

    /// Consumes the engine and returns the final machine state.
    pub fn into_state(self) -> MachineState {
        self.state.into_inner()
    }
}
