use super::coin::CoinLedger;
use super::inventory::InventoryStore;

/// Number of item slots in the machine.
pub const SLOT_COUNT: usize = 3;
/// Items loaded into each slot at startup.
pub const INITIAL_STOCK: u32 = 5;
/// Cost of any item, in coins.
pub const ITEM_PRICE: u32 = 2;

/// The single record of everything the machine holds.
///
/// Coins and inventory live together so that a purchase can inspect and
/// mutate both under one borrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineState {
    pub coins: CoinLedger,
    pub inventory: InventoryStore,
}

impl MachineState {
    pub fn new() -> Self {
        Self {
            coins: CoinLedger::new(),
            inventory: InventoryStore::new(SLOT_COUNT, INITIAL_STOCK),
        }
    }
}

impl Default for MachineState {
    fn default() -> Self {
        Self::new()
    }
}
