use crate::error::{Result, VendingError};

/// One addressable inventory position.
///
/// `id` matches the slot's position and never changes; `quantity` only ever
/// goes down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub id: usize,
    pub quantity: u32,
}

/// Fixed set of slots with their remaining stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryStore {
    slots: Vec<Slot>,
}

impl InventoryStore {
    /// Creates `slot_count` slots, each holding `stock` items.
    pub fn new(slot_count: usize, stock: u32) -> Self {
        let slots = (0..slot_count)
            .map(|id| Slot {
                id,
                quantity: stock,
            })
            .collect();
        Self { slots }
    }

    /// Quantities for every slot, index-aligned to slot id.
    pub fn snapshot(&self) -> Vec<u32> {
        self.slots.iter().map(|slot| slot.quantity).collect()
    }

    pub fn quantity_of(&self, id: usize) -> Result<u32> {
        self.slot(id).map(|slot| slot.quantity)
    }

    /// Removes one item from slot `id` and returns what is left.
    ///
    /// The caller must already hold exclusive access to the store and have
    /// checked that the slot is in stock. An empty slot stays at zero.
    pub fn decrement(&mut self, id: usize) -> Result<u32> {
        let slot = self
            .slots
            .get_mut(id)
            .ok_or(VendingError::InvalidSlot(id))?;
        debug_assert_eq!(slot.id, id);
        slot.quantity = slot.quantity.saturating_sub(1);
        Ok(slot.quantity)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    fn slot(&self, id: usize) -> Result<&Slot> {
        let slot = self.slots.get(id).ok_or(VendingError::InvalidSlot(id))?;
        debug_assert_eq!(slot.id, id);
        Ok(slot)
    }
}
