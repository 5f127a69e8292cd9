/// The only coin value the ledger accepts per insert.
pub const COIN_UNIT: i64 = 1;

/// Authoritative count of quarters inserted and not yet spent or returned.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoinLedger {
    held: u32,
}

impl CoinLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts one coin when `amount` is exactly one unit.
    ///
    /// Any other amount is ignored without error. Returns the running total.
    pub fn insert(&mut self, amount: i64) -> u32 {
        if amount == COIN_UNIT {
            self.held = self.held.saturating_add(1);
        }
        self.held
    }

    /// Returns every held coin and resets the ledger to zero.
    pub fn drain(&mut self) -> u32 {
        std::mem::take(&mut self.held)
    }

    pub fn balance(&self) -> u32 {
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_one_coin_increments() {
        let mut ledger = CoinLedger::new();
        assert_eq!(ledger.insert(1), 1);
        assert_eq!(ledger.insert(1), 2);
        assert_eq!(ledger.balance(), 2);
    }

    #[test]
    fn test_insert_other_amounts_is_noop() {
        let mut ledger = CoinLedger::new();
        ledger.insert(1);

        assert_eq!(ledger.insert(0), 1);
        assert_eq!(ledger.insert(-1), 1);
        assert_eq!(ledger.insert(2), 1);
        assert_eq!(ledger.balance(), 1);
    }

    #[test]
    fn test_insert_saturates_at_max() {
        let mut ledger = CoinLedger { held: u32::MAX };
        assert_eq!(ledger.insert(1), u32::MAX);
        assert_eq!(ledger.balance(), u32::MAX);
    }

    #[test]
    fn test_drain_returns_and_zeroes() {
        let mut ledger = CoinLedger::new();
        ledger.insert(1);
        ledger.insert(1);

        assert_eq!(ledger.drain(), 2);
        assert_eq!(ledger.balance(), 0);
    }

    #[test]
    fn test_drain_empty_ledger() {
        let mut ledger = CoinLedger::new();
        assert_eq!(ledger.drain(), 0);
        assert_eq!(ledger, CoinLedger::new());
    }
}
