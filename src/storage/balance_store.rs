use crate::domain::Balance;

/// Where a session keeps its running balance.
pub trait BalanceStore {
    /// Current balance.
    fn load(&self) -> Balance;

    /// Replace the current balance.
    fn save(&mut self, balance: Balance);
}

/// Balance held in memory for the lifetime of the process. Nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemoryBalanceStore {
    balance: Balance,
}

impl InMemoryBalanceStore {
    /// Create a store starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store starting at the given balance.
    pub fn with_balance(balance: Balance) -> Self {
        Self { balance }
    }
}

impl BalanceStore for InMemoryBalanceStore {
    fn load(&self) -> Balance {
        self.balance.clone()
    }

    fn save(&mut self, balance: Balance) {
        self.balance = balance;
    }
}
