use soroban_sdk::{contracttype, Address};

/// Pool configuration - immutable after creation
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolConfig {
    /// First asset of the pair
    pub token_a: Address,
    /// Second asset of the pair
    pub token_b: Address,
}

/// Pool accounting - stored in Instance storage for frequent access
///
/// `reserve_a` and `reserve_b` mirror the pool address's actual token
/// balances: the pool only moves its own balances through its entry
/// points, so the two never diverge. `total_shares` equals the sum of
/// every holder's share balance in the persistent ledger.
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolState {
    /// Reserve of token_a held by the pool
    pub reserve_a: i128,
    /// Reserve of token_b held by the pool
    pub reserve_b: i128,
    /// Total claim shares outstanding
    pub total_shares: i128,
}

impl PoolState {
    pub fn new() -> Self {
        Self {
            reserve_a: 0,
            reserve_b: 0,
            total_shares: 0,
        }
    }
}

impl Default for PoolState {
    fn default() -> Self {
        Self::new()
    }
}
