use soroban_sdk::contracterror;

/// Rejection codes for pool operations
///
/// Every failure is a synchronous rejection of the current call; the
/// host rolls back all storage writes and token transfers, so no error
/// leaves reserves or shares partially updated. Failures of the token
/// contracts themselves (an underfunded pull) surface as the token's
/// own error and abort the invocation the same way.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    /// Non-initial deposit does not match the current reserve ratio
    RatioMismatch = 1,
    /// Deposit would mint zero shares
    ZeroShares = 2,
    /// Withdrawal attempted while no shares are outstanding
    EmptyPool = 3,
    /// Withdrawal would return zero of either asset
    ZeroWithdrawal = 4,
    /// Swap specifies an asset that is not in the pool
    InvalidAsset = 5,
    /// Swap attempted with zero input
    ZeroAmountIn = 6,
    /// Computed output below the caller's floor
    SlippageExceeded = 7,
    /// Pool created with the same token on both sides
    IdenticalAssets = 8,
    /// Negative amount passed where a quantity is expected
    InvalidAmount = 9,
    /// Caller holds fewer shares than it tries to redeem
    InsufficientShares = 10,
    /// Reserve arithmetic overflow
    Overflow = 11,
}
