use soroban_sdk::contracterror;

/// Errors raised by the pool and its amount calculator.
///
/// Every variant is terminal for the current call: the pool never retries
/// internally and never exposes partially applied state.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    /// `initialize` was called on a pool that already has state
    AlreadyInitialized = 1,
    /// The pool has not been initialized yet
    NotInitialized = 2,
    /// token0 and token1 are the same contract
    IdenticalTokens = 3,
    /// Initial sqrt price is out of range or does not belong to the initial tick
    InvalidInitialPrice = 4,
    /// Position bounds are unordered or outside [MIN_TICK, MAX_TICK]
    InvalidTickRange = 5,
    /// Mint requested zero liquidity
    ZeroLiquidity = 6,
    /// The counterparty did not deliver the owed tokens
    InsufficientInputAmount = 7,
    /// Swap requested a zero amount
    ZeroAmount = 8,
    /// Not enough liquidity to move the price by the requested amount
    InsufficientLiquidity = 9,
    /// A token amount does not fit the token interface (i128)
    AmountOverflow = 10,
    /// Adding liquidity would overflow u128
    LiquidityOverflow = 11,
}
