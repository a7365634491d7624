use soroban_sdk::{contracttype, Address, U256};

/// Record of a committed mint
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintRecord {
    /// Contract that was called back to pay for the liquidity
    pub sender: Address,
    pub owner: Address,
    pub tick_lower: i32,
    pub tick_upper: i32,
    /// Liquidity added
    pub amount: u128,
    /// Token0 collected
    pub amount0: u128,
    /// Token1 collected
    pub amount1: u128,
}

/// Record of a committed swap
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapRecord {
    /// Contract that was called back to pay the input token
    pub sender: Address,
    pub recipient: Address,
    /// Token0 delta (positive = paid in, negative = paid out)
    pub amount0: i128,
    /// Token1 delta (positive = paid in, negative = paid out)
    pub amount1: i128,
    /// Price after the swap
    pub sqrt_price_x96: U256,
    /// Liquidity active after the swap
    pub liquidity: u128,
    /// Tick after the swap
    pub tick: i32,
}
