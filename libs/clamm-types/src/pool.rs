use soroban_sdk::{contracttype, Address, U256};

use crate::PoolError;

/// Token pair traded by the pool - immutable after initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolTokens {
    pub token0: Address,
    pub token1: Address,
}

impl PoolTokens {
    pub fn new(token0: Address, token1: Address) -> Result<Self, PoolError> {
        if token0 == token1 {
            return Err(PoolError::IdenticalTokens);
        }
        Ok(Self { token0, token1 })
    }
}

/// Current price of the pool.
///
/// `tick` is always the tick whose price range contains `sqrt_price_x96`,
/// so the two fields are only ever replaced together.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceState {
    /// Current sqrt(price) as Q64.96 (at most 160 bits)
    pub sqrt_price_x96: U256,
    /// Current tick index
    pub tick: i32,
}

/// Current pool state - stored in Instance storage for frequent access
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    pub price: PriceState,
    /// Total liquidity currently active
    pub liquidity: u128,
}

impl PoolState {
    pub fn new(sqrt_price_x96: U256, tick: i32) -> Self {
        Self {
            price: PriceState {
                sqrt_price_x96,
                tick,
            },
            liquidity: 0,
        }
    }

    pub fn set_price(&mut self, price: PriceState) {
        self.price = price;
    }

    pub fn add_liquidity(&mut self, amount: u128) -> Result<(), PoolError> {
        self.liquidity = self
            .liquidity
            .checked_add(amount)
            .ok_or(PoolError::LiquidityOverflow)?;
        Ok(())
    }
}

/// Outcome of a single swap step as computed by an amount calculator.
///
/// Amounts are signed from the pool's point of view: positive is paid into
/// the pool, negative is paid out of it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapQuote {
    pub next_sqrt_price_x96: U256,
    pub next_tick: i32,
    pub amount0: i128,
    pub amount1: i128,
}

impl SwapQuote {
    pub fn next_price(&self) -> PriceState {
        PriceState {
            sqrt_price_x96: self.next_sqrt_price_x96.clone(),
            tick: self.next_tick,
        }
    }
}
