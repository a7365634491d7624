use crate::settlement::{Received, SettlementRequest, Settler};
use clamm_math::AmountCalculator;
use clamm_types::{PoolError, PriceState, SwapQuote};
use soroban_sdk::{Env, U256};

/// Helper to run test code within a contract context
pub fn with_contract<F, R>(env: &Env, f: F) -> R
where
    F: FnOnce() -> R,
{
    let contract_id = env.register(crate::ClammPool, ());
    env.as_contract(&contract_id, f)
}

/// Settler that reports a fixed amount without touching any token
pub struct FixedSettler {
    pub received: Received,
}

impl FixedSettler {
    pub fn paying(amount0: i128, amount1: i128) -> Self {
        Self {
            received: Received { amount0, amount1 },
        }
    }
}

impl Settler for FixedSettler {
    fn collect(&self, _env: &Env, _request: &SettlementRequest) -> Received {
        self.received
    }
}

/// Calculator returning constant amounts regardless of inputs
pub struct FixedQuote;

impl AmountCalculator for FixedQuote {
    fn mint_amounts(
        &self,
        _env: &Env,
        _price: &PriceState,
        _tick_lower: i32,
        _tick_upper: i32,
        _liquidity: u128,
    ) -> Result<(u128, u128), PoolError> {
        Ok((998976618347425280, 5_000_000_000_000_000_000_000))
    }

    fn swap_quote(
        &self,
        env: &Env,
        _price: &PriceState,
        _liquidity: u128,
        _zero_for_one: bool,
        _amount_specified: i128,
    ) -> Result<SwapQuote, PoolError> {
        Ok(SwapQuote {
            next_sqrt_price_x96: U256::from_u128(env, 5604469350942327889444743441197),
            next_tick: 85184,
            amount0: -8396714242162444,
            amount1: 42_000_000_000_000_000_000,
        })
    }
}

/// Calculator whose swap quote charges both tokens and pays out neither
pub struct BothSidesInQuote;

impl AmountCalculator for BothSidesInQuote {
    fn mint_amounts(
        &self,
        _env: &Env,
        _price: &PriceState,
        _tick_lower: i32,
        _tick_upper: i32,
        _liquidity: u128,
    ) -> Result<(u128, u128), PoolError> {
        Ok((0, 0))
    }

    fn swap_quote(
        &self,
        _env: &Env,
        price: &PriceState,
        _liquidity: u128,
        _zero_for_one: bool,
        _amount_specified: i128,
    ) -> Result<SwapQuote, PoolError> {
        Ok(SwapQuote {
            next_sqrt_price_x96: price.sqrt_price_x96.clone(),
            next_tick: price.tick,
            amount0: 5,
            amount1: 5,
        })
    }
}
