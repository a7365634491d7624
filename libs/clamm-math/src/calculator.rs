use clamm_types::{PoolError, PriceState, SwapQuote};
use soroban_sdk::Env;

use crate::full_math::to_i128;
use crate::liquidity_math::get_amounts_for_liquidity;
use crate::swap_math::compute_swap_step;

/// Prices mints and swaps for the pool.
///
/// The pool only settles and commits what the calculator returns, so the
/// pricing model can be swapped without touching settlement.
pub trait AmountCalculator {
    /// Token amounts owed for adding `liquidity` over `[tick_lower, tick_upper)`
    fn mint_amounts(
        &self,
        env: &Env,
        price: &PriceState,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: u128,
    ) -> Result<(u128, u128), PoolError>;

    /// Resulting price and pool-relative token deltas for a swap
    fn swap_quote(
        &self,
        env: &Env,
        price: &PriceState,
        liquidity: u128,
        zero_for_one: bool,
        amount_specified: i128,
    ) -> Result<SwapQuote, PoolError>;
}

/// Constant-liquidity sqrt price curve over the active range
#[derive(Clone, Copy, Debug, Default)]
pub struct SqrtPriceMath;

impl AmountCalculator for SqrtPriceMath {
    fn mint_amounts(
        &self,
        env: &Env,
        price: &PriceState,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: u128,
    ) -> Result<(u128, u128), PoolError> {
        let (amount0, amount1) =
            get_amounts_for_liquidity(env, price, tick_lower, tick_upper, liquidity)?;
        // Token transfers take i128
        Ok((to_i128(&amount0)? as u128, to_i128(&amount1)? as u128))
    }

    fn swap_quote(
        &self,
        env: &Env,
        price: &PriceState,
        liquidity: u128,
        zero_for_one: bool,
        amount_specified: i128,
    ) -> Result<SwapQuote, PoolError> {
        compute_swap_step(env, price, liquidity, zero_for_one, amount_specified)
    }
}
