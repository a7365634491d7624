use clamm_types::{max_sqrt_ratio, min_sqrt_ratio, PoolError, PriceState, SwapQuote};
use soroban_sdk::Env;

use crate::full_math::to_i128;
use crate::sqrt_price_math::{
    get_amount0_delta, get_amount1_delta, get_next_sqrt_price_from_input,
    get_next_sqrt_price_from_output,
};
use crate::tick_math::get_tick_at_sqrt_ratio;

/// Compute a swap against the active liquidity without crossing ticks.
///
/// `amount_specified > 0` is an exact input amount of the input token;
/// `amount_specified < 0` is an exact output amount of the output token.
/// The quote's amounts are pool-relative: positive is owed to the pool,
/// negative is paid out by it.
pub fn compute_swap_step(
    env: &Env,
    price: &PriceState,
    liquidity: u128,
    zero_for_one: bool,
    amount_specified: i128,
) -> Result<SwapQuote, PoolError> {
    if amount_specified == 0 {
        return Err(PoolError::ZeroAmount);
    }
    if liquidity == 0 {
        return Err(PoolError::InsufficientLiquidity);
    }

    let sqrt_price = &price.sqrt_price_x96;
    let exact_input = amount_specified > 0;
    let amount = amount_specified.unsigned_abs();

    let next_sqrt_price = if exact_input {
        get_next_sqrt_price_from_input(env, sqrt_price, liquidity, amount, zero_for_one)
    } else {
        get_next_sqrt_price_from_output(env, sqrt_price, liquidity, amount, zero_for_one)
    }
    .ok_or(PoolError::InsufficientLiquidity)?;

    if next_sqrt_price < min_sqrt_ratio(env) || next_sqrt_price >= max_sqrt_ratio(env) {
        return Err(PoolError::InsufficientLiquidity);
    }
    let next_tick =
        get_tick_at_sqrt_ratio(env, &next_sqrt_price).ok_or(PoolError::InsufficientLiquidity)?;

    let (amount0, amount1) = match (zero_for_one, exact_input) {
        (true, true) => {
            let out = get_amount1_delta(env, &next_sqrt_price, sqrt_price, liquidity, false);
            (amount_specified, -to_i128(&out)?)
        }
        (true, false) => {
            let input = get_amount0_delta(env, &next_sqrt_price, sqrt_price, liquidity, true);
            (to_i128(&input)?, amount_specified)
        }
        (false, true) => {
            let out = get_amount0_delta(env, sqrt_price, &next_sqrt_price, liquidity, false);
            (-to_i128(&out)?, amount_specified)
        }
        (false, false) => {
            let input = get_amount1_delta(env, sqrt_price, &next_sqrt_price, liquidity, true);
            (amount_specified, to_i128(&input)?)
        }
    };

    Ok(SwapQuote {
        next_sqrt_price_x96: next_sqrt_price,
        next_tick,
        amount0,
        amount1,
    })
}
