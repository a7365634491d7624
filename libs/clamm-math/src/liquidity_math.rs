use clamm_types::{PoolError, PriceState};
use soroban_sdk::{Env, U256};

use crate::sqrt_price_math::{get_amount0_delta, get_amount1_delta};
use crate::tick_math::get_sqrt_ratio_at_tick;

/// Token amounts owed for adding `liquidity` over `[tick_lower, tick_upper)`
/// at the current price. Both amounts round up in favor of the pool.
///
/// - Range entirely above the current tick: token0 only
/// - Range containing the current tick: both tokens, split at the current price
/// - Range entirely at or below the current tick: token1 only
pub fn get_amounts_for_liquidity(
    env: &Env,
    price: &PriceState,
    tick_lower: i32,
    tick_upper: i32,
    liquidity: u128,
) -> Result<(U256, U256), PoolError> {
    let sqrt_lower = get_sqrt_ratio_at_tick(env, tick_lower)?;
    let sqrt_upper = get_sqrt_ratio_at_tick(env, tick_upper)?;
    let zero = U256::from_u32(env, 0);

    if price.tick < tick_lower {
        let amount0 = get_amount0_delta(env, &sqrt_lower, &sqrt_upper, liquidity, true);
        Ok((amount0, zero))
    } else if price.tick < tick_upper {
        let amount0 = get_amount0_delta(env, &price.sqrt_price_x96, &sqrt_upper, liquidity, true);
        let amount1 = get_amount1_delta(env, &sqrt_lower, &price.sqrt_price_x96, liquidity, true);
        Ok((amount0, amount1))
    } else {
        let amount1 = get_amount1_delta(env, &sqrt_lower, &sqrt_upper, liquidity, true);
        Ok((zero, amount1))
    }
}
