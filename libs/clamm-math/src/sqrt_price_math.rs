use soroban_sdk::{Env, U256};

use crate::full_math::{div_rounding_up, mul_shift_96, u256};

fn sorted(a: &U256, b: &U256) -> (U256, U256) {
    if a > b {
        (b.clone(), a.clone())
    } else {
        (a.clone(), b.clone())
    }
}

/// Get the amount of token0 between two sqrt prices for a given liquidity
///
/// amount0 = L * (sqrt_b - sqrt_a) * 2^96 / (sqrt_a * sqrt_b)
///
/// Evaluated as `L * (((sqrt_b - sqrt_a) << 96) / sqrt_b) / sqrt_a` so every
/// intermediate stays below 2^256. Both divisions round in the same direction.
pub fn get_amount0_delta(
    env: &Env,
    sqrt_ratio_a: &U256,
    sqrt_ratio_b: &U256,
    liquidity: u128,
    round_up: bool,
) -> U256 {
    let (lower, upper) = sorted(sqrt_ratio_a, sqrt_ratio_b);
    let zero = U256::from_u32(env, 0);
    if liquidity == 0 || lower == upper || lower == zero {
        return zero;
    }

    let numerator = upper.sub(&lower).shl(96);
    let l = u256(env, liquidity);

    if round_up {
        let scaled = div_rounding_up(env, &numerator, &upper);
        div_rounding_up(env, &l.mul(&scaled), &lower)
    } else {
        l.mul(&numerator.div(&upper)).div(&lower)
    }
}

/// Get the amount of token1 between two sqrt prices for a given liquidity
///
/// amount1 = L * (sqrt_b - sqrt_a) / 2^96
pub fn get_amount1_delta(
    env: &Env,
    sqrt_ratio_a: &U256,
    sqrt_ratio_b: &U256,
    liquidity: u128,
    round_up: bool,
) -> U256 {
    let (lower, upper) = sorted(sqrt_ratio_a, sqrt_ratio_b);
    mul_shift_96(env, liquidity, &upper.sub(&lower), round_up)
}

/// Next sqrt price after adding or removing `amount` of token0.
///
/// Always rounds up: moving the price down by less than exact when adding
/// token0 keeps the pool from paying out too much token1.
/// Returns `None` when removing more token0 than the liquidity holds.
pub fn get_next_sqrt_price_from_amount0_rounding_up(
    env: &Env,
    sqrt_price_x96: &U256,
    liquidity: u128,
    amount: u128,
    add: bool,
) -> Option<U256> {
    if amount == 0 {
        return Some(sqrt_price_x96.clone());
    }

    // L * 2^96 / sqrt_price is the virtual token0 reserve
    let numerator1 = u256(env, liquidity).shl(96);
    let reserve0 = numerator1.div(sqrt_price_x96);
    let amount = u256(env, amount);

    if add {
        Some(div_rounding_up(env, &numerator1, &reserve0.add(&amount)))
    } else {
        if reserve0 <= amount {
            return None;
        }
        Some(div_rounding_up(env, &numerator1, &reserve0.sub(&amount)))
    }
}

/// Next sqrt price after adding or removing `amount` of token1.
///
/// Always rounds down. Returns `None` when removing more token1 than the
/// liquidity holds.
pub fn get_next_sqrt_price_from_amount1_rounding_down(
    env: &Env,
    sqrt_price_x96: &U256,
    liquidity: u128,
    amount: u128,
    add: bool,
) -> Option<U256> {
    let shifted = u256(env, amount).shl(96);
    let l = u256(env, liquidity);

    if add {
        Some(sqrt_price_x96.add(&shifted.div(&l)))
    } else {
        let quotient = div_rounding_up(env, &shifted, &l);
        if *sqrt_price_x96 <= quotient {
            return None;
        }
        Some(sqrt_price_x96.sub(&quotient))
    }
}

/// Next sqrt price given an input amount of token0 or token1
pub fn get_next_sqrt_price_from_input(
    env: &Env,
    sqrt_price_x96: &U256,
    liquidity: u128,
    amount_in: u128,
    zero_for_one: bool,
) -> Option<U256> {
    if zero_for_one {
        get_next_sqrt_price_from_amount0_rounding_up(
            env,
            sqrt_price_x96,
            liquidity,
            amount_in,
            true,
        )
    } else {
        get_next_sqrt_price_from_amount1_rounding_down(
            env,
            sqrt_price_x96,
            liquidity,
            amount_in,
            true,
        )
    }
}

/// Next sqrt price given an output amount of token0 or token1
pub fn get_next_sqrt_price_from_output(
    env: &Env,
    sqrt_price_x96: &U256,
    liquidity: u128,
    amount_out: u128,
    zero_for_one: bool,
) -> Option<U256> {
    if zero_for_one {
        get_next_sqrt_price_from_amount1_rounding_down(
            env,
            sqrt_price_x96,
            liquidity,
            amount_out,
            false,
        )
    } else {
        get_next_sqrt_price_from_amount0_rounding_up(
            env,
            sqrt_price_x96,
            liquidity,
            amount_out,
            false,
        )
    }
}
