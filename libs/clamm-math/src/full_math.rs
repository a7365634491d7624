use clamm_types::PoolError;
use soroban_sdk::{Env, U256};

pub fn u256(env: &Env, value: u128) -> U256 {
    U256::from_u128(env, value)
}

/// Q96 (2^96) as a U256
pub fn q96(env: &Env) -> U256 {
    U256::from_u32(env, 1).shl(96)
}

/// Unsigned division with rounding up
pub fn div_rounding_up(env: &Env, a: &U256, b: &U256) -> U256 {
    let quotient = a.div(b);
    if a.rem_euclid(b) > U256::from_u32(env, 0) {
        quotient.add(&U256::from_u32(env, 1))
    } else {
        quotient
    }
}

/// Computes `liquidity * x / 2^96` for any `x` below 2^160.
///
/// `x` is split at bit 96 so neither partial product exceeds 2^224.
pub fn mul_shift_96(env: &Env, liquidity: u128, x: &U256, round_up: bool) -> U256 {
    let l = u256(env, liquidity);
    let hi = x.shr(96);
    let lo = x.sub(&hi.shl(96));

    let lo_product = l.mul(&lo);
    let result = l.mul(&hi).add(&lo_product.shr(96));

    if round_up && lo_product.rem_euclid(&q96(env)) > U256::from_u32(env, 0) {
        result.add(&U256::from_u32(env, 1))
    } else {
        result
    }
}

/// Narrow a token amount to the token interface's i128
pub fn to_i128(value: &U256) -> Result<i128, PoolError> {
    value
        .to_u128()
        .filter(|v| *v <= i128::MAX as u128)
        .map(|v| v as i128)
        .ok_or(PoolError::AmountOverflow)
}
