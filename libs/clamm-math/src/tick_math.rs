use clamm_types::{max_sqrt_ratio, min_sqrt_ratio, tick_in_domain, PoolError, MAX_TICK, MIN_TICK};
use soroban_sdk::{Env, U256};

/// sqrt(1.0001^-(2^i)) in Q128 for each bit of |tick|
const SQRT_RATIO_FACTORS: [(u32, u128); 20] = [
    (0x1, 0xfffcb933bd6fad37aa2d162d1a594001),
    (0x2, 0xfff97272373d413259a46990580e213a),
    (0x4, 0xfff2e50f5f656932ef12357cf3c7fdcc),
    (0x8, 0xffe5caca7e10e4e61c3624eaa0941cd0),
    (0x10, 0xffcb9843d60f6159c9db58835c926644),
    (0x20, 0xff973b41fa98c081472e6896dfb254c0),
    (0x40, 0xff2ea16466c96a3843ec78b326b52861),
    (0x80, 0xfe5dee046a99a2a811c461f1969c3053),
    (0x100, 0xfcbe86c7900a88aedcffc83b479aa3a4),
    (0x200, 0xf987a7253ac413176f2b074cf7815e54),
    (0x400, 0xf3392b0822b70005940c7a398e4b70f3),
    (0x800, 0xe7159475a2c29b7443b29c7fa6e889d9),
    (0x1000, 0xd097f3bdfd2022b8845ad8f792aa5825),
    (0x2000, 0xa9f746462d870fdf8a65dc1f90e061e5),
    (0x4000, 0x70d869a156d2a1b890bb3df62baf32f7),
    (0x8000, 0x31be135f97d08fd981231505542fcfa6),
    (0x10000, 0x9aa508b5b7a84e1c677de54f3e99bc9),
    (0x20000, 0x5d6af8dedb81196699c329225ee604),
    (0x40000, 0x2216e584f5fa1ea926041bedfe98),
    (0x80000, 0x48a170391f7dc42444e8fa2),
];

/// Calculate sqrt(1.0001^tick) * 2^96
pub fn get_sqrt_ratio_at_tick(env: &Env, tick: i32) -> Result<U256, PoolError> {
    if !tick_in_domain(tick) {
        return Err(PoolError::InvalidTickRange);
    }
    Ok(sqrt_ratio_in_domain(env, tick))
}

/// Get the greatest tick whose sqrt price is <= `sqrt_price_x96`.
///
/// Returns `None` when the price is outside `[MIN_SQRT_RATIO, MAX_SQRT_RATIO)`.
pub fn get_tick_at_sqrt_ratio(env: &Env, sqrt_price_x96: &U256) -> Option<i32> {
    if *sqrt_price_x96 < min_sqrt_ratio(env) || *sqrt_price_x96 >= max_sqrt_ratio(env) {
        return None;
    }

    // Binary search for the tick
    let mut low = MIN_TICK;
    let mut high = MAX_TICK;

    while low < high {
        let mid = low + (high - low + 1) / 2;
        if sqrt_ratio_in_domain(env, mid) <= *sqrt_price_x96 {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Some(low)
}

fn sqrt_ratio_in_domain(env: &Env, tick: i32) -> U256 {
    let abs_tick = tick.unsigned_abs();

    // Start from 1.0 in Q128 and fold in one factor per set bit
    let mut ratio = U256::from_u32(env, 1).shl(128);
    for (bit, factor) in SQRT_RATIO_FACTORS {
        if abs_tick & bit != 0 {
            ratio = ratio.mul(&U256::from_u128(env, factor)).shr(128);
        }
    }

    // Factors are for negative ticks; invert for positive ones
    if tick > 0 {
        ratio = u256_max(env).div(&ratio);
    }

    // Q128.128 -> Q64.96, rounding up so that get_tick_at_sqrt_ratio is exact
    let shifted = ratio.shr(32);
    if ratio.sub(&shifted.shl(32)) > U256::from_u32(env, 0) {
        shifted.add(&U256::from_u32(env, 1))
    } else {
        shifted
    }
}

fn u256_max(env: &Env) -> U256 {
    U256::from_parts(env, u64::MAX, u64::MAX, u64::MAX, u64::MAX)
}
