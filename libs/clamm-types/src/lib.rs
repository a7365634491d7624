#![no_std]

mod error;
mod pool;
mod position;
mod record;
mod tick;

pub use error::*;
pub use pool::*;
pub use position::*;
pub use record::*;
pub use tick::*;

use soroban_sdk::{Env, U256};

/// Q96 constant (2^96) for fixed-point math
pub const Q96: u128 = 1 << 96;

/// Minimum tick index
pub const MIN_TICK: i32 = -887272;

/// Maximum tick index
pub const MAX_TICK: i32 = 887272;

/// Minimum sqrt price (at MIN_TICK), fits in u128
pub const MIN_SQRT_RATIO: u128 = 4295128739;

/// Maximum sqrt price (at MAX_TICK) as four big-endian u64 limbs:
/// 1461446703485210103287273052203988822378723970342
pub const MAX_SQRT_RATIO_PARTS: (u64, u64, u64, u64) =
    (0, 0xfffd8963, 0xefd1fc6a50648849, 0x5d951d5263988d26);

/// Minimum sqrt price as a U256
pub fn min_sqrt_ratio(env: &Env) -> U256 {
    U256::from_u128(env, MIN_SQRT_RATIO)
}

/// Maximum sqrt price as a U256 (exclusive upper bound for pool prices)
pub fn max_sqrt_ratio(env: &Env) -> U256 {
    let (hi_hi, hi_lo, lo_hi, lo_lo) = MAX_SQRT_RATIO_PARTS;
    U256::from_parts(env, hi_hi, hi_lo, lo_hi, lo_lo)
}

/// True if `tick` lies in `[MIN_TICK, MAX_TICK]`
pub fn tick_in_domain(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}
