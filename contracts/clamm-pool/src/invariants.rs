//! Properties every committed pool state and every executed swap satisfy.
//!
//! Swap quotes come from a pluggable calculator, so the pool checks each one
//! against these before applying it.

use clamm_math::get_tick_at_sqrt_ratio;
use clamm_types::{max_sqrt_ratio, min_sqrt_ratio, PriceState, SwapQuote};
use soroban_sdk::Env;

/// MIN_SQRT_RATIO <= sqrt_price_x96 < MAX_SQRT_RATIO
pub fn price_in_bounds(env: &Env, price: &PriceState) -> bool {
    price.sqrt_price_x96 >= min_sqrt_ratio(env) && price.sqrt_price_x96 < max_sqrt_ratio(env)
}

/// The stored tick is exactly the tick containing the stored price
pub fn tick_matches_price(env: &Env, price: &PriceState) -> bool {
    get_tick_at_sqrt_ratio(env, &price.sqrt_price_x96) == Some(price.tick)
}

/// Exactly one side flows in and the other side never flows in too
pub fn swap_amounts_opposed(quote: &SwapQuote) -> bool {
    (quote.amount0 > 0 && quote.amount1 <= 0) || (quote.amount1 > 0 && quote.amount0 <= 0)
}

/// A swap moves the price only in its own direction
pub fn price_moved_with_direction(
    before: &PriceState,
    after: &PriceState,
    zero_for_one: bool,
) -> bool {
    if zero_for_one {
        after.sqrt_price_x96 <= before.sqrt_price_x96
    } else {
        after.sqrt_price_x96 >= before.sqrt_price_x96
    }
}

/// Whether a quote can be applied to a pool currently at `before`
pub fn quote_is_consistent(
    env: &Env,
    before: &PriceState,
    quote: &SwapQuote,
    zero_for_one: bool,
) -> bool {
    let next = quote.next_price();
    swap_amounts_opposed(quote)
        && price_in_bounds(env, &next)
        && tick_matches_price(env, &next)
        && price_moved_with_direction(before, &next, zero_for_one)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::U256;

    const SQRT_PRICE_5000: u128 = 5602277097478614198912276234240;

    fn price(env: &Env, sqrt_price_x96: u128, tick: i32) -> PriceState {
        PriceState {
            sqrt_price_x96: U256::from_u128(env, sqrt_price_x96),
            tick,
        }
    }

    #[test]
    fn test_price_bounds() {
        let env = Env::default();
        assert!(price_in_bounds(&env, &price(&env, SQRT_PRICE_5000, 85176)));
        assert!(price_in_bounds(&env, &price(&env, 4295128739, -887272)));
        assert!(!price_in_bounds(&env, &price(&env, 4295128738, -887272)));
        let max = PriceState {
            sqrt_price_x96: max_sqrt_ratio(&env),
            tick: 887272,
        };
        assert!(!price_in_bounds(&env, &max));
    }

    #[test]
    fn test_tick_matches_price() {
        let env = Env::default();
        assert!(tick_matches_price(&env, &price(&env, SQRT_PRICE_5000, 85176)));
        assert!(!tick_matches_price(&env, &price(&env, SQRT_PRICE_5000, 85177)));
        assert!(tick_matches_price(&env, &price(&env, 1 << 96, 0)));
        assert!(!tick_matches_price(&env, &price(&env, 1 << 96, -1)));
    }

    #[test]
    fn test_swap_amounts_opposed() {
        let env = Env::default();
        let quote = |amount0, amount1| SwapQuote {
            next_sqrt_price_x96: U256::from_u128(&env, SQRT_PRICE_5000),
            next_tick: 85176,
            amount0,
            amount1,
        };
        assert!(swap_amounts_opposed(&quote(-8399995010657514, 42)));
        assert!(swap_amounts_opposed(&quote(1, 0)));
        assert!(!swap_amounts_opposed(&quote(1, 1)));
        assert!(!swap_amounts_opposed(&quote(-1, -1)));
        assert!(!swap_amounts_opposed(&quote(0, 0)));
    }

    #[test]
    fn test_quote_consistency() {
        let env = Env::default();
        let before = price(&env, SQRT_PRICE_5000, 85176);
        let quote = |sqrt_price: u128, tick, amount0, amount1| SwapQuote {
            next_sqrt_price_x96: U256::from_u128(&env, sqrt_price),
            next_tick: tick,
            amount0,
            amount1,
        };

        let up = quote(5602280425061439798014455163085, 85176, -8399995010657514, 42);
        assert!(quote_is_consistent(&env, &before, &up, false));
        // Right price, wrong direction
        assert!(!quote_is_consistent(&env, &before, &up, true));
        // Tick does not contain the price
        let skewed = quote(5602280425061439798014455163085, 85177, -1, 42);
        assert!(!quote_is_consistent(&env, &before, &skewed, false));
        // Below the price domain
        let floor = quote(4295128738, -887272, 1, -1);
        assert!(!quote_is_consistent(&env, &before, &floor, true));
    }

    #[test]
    fn test_price_direction() {
        let env = Env::default();
        let low = price(&env, 1 << 96, 0);
        let high = price(&env, SQRT_PRICE_5000, 85176);
        assert!(price_moved_with_direction(&high, &low, true));
        assert!(!price_moved_with_direction(&low, &high, true));
        assert!(price_moved_with_direction(&low, &high, false));
        assert!(price_moved_with_direction(&low, &low, false));
    }
}
