use clamm_types::{tick_in_domain, PoolError, TickInfo};

/// Validate tick range for a position
pub fn validate_ticks(tick_lower: i32, tick_upper: i32) -> Result<(), PoolError> {
    if tick_lower >= tick_upper || !tick_in_domain(tick_lower) || !tick_in_domain(tick_upper) {
        return Err(PoolError::InvalidTickRange);
    }
    Ok(())
}

/// Add liquidity referencing a tick.
/// Returns true if the tick was flipped from uninitialized to initialized.
pub fn update(info: &mut TickInfo, liquidity_delta: u128) -> Result<bool, PoolError> {
    let liquidity_before = info.liquidity;
    let liquidity_after = liquidity_before
        .checked_add(liquidity_delta)
        .ok_or(PoolError::LiquidityOverflow)?;

    let flipped = liquidity_before == 0 && liquidity_after > 0 && !info.initialized;
    if flipped {
        info.initialized = true;
    }

    info.liquidity = liquidity_after;
    Ok(flipped)
}
