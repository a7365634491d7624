use clamm_types::{PoolError, PositionInfo};

/// Add liquidity to a position
pub fn update(info: &mut PositionInfo, liquidity_delta: u128) -> Result<(), PoolError> {
    info.liquidity = info
        .liquidity
        .checked_add(liquidity_delta)
        .ok_or(PoolError::LiquidityOverflow)?;
    Ok(())
}
