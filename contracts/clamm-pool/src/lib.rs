#![no_std]

mod invariants;
mod liquidity;
mod position;
mod settlement;
mod staging;
mod storage;
mod swap;
mod tick;

#[cfg(test)]
extern crate std;
#[cfg(test)]
mod testutils;

use clamm_math::{get_tick_at_sqrt_ratio, SqrtPriceMath};
use clamm_types::{
    MintRecord, PoolError, PoolState, PoolTokens, PositionInfo, PositionKey, SwapRecord, TickInfo,
};
use settlement::CallbackSettler;
use soroban_sdk::{contract, contractimpl, log, Address, Bytes, Env, U256};
use storage::{get_state, get_tokens, is_initialized, set_state, set_tokens};

#[contract]
pub struct ClammPool;

#[contractimpl]
impl ClammPool {
    /// Initialize a new pool
    ///
    /// `tick` must be the tick whose price range contains `sqrt_price_x96`.
    pub fn initialize(
        env: Env,
        token0: Address,
        token1: Address,
        sqrt_price_x96: U256,
        tick: i32,
    ) -> Result<(), PoolError> {
        if is_initialized(&env) {
            return Err(PoolError::AlreadyInitialized);
        }

        let tokens = PoolTokens::new(token0, token1)?;

        if get_tick_at_sqrt_ratio(&env, &sqrt_price_x96) != Some(tick) {
            return Err(PoolError::InvalidInitialPrice);
        }

        set_tokens(&env, &tokens);
        set_state(&env, &PoolState::new(sqrt_price_x96, tick));

        log!(&env, "pool initialized at tick {}", tick);
        Ok(())
    }

    /// Add liquidity to a position
    ///
    /// `sender` is called back through `mint_callback(amount0, amount1, data)`
    /// and must have transferred the owed amounts to the pool when it returns.
    /// `owner` authorizes the call, so a payer signing it also fixes who
    /// receives the position.
    ///
    /// # Returns
    /// (amount0, amount1) - Token amounts collected
    pub fn mint(
        env: Env,
        sender: Address,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
        amount: u128,
        data: Bytes,
    ) -> Result<(u128, u128), PoolError> {
        owner.require_auth();
        let tokens = get_tokens(&env)?;
        let settler = CallbackSettler::new(sender.clone(), tokens);
        liquidity::mint(
            &env,
            &SqrtPriceMath,
            &settler,
            &sender,
            owner,
            tick_lower,
            tick_upper,
            amount,
            data,
        )
    }

    /// Execute a swap
    ///
    /// # Arguments
    /// * `sender` - Contract called back through `swap_callback` for the input
    /// * `recipient` - Address to receive output tokens, must authorize
    /// * `zero_for_one` - True if swapping token0 for token1
    /// * `amount_specified` - Positive for exact input, negative for exact output
    ///
    /// # Returns
    /// (amount0, amount1) - Negative values are amounts paid out
    pub fn swap(
        env: Env,
        sender: Address,
        recipient: Address,
        zero_for_one: bool,
        amount_specified: i128,
        data: Bytes,
    ) -> Result<(i128, i128), PoolError> {
        recipient.require_auth();
        let tokens = get_tokens(&env)?;
        let settler = CallbackSettler::new(sender.clone(), tokens.clone());
        swap::execute_swap(
            &env,
            &SqrtPriceMath,
            &settler,
            &tokens,
            &sender,
            recipient,
            zero_for_one,
            amount_specified,
            data,
        )
    }

    // === View Functions ===

    /// Get current pool state
    pub fn get_state(env: Env) -> Result<PoolState, PoolError> {
        get_state(&env)
    }

    /// Get the pool's token pair
    pub fn get_tokens(env: Env) -> Result<PoolTokens, PoolError> {
        get_tokens(&env)
    }

    /// Get tick info
    pub fn get_tick(env: Env, tick: i32) -> TickInfo {
        storage::get_tick(&env, tick)
    }

    /// Get position info
    pub fn get_position(
        env: Env,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
    ) -> PositionInfo {
        let key = PositionKey::identity_of(owner, tick_lower, tick_upper);
        storage::get_position(&env, &key)
    }

    /// Get current sqrt price
    pub fn sqrt_price_x96(env: Env) -> Result<U256, PoolError> {
        Ok(get_state(&env)?.price.sqrt_price_x96)
    }

    /// Get current tick
    pub fn tick(env: Env) -> Result<i32, PoolError> {
        Ok(get_state(&env)?.price.tick)
    }

    /// Get current liquidity
    pub fn liquidity(env: Env) -> Result<u128, PoolError> {
        Ok(get_state(&env)?.liquidity)
    }

    /// Get token0 address
    pub fn token0(env: Env) -> Result<Address, PoolError> {
        Ok(get_tokens(&env)?.token0)
    }

    /// Get token1 address
    pub fn token1(env: Env) -> Result<Address, PoolError> {
        Ok(get_tokens(&env)?.token1)
    }

    // === Records ===

    pub fn mint_record_count(env: Env) -> u32 {
        storage::mint_record_count(&env)
    }

    pub fn get_mint_record(env: Env, index: u32) -> Option<MintRecord> {
        storage::get_mint_record(&env, index)
    }

    pub fn swap_record_count(env: Env) -> u32 {
        storage::swap_record_count(&env)
    }

    pub fn get_swap_record(env: Env, index: u32) -> Option<SwapRecord> {
        storage::get_swap_record(&env, index)
    }
}
