use crate::storage::{get_position, get_state, get_tick, set_position, set_state, set_tick};
use crate::{position, tick};
use clamm_types::{PoolError, PoolState, PositionInfo, PositionKey, PriceState, TickInfo};
use soroban_sdk::{Env, Map};

/// In-memory view of the pool for one mint or swap.
///
/// Reads fall through to storage; writes stay here until `commit`. A call that
/// returns an error before committing leaves storage exactly as it found it.
pub struct StagedPool {
    env: Env,
    state: PoolState,
    ticks: Map<i32, TickInfo>,
    positions: Map<PositionKey, PositionInfo>,
}

impl StagedPool {
    pub fn load(env: &Env) -> Result<Self, PoolError> {
        Ok(Self {
            env: env.clone(),
            state: get_state(env)?,
            ticks: Map::new(env),
            positions: Map::new(env),
        })
    }

    pub fn state(&self) -> &PoolState {
        &self.state
    }

    pub fn tick(&self, tick: i32) -> TickInfo {
        self.ticks
            .get(tick)
            .unwrap_or_else(|| get_tick(&self.env, tick))
    }

    /// Stage `+liquidity_delta` on a tick, returning whether it flipped
    pub fn update_tick(
        &mut self,
        tick_index: i32,
        liquidity_delta: u128,
    ) -> Result<bool, PoolError> {
        let mut info = self.tick(tick_index);
        let flipped = tick::update(&mut info, liquidity_delta)?;
        self.ticks.set(tick_index, info);
        Ok(flipped)
    }

    pub fn position(&self, key: &PositionKey) -> PositionInfo {
        self.positions
            .get(key.clone())
            .unwrap_or_else(|| get_position(&self.env, key))
    }

    pub fn update_position(
        &mut self,
        key: &PositionKey,
        liquidity_delta: u128,
    ) -> Result<(), PoolError> {
        let mut info = self.position(key);
        position::update(&mut info, liquidity_delta)?;
        self.positions.set(key.clone(), info);
        Ok(())
    }

    pub fn add_liquidity(&mut self, amount: u128) -> Result<(), PoolError> {
        self.state.add_liquidity(amount)
    }

    pub fn set_price(&mut self, price: PriceState) {
        self.state.set_price(price);
    }

    /// Write every staged change to storage, returning the committed state
    pub fn commit(self) -> PoolState {
        for (tick_index, info) in self.ticks.iter() {
            set_tick(&self.env, tick_index, &info);
        }
        for (key, info) in self.positions.iter() {
            set_position(&self.env, &key, &info);
        }
        set_state(&self.env, &self.state);
        self.state
    }
}
