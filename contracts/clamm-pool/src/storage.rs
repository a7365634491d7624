use clamm_types::{
    MintRecord, PoolError, PoolState, PoolTokens, PositionInfo, PositionKey, SwapRecord, TickInfo,
};
use soroban_sdk::{contracttype, Env};

// ============================================================================
// Storage layout
// ============================================================================
// - Tokens and State live in Instance storage (read on every call)
// - Each tick and each position is its own Persistent entry, created lazily
//   on first write and never removed
// - Mint and swap records use indexed storage (count in Instance, one
//   Persistent entry per record) so appends stay O(1)
// - A mint touches 2 ticks + 1 position + state + 1 record, a swap touches
//   state + 1 record
// ============================================================================

/// Storage keys for the pool contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Token pair (Instance storage)
    Tokens,
    /// Current pool state (Instance storage)
    State,
    /// Tick data: tick_index -> TickInfo (Persistent storage)
    Tick(i32),
    /// Position data: PositionKey -> PositionInfo (Persistent storage)
    Position(PositionKey),
    /// Number of mint records (Instance storage)
    MintCount,
    /// Mint record by index (Persistent storage)
    Mint(u32),
    /// Number of swap records (Instance storage)
    SwapCount,
    /// Swap record by index (Persistent storage)
    Swap(u32),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Tokens ===

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Tokens)
}

pub fn get_tokens(env: &Env) -> Result<PoolTokens, PoolError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Tokens)
        .ok_or(PoolError::NotInitialized)
}

pub fn set_tokens(env: &Env, tokens: &PoolTokens) {
    env.storage().instance().set(&DataKey::Tokens, tokens);
    extend_instance_ttl(env);
}

// === State ===

pub fn get_state(env: &Env) -> Result<PoolState, PoolError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(PoolError::NotInitialized)
}

pub fn set_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(env);
}

// === Tick ===

/// Tick info, or the zero value for a tick that was never written
pub fn get_tick(env: &Env, tick: i32) -> TickInfo {
    let key = DataKey::Tick(tick);
    match env.storage().persistent().get(&key) {
        Some(info) => {
            extend_persistent_ttl(env, &key);
            info
        }
        None => TickInfo::default(),
    }
}

pub fn set_tick(env: &Env, tick: i32, info: &TickInfo) {
    let key = DataKey::Tick(tick);
    env.storage().persistent().set(&key, info);
    extend_persistent_ttl(env, &key);
}

// === Position ===

/// Position info, or the zero value for a position that was never written
pub fn get_position(env: &Env, key: &PositionKey) -> PositionInfo {
    let data_key = DataKey::Position(key.clone());
    match env.storage().persistent().get(&data_key) {
        Some(info) => {
            extend_persistent_ttl(env, &data_key);
            info
        }
        None => PositionInfo::default(),
    }
}

pub fn set_position(env: &Env, key: &PositionKey, info: &PositionInfo) {
    let data_key = DataKey::Position(key.clone());
    env.storage().persistent().set(&data_key, info);
    extend_persistent_ttl(env, &data_key);
}

// === Records ===

pub fn mint_record_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::MintCount)
        .unwrap_or(0)
}

/// Append a mint record, returning its index
pub fn push_mint_record(env: &Env, record: &MintRecord) -> u32 {
    let index = mint_record_count(env);
    let key = DataKey::Mint(index);
    env.storage().persistent().set(&key, record);
    extend_persistent_ttl(env, &key);
    env.storage()
        .instance()
        .set(&DataKey::MintCount, &(index + 1));
    index
}

pub fn get_mint_record(env: &Env, index: u32) -> Option<MintRecord> {
    env.storage().persistent().get(&DataKey::Mint(index))
}

pub fn swap_record_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::SwapCount)
        .unwrap_or(0)
}

/// Append a swap record, returning its index
pub fn push_swap_record(env: &Env, record: &SwapRecord) -> u32 {
    let index = swap_record_count(env);
    let key = DataKey::Swap(index);
    env.storage().persistent().set(&key, record);
    extend_persistent_ttl(env, &key);
    env.storage()
        .instance()
        .set(&DataKey::SwapCount, &(index + 1));
    index
}

pub fn get_swap_record(env: &Env, index: u32) -> Option<SwapRecord> {
    env.storage().persistent().get(&DataKey::Swap(index))
}
