#![no_std]


use clamm_types::PoolTokens;
use soroban_sdk::xdr::{FromXdr, ToXdr};
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, log, token, Address, Bytes, Env, Symbol,
    Vec,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ManagerError {
    /// A swap callback that owes the pool nothing
    UnexpectedCallback = 1,
    MalformedCallbackData = 2,
    /// An owed amount does not fit the token interface (i128)
    AmountOverflow = 3,
}

/// Payload the pool hands back to the manager on every callback
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallbackData {
    pub pool: Address,
    pub token0: Address,
    pub token1: Address,
    /// Account the owed tokens are taken from
    pub payer: Address,
}

/// Pays pool callbacks on behalf of end users.
///
/// Users call the pool directly with this contract as `sender` and the bytes
/// from `callback_data` as `data`. The payer should also be the position
/// owner or swap recipient: the pool requires that address to authorize the
/// call, and the payer's transfers are then authorized beneath it.
#[contract]
pub struct ClammManager;

#[contractimpl]
impl ClammManager {
    /// Encode the callback payload for `payer` trading against `pool`
    pub fn callback_data(env: Env, pool: Address, payer: Address) -> Bytes {
        let tokens = get_pool_tokens(&env, &pool);
        CallbackData {
            pool,
            token0: tokens.token0,
            token1: tokens.token1,
            payer,
        }
        .to_xdr(&env)
    }

    /// Pay for liquidity added by `ClammPool::mint`
    pub fn mint_callback(
        env: Env,
        amount0: u128,
        amount1: u128,
        data: Bytes,
    ) -> Result<(), ManagerError> {
        let data = decode(&env, &data)?;
        // Only the pool named in the payload can be the invoker here
        data.pool.require_auth();

        let amount0 = i128::try_from(amount0).map_err(|_| ManagerError::AmountOverflow)?;
        let amount1 = i128::try_from(amount1).map_err(|_| ManagerError::AmountOverflow)?;
        pay(&env, &data, amount0, amount1);
        Ok(())
    }

    /// Pay the input side of `ClammPool::swap`
    pub fn swap_callback(
        env: Env,
        amount0: i128,
        amount1: i128,
        data: Bytes,
    ) -> Result<(), ManagerError> {
        if amount0 <= 0 && amount1 <= 0 {
            return Err(ManagerError::UnexpectedCallback);
        }
        let data = decode(&env, &data)?;
        data.pool.require_auth();

        pay(&env, &data, amount0.max(0), amount1.max(0));
        Ok(())
    }
}

fn decode(env: &Env, data: &Bytes) -> Result<CallbackData, ManagerError> {
    CallbackData::from_xdr(env, data).map_err(|_| ManagerError::MalformedCallbackData)
}

fn pay(env: &Env, data: &CallbackData, amount0: i128, amount1: i128) {
    if amount0 > 0 {
        token::Client::new(env, &data.token0).transfer(&data.payer, &data.pool, &amount0);
    }
    if amount1 > 0 {
        token::Client::new(env, &data.token1).transfer(&data.payer, &data.pool, &amount1);
    }
    log!(env, "paid pool {} {}", amount0, amount1);
}

fn get_pool_tokens(env: &Env, pool: &Address) -> PoolTokens {
    env.invoke_contract(pool, &Symbol::new(env, "get_tokens"), Vec::new(env))
}
