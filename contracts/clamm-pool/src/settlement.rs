use clamm_types::{PoolError, PoolTokens};
use soroban_sdk::{log, token, Address, Bytes, Env, IntoVal, Symbol};

/// What the pool asks its counterparty to pay
#[derive(Clone, Debug)]
pub enum SettlementRequest {
    Mint {
        amount0: u128,
        amount1: u128,
        data: Bytes,
    },
    /// Pool-relative deltas; only the positive side is owed
    Swap {
        amount0: i128,
        amount1: i128,
        data: Bytes,
    },
}

impl SettlementRequest {
    /// Amounts owed to the pool for token0 and token1
    pub fn owed(&self) -> (u128, u128) {
        match self {
            Self::Mint {
                amount0, amount1, ..
            } => (*amount0, *amount1),
            Self::Swap {
                amount0, amount1, ..
            } => (positive_part(*amount0), positive_part(*amount1)),
        }
    }
}

fn positive_part(amount: i128) -> u128 {
    if amount > 0 {
        amount as u128
    } else {
        0
    }
}

/// Balance increase observed on each token while the counterparty had control
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Received {
    pub amount0: i128,
    pub amount1: i128,
}

/// Collects owed tokens from the counterparty
pub trait Settler {
    fn collect(&self, env: &Env, request: &SettlementRequest) -> Received;
}

/// Settles by calling back into the sender and measuring the pool's balance
/// on either side of the call.
pub struct CallbackSettler {
    pub callback: Address,
    pub tokens: PoolTokens,
}

impl CallbackSettler {
    pub fn new(callback: Address, tokens: PoolTokens) -> Self {
        Self { callback, tokens }
    }

    fn invoke(&self, env: &Env, request: &SettlementRequest) {
        match request {
            SettlementRequest::Mint {
                amount0,
                amount1,
                data,
            } => env.invoke_contract::<()>(
                &self.callback,
                &Symbol::new(env, "mint_callback"),
                (*amount0, *amount1, data.clone()).into_val(env),
            ),
            SettlementRequest::Swap {
                amount0,
                amount1,
                data,
            } => env.invoke_contract::<()>(
                &self.callback,
                &Symbol::new(env, "swap_callback"),
                (*amount0, *amount1, data.clone()).into_val(env),
            ),
        }
    }
}

impl Settler for CallbackSettler {
    fn collect(&self, env: &Env, request: &SettlementRequest) -> Received {
        let (owed0, owed1) = request.owed();
        let pool = env.current_contract_address();
        let token0 = token::Client::new(env, &self.tokens.token0);
        let token1 = token::Client::new(env, &self.tokens.token1);

        // Only tokens actually owed are measured
        let balance0_before = (owed0 > 0).then(|| token0.balance(&pool));
        let balance1_before = (owed1 > 0).then(|| token1.balance(&pool));

        self.invoke(env, request);

        Received {
            amount0: balance0_before
                .map(|before| token0.balance(&pool) - before)
                .unwrap_or(0),
            amount1: balance1_before
                .map(|before| token1.balance(&pool) - before)
                .unwrap_or(0),
        }
    }
}

fn covers(received: i128, owed: u128) -> bool {
    owed == 0 || (received > 0 && received as u128 >= owed)
}

/// Hand control to the settler and verify the pool was paid in full
pub fn settle<S: Settler>(
    env: &Env,
    settler: &S,
    request: &SettlementRequest,
) -> Result<Received, PoolError> {
    let (owed0, owed1) = request.owed();
    let received = settler.collect(env, request);

    if !covers(received.amount0, owed0) || !covers(received.amount1, owed1) {
        log!(
            env,
            "settlement short: owed {} {}, received {} {}",
            owed0,
            owed1,
            received.amount0,
            received.amount1
        );
        return Err(PoolError::InsufficientInputAmount);
    }

    Ok(received)
}
