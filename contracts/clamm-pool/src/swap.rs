use crate::invariants::quote_is_consistent;
use crate::settlement::{settle, SettlementRequest, Settler};
use crate::staging::StagedPool;
use crate::storage::push_swap_record;
use clamm_math::AmountCalculator;
use clamm_types::{PoolError, PoolTokens, SwapRecord};
use soroban_sdk::{log, token, Address, Bytes, Env, Symbol};

/// Execute a swap
///
/// Single step against the active liquidity: no tick is crossed. The output
/// token is paid to `recipient` before `sender` is called back for the input,
/// and the new price is committed only once the input has arrived.
pub fn execute_swap<C: AmountCalculator, S: Settler>(
    env: &Env,
    calculator: &C,
    settler: &S,
    tokens: &PoolTokens,
    sender: &Address,
    recipient: Address,
    zero_for_one: bool,
    amount_specified: i128,
    data: Bytes,
) -> Result<(i128, i128), PoolError> {
    if amount_specified == 0 {
        return Err(PoolError::ZeroAmount);
    }

    let mut staged = StagedPool::load(env)?;
    let before = staged.state().price.clone();
    let quote = calculator.swap_quote(
        env,
        &staged.state().price,
        staged.state().liquidity,
        zero_for_one,
        amount_specified,
    )?;
    if !quote_is_consistent(env, &before, &quote, zero_for_one) {
        return Err(PoolError::InsufficientLiquidity);
    }

    staged.set_price(quote.next_price());

    // Pay out the negative side
    let pool = env.current_contract_address();
    if quote.amount0 < 0 {
        let out = quote.amount0.checked_neg().ok_or(PoolError::AmountOverflow)?;
        token::Client::new(env, &tokens.token0).transfer(&pool, &recipient, &out);
    }
    if quote.amount1 < 0 {
        let out = quote.amount1.checked_neg().ok_or(PoolError::AmountOverflow)?;
        token::Client::new(env, &tokens.token1).transfer(&pool, &recipient, &out);
    }

    settle(
        env,
        settler,
        &SettlementRequest::Swap {
            amount0: quote.amount0,
            amount1: quote.amount1,
            data,
        },
    )?;

    let state = staged.commit();

    let record = SwapRecord {
        sender: sender.clone(),
        recipient,
        amount0: quote.amount0,
        amount1: quote.amount1,
        sqrt_price_x96: state.price.sqrt_price_x96.clone(),
        liquidity: state.liquidity,
        tick: state.price.tick,
    };
    push_swap_record(env, &record);
    env.events()
        .publish((Symbol::new(env, "swap"), sender.clone()), record);

    log!(
        env,
        "swap {} {} -> tick {}",
        quote.amount0,
        quote.amount1,
        state.price.tick
    );

    Ok((quote.amount0, quote.amount1))
}
