use crate::settlement::{settle, SettlementRequest, Settler};
use crate::staging::StagedPool;
use crate::storage::push_mint_record;
use crate::tick::validate_ticks;
use clamm_math::AmountCalculator;
use clamm_types::{MintRecord, PoolError, PositionKey};
use soroban_sdk::{log, Address, Bytes, Env, Symbol};

/// Mint (add) liquidity to a position
///
/// Ticks, position and pool liquidity are staged first, the owed amounts are
/// collected from `sender`, and only a fully paid mint is committed.
pub fn mint<C: AmountCalculator, S: Settler>(
    env: &Env,
    calculator: &C,
    settler: &S,
    sender: &Address,
    owner: Address,
    tick_lower: i32,
    tick_upper: i32,
    amount: u128,
    data: Bytes,
) -> Result<(u128, u128), PoolError> {
    validate_ticks(tick_lower, tick_upper)?;
    if amount == 0 {
        return Err(PoolError::ZeroLiquidity);
    }

    let mut staged = StagedPool::load(env)?;

    staged.update_tick(tick_lower, amount)?;
    staged.update_tick(tick_upper, amount)?;

    let position_key = PositionKey::identity_of(owner.clone(), tick_lower, tick_upper);
    staged.update_position(&position_key, amount)?;

    staged.add_liquidity(amount)?;

    let (amount0, amount1) = calculator.mint_amounts(
        env,
        &staged.state().price,
        tick_lower,
        tick_upper,
        amount,
    )?;

    settle(
        env,
        settler,
        &SettlementRequest::Mint {
            amount0,
            amount1,
            data,
        },
    )?;

    staged.commit();

    let record = MintRecord {
        sender: sender.clone(),
        owner,
        tick_lower,
        tick_upper,
        amount,
        amount0,
        amount1,
    };
    push_mint_record(env, &record);
    env.events()
        .publish((Symbol::new(env, "mint"), sender.clone()), record);

    log!(
        env,
        "mint [{}, {}) liquidity {}: paid {} {}",
        tick_lower,
        tick_upper,
        amount,
        amount0,
        amount1
    );

    Ok((amount0, amount1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::{with_contract, FixedQuote, FixedSettler};
    use crate::storage::{
        get_mint_record, get_position, get_state, get_tick, mint_record_count, set_state,
    };
    use clamm_math::SqrtPriceMath;
    use clamm_types::{PoolState, TickInfo};
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::U256;

    const SQRT_PRICE_5000: u128 = 5602277097478614198912276234240;
    const LIQUIDITY: u128 = 1_000_000_000_000_000_000_000_000;

    fn seed_state(env: &Env) {
        set_state(
            env,
            &PoolState::new(U256::from_u128(env, SQRT_PRICE_5000), 85176),
        );
    }

    #[test]
    fn test_mint_commits_on_full_payment() {
        let env = Env::default();
        let sender = Address::generate(&env);
        let owner = Address::generate(&env);
        with_contract(&env, || {
            seed_state(&env);
            let settler = FixedSettler::paying(998976618347425280, 5_000_000_000_000_000_000_000);

            let amounts = mint(
                &env,
                &FixedQuote,
                &settler,
                &sender,
                owner.clone(),
                84222,
                86129,
                LIQUIDITY,
                Bytes::new(&env),
            )
            .unwrap();

            assert_eq!(amounts, (998976618347425280, 5_000_000_000_000_000_000_000));
            assert_eq!(get_state(&env).unwrap().liquidity, LIQUIDITY);
            assert_eq!(
                get_tick(&env, 84222),
                TickInfo {
                    initialized: true,
                    liquidity: LIQUIDITY
                }
            );
            assert!(get_tick(&env, 86129).initialized);
            let key = PositionKey::identity_of(owner.clone(), 84222, 86129);
            assert_eq!(get_position(&env, &key).liquidity, LIQUIDITY);

            assert_eq!(mint_record_count(&env), 1);
            let record = get_mint_record(&env, 0).unwrap();
            assert_eq!(record.sender, sender);
            assert_eq!(record.owner, owner);
            assert_eq!(record.amount, LIQUIDITY);
            assert_eq!(record.amount0, 998976618347425280);
        });
    }

    #[test]
    fn test_mint_rolls_back_on_shortfall() {
        let env = Env::default();
        let sender = Address::generate(&env);
        let owner = Address::generate(&env);
        with_contract(&env, || {
            seed_state(&env);
            let before = get_state(&env).unwrap();

            let result = mint(
                &env,
                &FixedQuote,
                &FixedSettler::paying(0, 0),
                &sender,
                owner.clone(),
                84222,
                86129,
                LIQUIDITY,
                Bytes::new(&env),
            );

            assert_eq!(result, Err(PoolError::InsufficientInputAmount));
            assert_eq!(get_state(&env).unwrap(), before);
            assert_eq!(get_tick(&env, 84222), TickInfo::default());
            assert_eq!(get_tick(&env, 86129), TickInfo::default());
            let key = PositionKey::identity_of(owner, 84222, 86129);
            assert_eq!(get_position(&env, &key).liquidity, 0);
            assert_eq!(mint_record_count(&env), 0);
        });
    }

    #[test]
    fn test_mint_validation_order() {
        let env = Env::default();
        let sender = Address::generate(&env);
        let owner = Address::generate(&env);
        with_contract(&env, || {
            seed_state(&env);
            let settler = FixedSettler::paying(0, 0);
            // Range is checked before amount
            assert_eq!(
                mint(
                    &env,
                    &FixedQuote,
                    &settler,
                    &sender,
                    owner.clone(),
                    10,
                    10,
                    0,
                    Bytes::new(&env)
                ),
                Err(PoolError::InvalidTickRange)
            );
            assert_eq!(
                mint(&env, &FixedQuote, &settler, &sender, owner, 0, 10, 0, Bytes::new(&env)),
                Err(PoolError::ZeroLiquidity)
            );
        });
    }

    #[test]
    fn test_mint_with_sqrt_price_math() {
        let env = Env::default();
        let sender = Address::generate(&env);
        let owner = Address::generate(&env);
        with_contract(&env, || {
            seed_state(&env);
            let settler = FixedSettler::paying(i128::MAX, i128::MAX);

            let amounts = mint(
                &env,
                &SqrtPriceMath,
                &settler,
                &sender,
                owner,
                84222,
                86129,
                LIQUIDITY,
                Bytes::new(&env),
            )
            .unwrap();

            assert_eq!(amounts, (657909228752861696837, 3294200773534437994198830));
        });
    }

    #[test]
    fn test_mint_twice_accumulates() {
        let env = Env::default();
        let sender = Address::generate(&env);
        let owner = Address::generate(&env);
        with_contract(&env, || {
            seed_state(&env);
            let settler = FixedSettler::paying(i128::MAX, i128::MAX);
            for _ in 0..2 {
                mint(
                    &env,
                    &FixedQuote,
                    &settler,
                    &sender,
                    owner.clone(),
                    -60,
                    60,
                    500,
                    Bytes::new(&env),
                )
                .unwrap();
            }

            assert_eq!(get_state(&env).unwrap().liquidity, 1000);
            assert_eq!(get_tick(&env, -60).liquidity, 1000);
            assert_eq!(get_tick(&env, 60).liquidity, 1000);
            let key = PositionKey::identity_of(owner, -60, 60);
            assert_eq!(get_position(&env, &key).liquidity, 1000);
            assert_eq!(mint_record_count(&env), 2);
        });
    }
}
