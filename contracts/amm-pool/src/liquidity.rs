use crate::storage::{get_config, get_shares, get_state, set_shares, set_state};
use amm_math::{mul_div, products_equal, sqrt_product};
use amm_types::PoolError;
use soroban_sdk::{panic_with_error, token, Address, Env, Symbol};

/// Add liquidity to the pool
///
/// The first deposit mints floor(sqrt(amount_a * amount_b)) shares and
/// fixes the pool's initial price ratio. Every later deposit must match
/// the current reserve ratio exactly (checked by cross-multiplication,
/// no division) and mints the floor-proportional share count.
pub fn add(env: &Env, provider: Address, amount_a: i128, amount_b: i128) -> i128 {
    if amount_a < 0 || amount_b < 0 {
        panic_with_error!(env, PoolError::InvalidAmount);
    }

    let config = get_config(env);
    let mut state = get_state(env);

    let minted = if state.total_shares == 0 {
        to_amount(env, sqrt_product(env, amount_a as u128, amount_b as u128))
    } else {
        if !products_equal(
            env,
            amount_a as u128,
            state.reserve_b as u128,
            amount_b as u128,
            state.reserve_a as u128,
        ) {
            panic_with_error!(env, PoolError::RatioMismatch);
        }

        // total_shares > 0 implies both reserves > 0
        let from_a = mul_div(
            env,
            amount_a as u128,
            state.total_shares as u128,
            state.reserve_a as u128,
        );
        let from_b = mul_div(
            env,
            amount_b as u128,
            state.total_shares as u128,
            state.reserve_b as u128,
        );
        to_amount(env, from_a.min(from_b))
    };

    if minted == 0 {
        panic_with_error!(env, PoolError::ZeroShares);
    }

    state.reserve_a = checked_add(env, state.reserve_a, amount_a);
    state.reserve_b = checked_add(env, state.reserve_b, amount_b);
    state.total_shares = checked_add(env, state.total_shares, minted);
    set_state(env, &state);
    set_shares(env, &provider, checked_add(env, get_shares(env, &provider), minted));

    // Pull both deposits; either failed transfer aborts the whole call
    let pool = env.current_contract_address();
    token::Client::new(env, &config.token_a).transfer(&provider, &pool, &amount_a);
    token::Client::new(env, &config.token_b).transfer(&provider, &pool, &amount_b);

    env.events().publish(
        (Symbol::new(env, "add_liquidity"), provider),
        (amount_a, amount_b, minted),
    );

    minted
}

/// Redeem shares for a proportional slice of both reserves
pub fn remove(env: &Env, provider: Address, shares: i128) -> (i128, i128) {
    if shares < 0 {
        panic_with_error!(env, PoolError::InvalidAmount);
    }

    let config = get_config(env);
    let mut state = get_state(env);

    if state.total_shares == 0 {
        panic_with_error!(env, PoolError::EmptyPool);
    }

    let held = get_shares(env, &provider);
    if shares > held {
        panic_with_error!(env, PoolError::InsufficientShares);
    }

    // Floor division: a holder never withdraws more than the proportional claim
    let amount_a = mul_div(
        env,
        shares as u128,
        state.reserve_a as u128,
        state.total_shares as u128,
    ) as i128;
    let amount_b = mul_div(
        env,
        shares as u128,
        state.reserve_b as u128,
        state.total_shares as u128,
    ) as i128;

    if amount_a == 0 || amount_b == 0 {
        panic_with_error!(env, PoolError::ZeroWithdrawal);
    }

    state.reserve_a -= amount_a;
    state.reserve_b -= amount_b;
    state.total_shares -= shares;
    set_state(env, &state);
    set_shares(env, &provider, held - shares);

    let pool = env.current_contract_address();
    token::Client::new(env, &config.token_a).transfer(&pool, &provider, &amount_a);
    token::Client::new(env, &config.token_b).transfer(&pool, &provider, &amount_b);

    env.events().publish(
        (Symbol::new(env, "remove_liquidity"), provider),
        (shares, amount_a, amount_b),
    );

    (amount_a, amount_b)
}

fn to_amount(env: &Env, value: u128) -> i128 {
    match i128::try_from(value) {
        Ok(v) => v,
        Err(_) => panic_with_error!(env, PoolError::Overflow),
    }
}

fn checked_add(env: &Env, a: i128, b: i128) -> i128 {
    match a.checked_add(b) {
        Some(v) => v,
        None => panic_with_error!(env, PoolError::Overflow),
    }
}
