use crate::storage::{get_config, get_state, set_state};
use amm_math::constant_product_out;
use amm_types::PoolError;
use soroban_sdk::{panic_with_error, token, Address, Env, Symbol};

/// Execute a swap at the constant-product price
///
/// Pulls `amount_in` of `token_in` from the trader and pays out the
/// floor-priced amount of the opposite asset. `min_amount_out` is the
/// trader's slippage floor; zero disables the protection. Shares are
/// untouched, only the reserve pair moves.
pub fn execute_swap(
    env: &Env,
    trader: Address,
    token_in: Address,
    amount_in: i128,
    min_amount_out: i128,
) -> i128 {
    let config = get_config(env);

    if token_in != config.token_a && token_in != config.token_b {
        panic_with_error!(env, PoolError::InvalidAsset);
    }
    if amount_in < 0 {
        panic_with_error!(env, PoolError::InvalidAmount);
    }
    if amount_in == 0 {
        panic_with_error!(env, PoolError::ZeroAmountIn);
    }

    let mut state = get_state(env);

    let a_to_b = token_in == config.token_a;
    let (reserve_in, reserve_out) = if a_to_b {
        (state.reserve_a, state.reserve_b)
    } else {
        (state.reserve_b, state.reserve_a)
    };

    // amount_out < reserve_out always, so the cast back is safe
    let amount_out =
        constant_product_out(env, amount_in as u128, reserve_in as u128, reserve_out as u128)
            as i128;

    if amount_out < min_amount_out {
        panic_with_error!(env, PoolError::SlippageExceeded);
    }

    let new_reserve_in = match reserve_in.checked_add(amount_in) {
        Some(v) => v,
        None => panic_with_error!(env, PoolError::Overflow),
    };
    let new_reserve_out = reserve_out - amount_out;

    if a_to_b {
        state.reserve_a = new_reserve_in;
        state.reserve_b = new_reserve_out;
    } else {
        state.reserve_b = new_reserve_in;
        state.reserve_a = new_reserve_out;
    }
    set_state(env, &state);

    let token_out = if a_to_b {
        config.token_b
    } else {
        config.token_a
    };

    let pool = env.current_contract_address();
    token::Client::new(env, &token_in).transfer(&trader, &pool, &amount_in);
    token::Client::new(env, &token_out).transfer(&pool, &trader, &amount_out);

    env.events().publish(
        (Symbol::new(env, "swap"), trader),
        (token_in, amount_in, amount_out),
    );

    amount_out
}

/// Pure constant-product quote, reads no pool state
pub fn quote(env: &Env, amount_in: i128, reserve_in: i128, reserve_out: i128) -> i128 {
    if amount_in < 0 || reserve_in < 0 || reserve_out < 0 {
        panic_with_error!(env, PoolError::InvalidAmount);
    }
    constant_product_out(env, amount_in as u128, reserve_in as u128, reserve_out as u128) as i128
}
