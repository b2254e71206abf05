// Invariant predicates over pool accounting.
//
// These express the economic soundness properties the pool must keep:
// no operation may create value out of reserves or pay a holder more
// than the proportional claim. They are pure over `PoolState` so tests
// can check them between any two observations. All predicates assume
// `accounting_non_negative` holds for their inputs.

use amm_math::mul_div;
use amm_types::PoolState;
use soroban_sdk::{Env, U256};

/// Invariant: reserves and outstanding shares never go negative
pub fn accounting_non_negative(state: &PoolState) -> bool {
    state.reserve_a >= 0 && state.reserve_b >= 0 && state.total_shares >= 0
}

/// Invariant: reserve_a * reserve_b does not decrease across a swap
///
/// Floor rounding may grow the product slightly in the pool's favor,
/// never shrink it.
pub fn constant_product_non_decreasing(env: &Env, before: &PoolState, after: &PoolState) -> bool {
    let k_before = U256::from_u128(env, before.reserve_a as u128)
        .mul(&U256::from_u128(env, before.reserve_b as u128));
    let k_after = U256::from_u128(env, after.reserve_a as u128)
        .mul(&U256::from_u128(env, after.reserve_b as u128));
    !k_after.lt(&k_before)
}

/// What `shares` redeems for right now: floor-proportional slice of
/// both reserves, (0, 0) against an empty pool
pub fn redeemable_value(env: &Env, state: &PoolState, shares: i128) -> (i128, i128) {
    if state.total_shares == 0 {
        return (0, 0);
    }
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
    (amount_a, amount_b)
}
