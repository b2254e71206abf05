#![no_std]

pub mod invariants;
mod liquidity;
mod storage;
mod swap;

use amm_types::{PoolConfig, PoolError, PoolState};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env};
use storage::{get_config, get_shares, get_state, has_config, set_config, set_state};

#[contract]
pub struct AmmPool;

#[contractimpl]
impl AmmPool {
    /// Initialize the pool for a fixed, distinct pair of token contracts
    pub fn initialize(env: Env, token_a: Address, token_b: Address) -> Result<(), PoolError> {
        if has_config(&env) {
            panic!("Already initialized");
        }
        if token_a == token_b {
            panic_with_error!(&env, PoolError::IdenticalAssets);
        }

        set_config(&env, &PoolConfig { token_a, token_b });
        set_state(&env, &PoolState::new());
        Ok(())
    }

    /// Deposit both assets in the current reserve ratio and mint shares
    ///
    /// # Returns
    /// The number of shares minted to `provider`
    pub fn add_liquidity(
        env: Env,
        provider: Address,
        amount_a: i128,
        amount_b: i128,
    ) -> Result<i128, PoolError> {
        provider.require_auth();
        Ok(liquidity::add(&env, provider, amount_a, amount_b))
    }

    /// Burn shares and withdraw the proportional slice of both reserves
    ///
    /// # Returns
    /// (amount_a, amount_b) - Token amounts paid out
    pub fn remove_liquidity(
        env: Env,
        provider: Address,
        shares: i128,
    ) -> Result<(i128, i128), PoolError> {
        provider.require_auth();
        Ok(liquidity::remove(&env, provider, shares))
    }

    /// Swap `amount_in` of `token_in` for the opposite asset
    ///
    /// # Arguments
    /// * `token_in` - Asset the trader supplies; must be one of the pair
    /// * `amount_in` - Positive amount to supply
    /// * `min_amount_out` - Slippage floor; zero disables protection
    ///
    /// # Returns
    /// The amount of the opposite asset paid to `trader`
    pub fn swap(
        env: Env,
        trader: Address,
        token_in: Address,
        amount_in: i128,
        min_amount_out: i128,
    ) -> Result<i128, PoolError> {
        trader.require_auth();
        Ok(swap::execute_swap(
            &env,
            trader,
            token_in,
            amount_in,
            min_amount_out,
        ))
    }

    /// Constant-product quote over explicit reserves, reads no state
    pub fn quote(
        env: Env,
        amount_in: i128,
        reserve_in: i128,
        reserve_out: i128,
    ) -> Result<i128, PoolError> {
        Ok(swap::quote(&env, amount_in, reserve_in, reserve_out))
    }

    // === View Functions ===

    pub fn reserve_a(env: Env) -> i128 {
        get_state(&env).reserve_a
    }

    pub fn reserve_b(env: Env) -> i128 {
        get_state(&env).reserve_b
    }

    pub fn total_shares(env: Env) -> i128 {
        get_state(&env).total_shares
    }

    /// Share balance of `holder`, zero for unknown holders
    pub fn share_of(env: Env, holder: Address) -> i128 {
        get_shares(&env, &holder)
    }

    pub fn token_a(env: Env) -> Address {
        get_config(&env).token_a
    }

    pub fn token_b(env: Env) -> Address {
        get_config(&env).token_b
    }
}
