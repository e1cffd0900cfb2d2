#![no_std]

mod borrow;
mod errors;
mod events;
mod gateway;
mod liquidity;
mod math;
mod reentrancy;
mod reserves;
mod share_ledger;
mod storage;
mod swap;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, Address, Bytes, Env, String, Symbol, U256};

pub use errors::PoolError;
use storage::{has_pool_state, load_pool_state, set_pool_state, PoolStorage};

#[contract]
pub struct Pool;

#[contractimpl]
impl Pool {
    pub fn initialize(
        env: Env,
        controller: Address,
        native: Address,
        token: Address,
    ) -> Result<(), PoolError> {
        if has_pool_state(&env) {
            return Err(PoolError::AlreadyInitialized);
        }
        if native == token {
            return Err(PoolError::IdenticalAssets);
        }

        set_pool_state(
            &env,
            &PoolStorage {
                controller,
                native,
                token,
                reserve_native: 0,
                reserve_paired: 0,
                k_last: U256::from_u32(&env, 0),
            },
        );
        share_ledger::write_metadata(&env);
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Reserve engine
    // ------------------------------------------------------------------

    /// Mints pool shares to `to` for the assets deposited since the last
    /// reserve update. Deposit and call must happen in the same transaction.
    pub fn mint(env: Env, sender: Address, to: Address) -> Result<i128, PoolError> {
        sender.require_auth();
        liquidity::mint(&env, &sender, &to)
    }

    /// Burns the shares held by the pool itself and sends the proportional
    /// assets to `to`. Returns `(native, paired)`.
    pub fn burn(env: Env, sender: Address, to: Address) -> Result<(u64, u128), PoolError> {
        sender.require_auth();
        liquidity::burn(&env, &sender, &to)
    }

    /// Sends `native_out` or `paired_out` (exactly one) to `to`. A non-empty
    /// `data` payload triggers the recipient's `on_swap` callback first.
    pub fn swap(
        env: Env,
        sender: Address,
        native_out: u64,
        paired_out: u128,
        to: Address,
        data: Bytes,
    ) -> Result<(), PoolError> {
        sender.require_auth();
        swap::execute_swap(&env, &sender, native_out, paired_out, &to, &data)
    }

    /// Lends both assets to `to` for one callback. The callback must return
    /// exactly what it received before it finishes.
    pub fn borrow(
        env: Env,
        amount_native: u64,
        amount_paired: u128,
        to: Address,
        callback: Symbol,
        data: Bytes,
    ) -> Result<(), PoolError> {
        borrow::execute_borrow(&env, amount_native, amount_paired, &to, &callback, &data)
    }

    pub fn skim(env: Env, to: Address) -> Result<(), PoolError> {
        reserves::skim(&env, &to)
    }

    pub fn sync(env: Env) -> Result<(), PoolError> {
        reserves::sync(&env)
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    pub fn get_reserves(env: Env) -> Result<(u64, u128), PoolError> {
        let state = load_pool_state(&env)?;
        Ok((state.reserve_native, state.reserve_paired))
    }

    pub fn k_last(env: Env) -> Result<U256, PoolError> {
        Ok(load_pool_state(&env)?.k_last)
    }

    pub fn controller(env: Env) -> Result<Address, PoolError> {
        Ok(load_pool_state(&env)?.controller)
    }

    pub fn native(env: Env) -> Result<Address, PoolError> {
        Ok(load_pool_state(&env)?.native)
    }

    pub fn token(env: Env) -> Result<Address, PoolError> {
        Ok(load_pool_state(&env)?.token)
    }

    pub fn locked(env: Env) -> bool {
        reentrancy::is_locked(&env)
    }

    // ------------------------------------------------------------------
    // Share ledger
    // ------------------------------------------------------------------

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        share_ledger::allowance(&env, &from, &spender)
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), PoolError> {
        from.require_auth();
        share_ledger::approve(&env, &from, &spender, amount, expiration_ledger)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        share_ledger::balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), PoolError> {
        from.require_auth();
        share_ledger::transfer(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), PoolError> {
        spender.require_auth();
        share_ledger::transfer_from(&env, &spender, &from, &to, amount)
    }

    pub fn total_supply(env: Env) -> i128 {
        share_ledger::total_supply(&env)
    }

    pub fn decimals(env: Env) -> u32 {
        share_ledger::read_metadata(&env).decimal
    }

    pub fn name(env: Env) -> String {
        share_ledger::read_metadata(&env).name
    }

    pub fn symbol(env: Env) -> String {
        share_ledger::read_metadata(&env).symbol
    }
}
