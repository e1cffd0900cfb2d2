use soroban_sdk::{Address, Env};

use crate::{
    errors::PoolError,
    events::PoolEvents,
    gateway,
    math::{sub_native, sub_paired},
    reentrancy,
    storage::{extend_instance_ttl, load_pool_state, set_pool_state, PoolStorage},
};

/// Reads the pool's actual custodial balances of both assets.
pub fn measure(env: &Env, state: &PoolStorage) -> Result<(u64, u128), PoolError> {
    let balance_native = gateway::native_balance(env, &state.native)?;
    let balance_paired = gateway::paired_balance(env, &state.token)?;
    Ok((balance_native, balance_paired))
}

/// Records measured balances as the new reserves.
///
/// This is the only place reserves change; every call emits a `sync` event.
pub fn update(env: &Env, state: &mut PoolStorage, balance_native: u64, balance_paired: u128) {
    state.reserve_native = balance_native;
    state.reserve_paired = balance_paired;
    PoolEvents::sync(env, balance_native, balance_paired);
}

/// Sends any balance above the recorded reserves to `to`. Reserves are not
/// touched.
pub fn skim(env: &Env, to: &Address) -> Result<(), PoolError> {
    let state = load_pool_state(env)?;
    reentrancy::acquire(env)?;

    let (balance_native, balance_paired) = measure(env, &state)?;
    let excess_native = sub_native(balance_native, state.reserve_native)?;
    let excess_paired = sub_paired(balance_paired, state.reserve_paired)?;

    gateway::transfer_native(env, &state.native, to, excess_native)?;
    gateway::transfer_paired(env, &state.token, to, excess_paired)?;

    extend_instance_ttl(env);
    reentrancy::release(env);
    Ok(())
}

/// Forces reserves to match the current custodial balances.
pub fn sync(env: &Env) -> Result<(), PoolError> {
    let mut state = load_pool_state(env)?;
    reentrancy::acquire(env)?;

    let (balance_native, balance_paired) = measure(env, &state)?;
    update(env, &mut state, balance_native, balance_paired);
    set_pool_state(env, &state);

    extend_instance_ttl(env);
    reentrancy::release(env);
    Ok(())
}
