use soroban_sdk::{Address, Bytes, Env, U256};

use crate::{
    errors::PoolError,
    events::PoolEvents,
    gateway,
    math::{self, sub_native, sub_paired, FEE_DENOMINATOR, FEE_NUMERATOR},
    reentrancy, reserves,
    storage::{extend_instance_ttl, load_pool_state, set_pool_state},
};

/// Exchanges one asset for the other.
///
/// # Flow
/// 1. **Pre-flight**: exactly one output positive, outputs below reserves,
///    recipient is not an asset contract.
/// 2. **Send first**: outputs go to `to` before any input is checked, so a
///    recipient can pay inside the same call.
/// 3. **Flash-swap callback**: only when `data` is non-empty.
/// 4. **Measure**: inputs are inferred from balances, never from arguments.
/// 5. **Fee-adjusted k check**: the pool must end at least as deep as it
///    started, with 0.3% of every input left behind.
/// 6. **Commit**: reserves and the `k_last` checkpoint move to the measured
///    balances.
pub fn execute_swap(
    env: &Env,
    sender: &Address,
    amount_native_out: u64,
    amount_paired_out: u128,
    to: &Address,
    data: &Bytes,
) -> Result<(), PoolError> {
    if (amount_native_out > 0) == (amount_paired_out > 0) {
        return Err(PoolError::InvalidOutputAmount);
    }

    let mut state = load_pool_state(env)?;
    reentrancy::acquire(env)?;

    let reserve_native = state.reserve_native;
    let reserve_paired = state.reserve_paired;
    if amount_native_out >= reserve_native || amount_paired_out >= reserve_paired {
        return Err(PoolError::InsufficientLiquidity);
    }
    if *to == state.token || *to == state.native {
        return Err(PoolError::InvalidRecipient);
    }

    gateway::transfer_native(env, &state.native, to, amount_native_out)?;
    gateway::transfer_paired(env, &state.token, to, amount_paired_out)?;

    if !data.is_empty() {
        gateway::invoke_swap_callback(
            env,
            to,
            sender,
            &state,
            amount_native_out,
            amount_paired_out,
            data,
        )?;
    }

    let (balance_native, balance_paired) = reserves::measure(env, &state)?;
    let amount_native_in =
        balance_native.saturating_sub(sub_native(reserve_native, amount_native_out)?);
    let amount_paired_in =
        balance_paired.saturating_sub(sub_paired(reserve_paired, amount_paired_out)?);
    if amount_native_in == 0 && amount_paired_in == 0 {
        return Err(PoolError::InsufficientInputAmount);
    }

    let scale = U256::from_u32(env, FEE_DENOMINATOR);
    let fee = U256::from_u32(env, FEE_NUMERATOR);
    let adjusted_native = U256::from_u128(env, u128::from(balance_native))
        .mul(&scale)
        .sub(&U256::from_u128(env, u128::from(amount_native_in)).mul(&fee));
    let adjusted_paired = U256::from_u128(env, balance_paired)
        .mul(&scale)
        .sub(&U256::from_u128(env, amount_paired_in).mul(&fee));
    let required = math::product(env, reserve_native, reserve_paired).mul(&scale.mul(&scale));
    if adjusted_native.mul(&adjusted_paired) < required {
        return Err(PoolError::InvalidK);
    }

    reserves::update(env, &mut state, balance_native, balance_paired);
    state.k_last = math::product(env, state.reserve_native, state.reserve_paired);
    set_pool_state(env, &state);
    extend_instance_ttl(env);

    PoolEvents::swap(
        env,
        sender,
        amount_native_in,
        amount_paired_in,
        amount_native_out,
        amount_paired_out,
        to,
    );

    reentrancy::release(env);
    Ok(())
}
