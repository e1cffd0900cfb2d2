//! Adding and removing liquidity, plus the protocol fee accrued on both.

use soroban_sdk::{Address, Env, U256};

use crate::{
    errors::PoolError,
    events::PoolEvents,
    gateway,
    math::{
        self, shares_to_u256, sub_native, sub_paired, u256_to_native, u256_to_paired,
        u256_to_shares, MINIMUM_LIQUIDITY,
    },
    reentrancy, reserves, share_ledger,
    storage::{extend_instance_ttl, load_pool_state, set_pool_state, PoolStorage},
};

/// Mints the protocol's cut of fee-driven growth since the last checkpoint.
///
/// The beneficiary receives `supply * (√k - √k_last) / (5√k + √k_last)` new
/// shares, about one sixth of the growth. The checkpoint moves to the current
/// product whenever shares are minted, so an immediate second call mints
/// nothing. Returns the number of shares minted.
pub fn mint_fee(
    env: &Env,
    state: &mut PoolStorage,
    reserve_native: u64,
    reserve_paired: u128,
) -> Result<i128, PoolError> {
    if state.k_last == U256::from_u32(env, 0) {
        return Ok(0);
    }

    let k = math::product(env, reserve_native, reserve_paired);
    let root_k = math::sqrt(env, &k);
    let root_k_last = math::sqrt(env, &state.k_last);
    if root_k <= root_k_last {
        return Ok(0);
    }

    let supply = shares_to_u256(env, share_ledger::total_supply(env))?;
    let numerator = supply.mul(&root_k.sub(&root_k_last));
    let denominator = root_k.mul(&U256::from_u32(env, 5)).add(&root_k_last);
    let liquidity = u256_to_shares(&numerator.div(&denominator))?;
    if liquidity == 0 {
        return Ok(0);
    }

    let fee_to = gateway::fee_beneficiary(env, &state.controller)?;
    share_ledger::mint_shares(env, &fee_to, liquidity)?;
    state.k_last = k;
    Ok(liquidity)
}

/// Mints shares for whatever the caller deposited since the last update.
pub fn mint(env: &Env, sender: &Address, to: &Address) -> Result<i128, PoolError> {
    let mut state = load_pool_state(env)?;
    reentrancy::acquire(env)?;

    let reserve_native = state.reserve_native;
    let reserve_paired = state.reserve_paired;
    let total_supply = share_ledger::total_supply(env);
    let (balance_native, balance_paired) = reserves::measure(env, &state)?;
    let amount_native = sub_native(balance_native, reserve_native)?;
    let amount_paired = sub_paired(balance_paired, reserve_paired)?;

    // Priced against the supply from before any protocol fee shares.
    mint_fee(env, &mut state, reserve_native, reserve_paired)?;

    let liquidity = if total_supply == 0 {
        let root = math::sqrt(env, &math::product(env, amount_native, amount_paired));
        let root = u256_to_shares(&root)?;
        if root <= MINIMUM_LIQUIDITY {
            return Err(PoolError::InsufficientLiquidityMinted);
        }
        share_ledger::mint_shares(env, &gateway::zero_address(env), MINIMUM_LIQUIDITY)?;
        root - MINIMUM_LIQUIDITY
    } else {
        if reserve_native == 0 || reserve_paired == 0 {
            return Err(PoolError::InsufficientLiquidity);
        }
        let supply = shares_to_u256(env, total_supply)?;
        let by_native = U256::from_u128(env, u128::from(amount_native))
            .mul(&supply)
            .div(&U256::from_u128(env, u128::from(reserve_native)));
        let by_paired = U256::from_u128(env, amount_paired)
            .mul(&supply)
            .div(&U256::from_u128(env, reserve_paired));
        u256_to_shares(&math::min(by_native, by_paired))?
    };

    if liquidity <= 0 {
        return Err(PoolError::InsufficientLiquidityMinted);
    }

    share_ledger::mint_shares(env, to, liquidity)?;
    reserves::update(env, &mut state, balance_native, balance_paired);
    state.k_last = math::product(env, state.reserve_native, state.reserve_paired);
    set_pool_state(env, &state);
    extend_instance_ttl(env);

    PoolEvents::mint(env, sender, amount_native, amount_paired);

    reentrancy::release(env);
    Ok(liquidity)
}

/// Redeems the shares the caller transferred to the pool for a proportional
/// slice of each custodial balance.
pub fn burn(env: &Env, sender: &Address, to: &Address) -> Result<(u64, u128), PoolError> {
    let mut state = load_pool_state(env)?;
    reentrancy::acquire(env)?;

    let pool = env.current_contract_address();
    let reserve_native = state.reserve_native;
    let reserve_paired = state.reserve_paired;
    let (balance_native, balance_paired) = reserves::measure(env, &state)?;
    let liquidity = share_ledger::balance(env, &pool);
    let total_supply = share_ledger::total_supply(env);
    if total_supply <= 0 {
        return Err(PoolError::InsufficientLiquidityBurned);
    }

    let redeemed = shares_to_u256(env, liquidity)?;
    let supply = shares_to_u256(env, total_supply)?;
    let amount_native = u256_to_native(
        &redeemed
            .mul(&U256::from_u128(env, u128::from(balance_native)))
            .div(&supply),
    )?;
    let amount_paired = u256_to_paired(
        &redeemed
            .mul(&U256::from_u128(env, balance_paired))
            .div(&supply),
    )?;
    if amount_native == 0 || amount_paired == 0 {
        return Err(PoolError::InsufficientLiquidityBurned);
    }

    mint_fee(env, &mut state, reserve_native, reserve_paired)?;
    share_ledger::burn_shares(env, &pool, liquidity)?;
    gateway::transfer_native(env, &state.native, to, amount_native)?;
    gateway::transfer_paired(env, &state.token, to, amount_paired)?;

    let (balance_native, balance_paired) = reserves::measure(env, &state)?;
    reserves::update(env, &mut state, balance_native, balance_paired);
    state.k_last = math::product(env, state.reserve_native, state.reserve_paired);
    set_pool_state(env, &state);
    extend_instance_ttl(env);

    PoolEvents::burn(env, sender, amount_native, amount_paired, to);

    reentrancy::release(env);
    Ok((amount_native, amount_paired))
}
