//! Calls out of the pool: asset balances and transfers, the controller's
//! fee-beneficiary lookup, and recipient callbacks.
//!
//! Collaborator failures are caught with the `try_*` client calls and surfaced
//! as the pool's own errors.

use nativeswap_callee_interface::SwapCalleeClient;
use soroban_sdk::{
    contractclient, token::TokenClient, vec, Address, Bytes, Env, IntoVal, String, Symbol, Val,
    Vec,
};

use crate::{errors::PoolError, storage::PoolStorage};

/// The all-zero Stellar account. Nobody holds its key.
const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

#[contractclient(name = "ControllerClient")]
pub trait ControllerInterface {
    fn fee_to(env: Env) -> Option<Address>;
}

pub fn zero_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_ACCOUNT))
}

fn balance_of(env: &Env, asset: &Address) -> Result<i128, PoolError> {
    let pool = env.current_contract_address();
    match TokenClient::new(env, asset).try_balance(&pool) {
        Ok(Ok(balance)) if balance >= 0 => Ok(balance),
        _ => Err(PoolError::InvalidBalance),
    }
}

/// Native currency held by the pool.
pub fn native_balance(env: &Env, native: &Address) -> Result<u64, PoolError> {
    let balance = balance_of(env, native)?;
    u64::try_from(balance).map_err(|_| PoolError::Overflow)
}

/// Paired asset held by the pool.
pub fn paired_balance(env: &Env, token: &Address) -> Result<u128, PoolError> {
    let balance = balance_of(env, token)?;
    u128::try_from(balance).map_err(|_| PoolError::InvalidBalance)
}

fn transfer(env: &Env, asset: &Address, to: &Address, amount: i128) -> Result<(), PoolError> {
    if amount == 0 {
        return Ok(());
    }
    let pool = env.current_contract_address();
    match TokenClient::new(env, asset).try_transfer(&pool, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(PoolError::TransferFailed),
    }
}

pub fn transfer_native(
    env: &Env,
    native: &Address,
    to: &Address,
    amount: u64,
) -> Result<(), PoolError> {
    transfer(env, native, to, i128::from(amount))
}

pub fn transfer_paired(
    env: &Env,
    token: &Address,
    to: &Address,
    amount: u128,
) -> Result<(), PoolError> {
    let amount = i128::try_from(amount).map_err(|_| PoolError::Overflow)?;
    transfer(env, token, to, amount)
}

/// Looks up the protocol fee beneficiary on the controller.
pub fn fee_beneficiary(env: &Env, controller: &Address) -> Result<Address, PoolError> {
    let fee_to = match ControllerClient::new(env, controller).try_fee_to() {
        Ok(Ok(Some(fee_to))) => fee_to,
        _ => return Err(PoolError::InvalidFeeToAddress),
    };
    if fee_to == zero_address(env) {
        return Err(PoolError::InvalidFeeToAddress);
    }
    Ok(fee_to)
}

/// Invokes the borrower-named callback on `to`.
pub fn invoke_borrow_callback(
    env: &Env,
    to: &Address,
    callback: &Symbol,
    state: &PoolStorage,
    amount_native: u64,
    amount_paired: u128,
    data: &Bytes,
) -> Result<(), PoolError> {
    let args: Vec<Val> = vec![
        env,
        env.current_contract_address().into_val(env),
        state.native.into_val(env),
        state.token.into_val(env),
        amount_native.into_val(env),
        amount_paired.into_val(env),
        data.into_val(env),
    ];
    match env.try_invoke_contract::<(), soroban_sdk::Error>(to, callback, args) {
        Ok(Ok(())) => Ok(()),
        _ => Err(PoolError::CallbackFailed),
    }
}

/// Invokes `on_swap` on a flash-swap recipient.
pub fn invoke_swap_callback(
    env: &Env,
    to: &Address,
    sender: &Address,
    state: &PoolStorage,
    amount_native_out: u64,
    amount_paired_out: u128,
    data: &Bytes,
) -> Result<(), PoolError> {
    let result = SwapCalleeClient::new(env, to).try_on_swap(
        &env.current_contract_address(),
        sender,
        &state.native,
        &state.token,
        &amount_native_out,
        &amount_paired_out,
        data,
    );
    match result {
        Ok(Ok(())) => Ok(()),
        _ => Err(PoolError::CallbackFailed),
    }
}
